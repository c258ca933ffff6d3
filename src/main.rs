use std::fs::File;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use shogi_core::notation::{japanese, sfen, usi};
use shogi_core::prelude::*;
use shogi_core::strategy;
use simplelog::{LevelFilter, WriteLogger};

#[derive(Debug, Parser)]
#[command(name = "banmen", about = "Shogi position inspection tools")]
struct Cli {
    /// Write debug logs to banmen.debug.log
    #[arg(long)]
    debug: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render an SFEN position as a text board
    Show { sfen: String },
    /// List the squares that changed between two SFEN positions
    Diff { before: String, after: String },
    /// List pseudo-legal destinations for the piece on a square ("7g")
    Moves { sfen: String, square: String },
    /// Check whether a USI move is legal in a position
    Legal { sfen: String, usi_move: String },
    /// Report castles and tactics present in a position
    Strategies {
        sfen: String,
        /// Move number used for turn-gated tactics
        #[arg(long, default_value_t = 1)]
        turn: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.debug)?;

    match cli.command {
        Command::Show { sfen } => {
            let board = sfen::parse(&sfen)?;
            print!("{}", sfen::ascii(&board));
        },
        Command::Diff { before, after } => {
            let previous = sfen::parse(&before)?;
            let current = sfen::parse(&after)?;
            let changed = diff_cells(&previous, &current)?;
            info!("diff reported {} changed cells", changed.len());
            for pos in &changed {
                println!(
                    "{} {}",
                    usi::position_to_usi(*pos),
                    japanese::position_to_japanese(*pos)
                );
            }
            println!("{} cell(s) changed", changed.len());
        },
        Command::Moves { sfen, square } => {
            let board = sfen::parse(&sfen)?;
            let from = usi::parse_position(&square)?;
            for to in possible_moves(&board, from) {
                println!("{}", usi::position_to_usi(to));
            }
        },
        Command::Legal { sfen, usi_move } => {
            let board = sfen::parse(&sfen)?;
            let mv = usi::parse_move(&usi_move)?;
            if is_legal_move(&board, &mv) {
                println!("legal: {}", japanese::format_move(&mv, &board));
            } else {
                println!("illegal: {usi_move}");
            }
        },
        Command::Strategies { sfen, turn } => {
            let board = sfen::parse(&sfen)?;
            for player in [Player::Sente, Player::Gote] {
                let side = match player {
                    Player::Sente => "先手",
                    Player::Gote => "後手",
                };
                let found = strategy::detect(&board, player, turn);
                if found.is_empty() {
                    println!("{side}: -");
                } else {
                    let names: Vec<&str> =
                        found.iter().map(|strategy| strategy.name).collect();
                    println!("{side}: {}", names.join("、"));
                }
            }
        },
    }

    Ok(())
}

fn setup_logging(debug: bool) -> Result<()> {
    if debug {
        WriteLogger::init(
            LevelFilter::Debug,
            simplelog::ConfigBuilder::new()
                .set_target_level(LevelFilter::Error)
                .build(),
            File::create("banmen.debug.log")?,
        )?;
    }
    Ok(())
}
