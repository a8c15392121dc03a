//! Console driver: a human (or nobody) against the alpha-beta engine.
//!
//! Moves are typed in coordinate form (`e2 e4`). Logging goes through
//! `env_logger`; set `RUST_LOG=debug` to see search summaries.

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use log::warn;

use alphabeta_chess::chess_errors::ChessError;
use alphabeta_chess::engines::engine_minimax::MinimaxEngine;
use alphabeta_chess::engines::engine_random::RandomEngine;
use alphabeta_chess::engines::engine_trait::{Engine, GoParams};
use alphabeta_chess::game_state::chess_types::*;
use alphabeta_chess::game_state::game_status::game_status;
use alphabeta_chess::move_generation::legal_move_apply::apply_move;
use alphabeta_chess::utils::algebraic::{describe_move, parse_coordinate_move};
use alphabeta_chess::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    White,
    Black,
    /// Engine plays both sides.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Opponent {
    Minimax,
    Random,
}

#[derive(Debug, Parser)]
#[command(name = "alphabeta_chess", about = "Play chess against a minimax engine")]
struct Args {
    /// Search depth below each root move.
    #[arg(long, default_value_t = 4)]
    depth: u8,

    /// Side played from the keyboard.
    #[arg(long, value_enum, default_value_t = Side::White)]
    human: Side,

    /// Engine used for the non-human side.
    #[arg(long, value_enum, default_value_t = Opponent::Minimax)]
    opponent: Opponent,

    /// Stop after this many plies. Zero means no limit.
    #[arg(long, default_value_t = 0)]
    max_moves: u32,
}

impl Side {
    fn plays(self, color: Color) -> bool {
        matches!(
            (self, color),
            (Side::White, Color::White) | (Side::Black, Color::Black)
        )
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut engine: Box<dyn Engine> = match args.opponent {
        Opponent::Minimax => Box::new(MinimaxEngine::new(args.depth)),
        Opponent::Random => Box::new(RandomEngine::new()),
    };
    let params = GoParams::default();

    let mut game_state = GameState::new_game();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut plies = 0u32;

    loop {
        println!("{}\n", render_game_state(&game_state));

        let status = game_status(&mut game_state);
        if status.is_over() {
            println!("{status}");
            break;
        }
        if args.max_moves > 0 && plies >= args.max_moves {
            println!("Move limit reached");
            break;
        }

        let side = game_state.side_to_move;
        let mv = if args.human.plays(side) {
            print!("{side} move: ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            let line = line.trim();
            if line == "quit" || line == "exit" {
                break;
            }
            match parse_coordinate_move(line) {
                Ok(mv) => mv,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            }
        } else {
            println!("{} is thinking...", engine.name());
            match engine.choose_move(&mut game_state, &params)?.best_move {
                Some(mv) => mv,
                None => {
                    warn!("engine returned no move in a live position");
                    break;
                }
            }
        };

        let Some(piece) = game_state.position.piece_at(mv.from) else {
            println!("{}", ChessError::EmptySquare(mv.from));
            continue;
        };
        match apply_move(&mut game_state, mv) {
            Ok(()) => {
                plies += 1;
                println!("{side} plays {}", describe_move(piece, mv.to));
            }
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}
