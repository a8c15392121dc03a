//! Rules-level integration tests
//!
//! Covers the legality invariant over random playouts, make/unmake
//! idempotence, checkmate and stalemate detection, and castling gating.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use alphabeta_chess::chess_errors::ChessError;
use alphabeta_chess::game_state::chess_types::*;
use alphabeta_chess::game_state::game_status::{game_status, GameStatus};
use alphabeta_chess::move_generation::legal_move_apply::{apply_move, make_move, unmake_move};
use alphabeta_chess::move_generation::legal_move_checks::is_king_in_check;
use alphabeta_chess::move_generation::legal_move_generator::{
    all_legal_moves, has_legal_move, is_in_check, legal_moves,
};
use alphabeta_chess::utils::algebraic::{algebraic_to_square, parse_coordinate_move};

fn sq(text: &str) -> Square {
    algebraic_to_square(text).expect("square should parse")
}

fn play(game: &mut GameState, moves: &[&str]) {
    for text in moves {
        let mv = parse_coordinate_move(text).expect("move should parse");
        apply_move(game, mv).unwrap_or_else(|err| panic!("{text} rejected: {err}"));
    }
}

const FIXTURES: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1",
];

// =============================================================================
// Legality invariant
// =============================================================================

#[test]
fn test_no_legal_move_leaves_own_king_attacked_in_random_playouts() {
    let mut rng = StdRng::seed_from_u64(0x00c0_ffee);

    for _game in 0..12 {
        let mut game = GameState::new_game();
        for _ply in 0..60 {
            let side = game.side_to_move;
            let moves = all_legal_moves(&mut game, side);

            for mv in &moves {
                let trial = TrialMove::new(&mut game, *mv);
                assert!(
                    !is_king_in_check(&trial.position, side),
                    "{mv} leaves the {side} king attacked"
                );
            }

            let Some(mv) = moves.choose(&mut rng).copied() else {
                break;
            };
            apply_move(&mut game, mv).expect("a generated move is accepted");
        }
    }
}

#[test]
fn test_pinned_piece_cannot_leave_the_pin_line() {
    // Knight on e4 is pinned by the rook on e8 against the king on e1.
    let mut game = GameState::from_fen("4r1k1/8/8/8/4N3/8/8/4K3 w - - 0 1")
        .expect("FEN should parse");
    assert!(legal_moves(&mut game, sq("e4")).is_empty());
}

#[test]
fn test_empty_square_has_no_moves() {
    let mut game = GameState::new_game();
    assert!(legal_moves(&mut game, sq("e4")).is_empty());
}

// =============================================================================
// Make/unmake idempotence
// =============================================================================

#[test]
fn test_make_unmake_restores_every_legal_move_in_every_fixture() {
    for fen in FIXTURES {
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        let before = game.clone();
        let side = game.side_to_move;

        for mv in all_legal_moves(&mut game, side) {
            let undo = make_move(&mut game, mv).expect("origin holds a piece");
            unmake_move(&mut game, &undo);
            assert_eq!(game, before, "{mv} not undone in {fen}");
        }
    }
}

#[test]
fn test_rejected_moves_leave_the_state_untouched() {
    let mut game = GameState::new_game();
    let before = game.clone();

    let err = apply_move(&mut game, ChessMove::new(sq("e2"), sq("e5")));
    assert!(matches!(err, Err(ChessError::IllegalMove(_))));
    let err = apply_move(&mut game, ChessMove::new(sq("e7"), sq("e5")));
    assert_eq!(err, Err(ChessError::WrongSide(sq("e7"))));
    let err = apply_move(&mut game, ChessMove::new(sq("e4"), sq("e5")));
    assert_eq!(err, Err(ChessError::EmptySquare(sq("e4"))));

    assert_eq!(game, before);
}

// =============================================================================
// Checkmate and stalemate
// =============================================================================

#[test]
fn test_fools_mate_is_checkmate() {
    let mut game = GameState::new_game();
    play(&mut game, &["f2 f3", "e7 e5", "g2 g4", "d8 h4"]);

    assert!(!has_legal_move(&mut game, Color::White));
    assert!(is_in_check(&game, Color::White));
    assert_eq!(
        game_status(&mut game),
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );

    let err = apply_move(&mut game, ChessMove::new(sq("a2"), sq("a3")));
    assert_eq!(err, Err(ChessError::GameOver));
}

#[test]
fn test_stalemate_is_not_check() {
    let mut game = GameState::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1")
        .expect("FEN should parse");
    assert!(!has_legal_move(&mut game, Color::Black));
    assert!(!is_in_check(&game, Color::Black));
    assert_eq!(game_status(&mut game), GameStatus::Stalemate);
}

// =============================================================================
// Castling gating
// =============================================================================

#[test]
fn test_no_castling_from_the_initial_position() {
    let mut game = GameState::new_game();
    assert!(legal_moves(&mut game, sq("e1")).is_empty());

    game.side_to_move = Color::Black;
    assert!(legal_moves(&mut game, sq("e8")).is_empty());
}

#[test]
fn test_castling_appears_once_the_back_rank_is_cleared() {
    let mut game = GameState::new_game();
    for name in ["b1", "c1", "d1", "f1", "g1"] {
        game.position.set_piece(sq(name), None);
    }

    let king_moves = legal_moves(&mut game, sq("e1"));
    assert!(king_moves.contains(&sq("g1")));
    assert!(king_moves.contains(&sq("c1")));

    apply_move(&mut game, ChessMove::new(sq("e1"), sq("g1"))).expect("castle is legal");
    assert_eq!(
        game.position.piece_at(sq("f1")),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert!(game.position.is_empty(sq("h1")));
    assert!(!game.castling_rights.may_castle_kingside(Color::White));
    assert!(!game.castling_rights.may_castle_queenside(Color::White));
}

#[test]
fn test_castling_lost_after_king_round_trip() {
    let mut game = GameState::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1")
        .expect("FEN should parse");
    play(&mut game, &["e1 f1", "e8 f8", "f1 e1", "f8 e8"]);

    let king_moves = legal_moves(&mut game, sq("e1"));
    assert!(!king_moves.contains(&sq("g1")));
    assert!(!king_moves.contains(&sq("c1")));
}

#[test]
fn test_no_castling_through_an_attacked_square() {
    // Black rook on f8 covers f1.
    let mut game = GameState::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1")
        .expect("FEN should parse");
    let king_moves = legal_moves(&mut game, sq("e1"));
    assert!(!king_moves.contains(&sq("g1")));
    assert!(king_moves.contains(&sq("c1")));
}
