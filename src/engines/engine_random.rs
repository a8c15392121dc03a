//! Random-move engine.
//!
//! Selects uniformly from legal moves. Used as a weak opponent and for
//! randomized playouts in tests.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessError;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::all_legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible move choices.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        _params: &GoParams,
    ) -> Result<EngineOutput, ChessError> {
        let side = game_state.side_to_move;
        let legal_moves = all_legal_moves(game_state, side);
        let nodes = legal_moves.len() as u64;

        Ok(EngineOutput {
            best_move: legal_moves.as_slice().choose(&mut self.rng).copied(),
            score: None,
            nodes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::chess_types::GameState;
    use crate::move_generation::legal_move_generator::all_legal_moves;

    #[test]
    fn picks_a_legal_move() {
        let mut game = GameState::new_game();
        let side = game.side_to_move;
        let legal = all_legal_moves(&mut game, side);
        let mut engine = RandomEngine::seeded(7);
        for _ in 0..16 {
            let out = engine
                .choose_move(&mut game, &GoParams::default())
                .expect("random engine never fails");
            let mv = out.best_move.expect("start position has moves");
            assert!(legal.contains(&mv));
            assert_eq!(out.nodes, 20);
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let mut game = GameState::new_game();
        let mut a = RandomEngine::seeded(42);
        let mut b = RandomEngine::seeded(42);
        for _ in 0..8 {
            let pa = a.choose_move(&mut game, &GoParams::default()).expect("ok");
            let pb = b.choose_move(&mut game, &GoParams::default()).expect("ok");
            assert_eq!(pa.best_move, pb.best_move);
        }
    }

    #[test]
    fn stalemated_side_gets_no_move() {
        let mut game =
            GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let out = RandomEngine::seeded(1)
            .choose_move(&mut game, &GoParams::default())
            .expect("ok");
        assert!(out.best_move.is_none());
    }
}
