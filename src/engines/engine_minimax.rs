//! Fixed-depth alpha-beta engine over the piece-square evaluator.

use log::info;

use crate::chess_errors::ChessError;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::*;
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer};
use crate::search::minimax::{best_move, SearchConfig};

pub struct MinimaxEngine<S: BoardScorer = PieceSquareScorer> {
    config: SearchConfig,
    scorer: S,
}

impl MinimaxEngine<PieceSquareScorer> {
    pub fn new(depth: u8) -> Self {
        Self::with_scorer(depth, PieceSquareScorer)
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn with_scorer(depth: u8, scorer: S) -> Self {
        Self {
            config: SearchConfig { depth },
            scorer,
        }
    }

    pub fn depth(&self) -> u8 {
        self.config.depth
    }
}

impl Default for MinimaxEngine<PieceSquareScorer> {
    fn default() -> Self {
        Self::new(SearchConfig::default().depth)
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, ChessError> {
        let config = SearchConfig {
            depth: params.depth.unwrap_or(self.config.depth),
        };
        let result = best_move(game_state, &self.scorer, config);

        if let Some(mv) = result.best_move {
            info!(
                "minimax depth {} chose {mv} score {} nodes {}",
                config.depth, result.best_score, result.stats.nodes
            );
        }

        Ok(EngineOutput {
            best_move: result.best_move,
            score: result.best_move.map(|_| result.best_score),
            nodes: result.stats.nodes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::MinimaxEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::chess_types::GameState;

    #[test]
    fn params_depth_overrides_configured_depth() {
        let mut game = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1")
            .expect("FEN should parse");
        let mut engine = MinimaxEngine::new(6);
        let out = engine
            .choose_move(&mut game, &GoParams { depth: Some(1) })
            .expect("search should succeed");
        assert_eq!(out.best_move.map(|m| m.to_string()), Some("a1a8".to_owned()));
        assert!(out.nodes > 0);
        assert_eq!(engine.depth(), 6);
    }

    #[test]
    fn mated_side_gets_no_move() {
        let mut game =
            GameState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .expect("FEN should parse");
        let out = MinimaxEngine::default()
            .choose_move(&mut game, &GoParams::default())
            .expect("search should succeed");
        assert!(out.best_move.is_none());
        assert!(out.score.is_none());
    }
}
