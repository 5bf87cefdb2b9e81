use serde::{Deserialize, Serialize};

use super::game_state::GameState;
use super::types::{Mark, Position};
use crate::error::{Precondition, Result};
use crate::logger::Logger;

/// Open cells above this would need pruning to finish in reasonable time.
pub const MAX_SEARCH_CELLS: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimaxSettings {
    pub center_opening: bool,
    /// Allows searching a board that already holds a won line.
    #[serde(default)]
    pub allow_decided_game: bool,
}

impl Default for MinimaxSettings {
    fn default() -> Self {
        Self {
            center_opening: true,
            allow_decided_game: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    SingleMove,
    CenterOpening,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub position: Position,
    pub score: i32,
    /// Recursive evaluation frames used to reach the decision.
    pub nodes: u64,
    pub shortcut: Option<Shortcut>,
}

struct Evaluation {
    score: i32,
    nodes: u64,
}

/// Full-depth minimax without pruning. Equal scores keep the earlier move.
#[derive(Debug, Clone, Default)]
pub struct MinimaxStrategy {
    settings: MinimaxSettings,
    logger: Logger,
}

impl MinimaxStrategy {
    pub fn new(settings: MinimaxSettings, logger: Logger) -> Self {
        Self { settings, logger }
    }

    pub fn select_move(&self, state: &GameState) -> Result<Position> {
        Ok(self.search(state)?.position)
    }

    pub fn search(&self, state: &GameState) -> Result<SearchOutcome> {
        self.check_preconditions(state)?;

        let player = state.current_player();
        let open = state.board().available_positions();

        if let [only] = open.as_slice() {
            let score = state.apply_move(only.row, only.col)?.score().score;
            crate::log_debug!(self.logger, "{} takes the last open cell {}", player.name(), only);
            return Ok(SearchOutcome {
                position: *only,
                score,
                nodes: 1,
                shortcut: Some(Shortcut::SingleMove),
            });
        }

        if let Some(center) = self.opening_center(state) {
            let score = state.apply_move(center.row, center.col)?.score().score;
            crate::log_debug!(self.logger, "{} opens in the center {}", player.name(), center);
            return Ok(SearchOutcome {
                position: center,
                score,
                nodes: 1,
                shortcut: Some(Shortcut::CenterOpening),
            });
        }

        crate::log_debug!(
            self.logger,
            "{} ({}) searching {} open positions",
            player.name(),
            player.mark(),
            open.len()
        );

        let mut best_position = open[0];
        let mut best_score = player.worst_case_score();
        let mut nodes = 0;

        for position in open {
            let child = state.apply_move(position.row, position.col)?.into_advanced();
            let evaluation = self.evaluate(&child)?;
            nodes += evaluation.nodes;

            crate::log_debug!(self.logger, "candidate {} scores {}", position, evaluation.score);

            if player.prefers(best_score, evaluation.score) {
                best_score = evaluation.score;
                best_position = position;
            }
        }

        crate::log_info!(
            self.logger,
            "{} picks {} with score {} after {} nodes",
            player.name(),
            best_position,
            best_score,
            nodes
        );

        Ok(SearchOutcome {
            position: best_position,
            score: best_score,
            nodes,
            shortcut: None,
        })
    }

    fn check_preconditions(&self, state: &GameState) -> Result<()> {
        let board = state.board();
        if board.is_full() {
            return Err(Precondition::BoardFull.into());
        }
        if !self.settings.allow_decided_game && state.is_won() {
            return Err(Precondition::GameDecided.into());
        }

        let player = state.current_player();
        if !player.is_automated() {
            return Err(Precondition::NotAutomated {
                name: player.name().to_string(),
            }
            .into());
        }

        let open = board.size() * board.size() - board.occupied_count();
        if open > MAX_SEARCH_CELLS {
            return Err(Precondition::SearchTooLarge {
                open,
                limit: MAX_SEARCH_CELLS,
            }
            .into());
        }
        Ok(())
    }

    /// Root-only speed shortcut, not part of the search result.
    fn opening_center(&self, state: &GameState) -> Option<Position> {
        if !self.settings.center_opening {
            return None;
        }
        let board = state.board();
        if board.occupied_count() > 1 {
            return None;
        }
        let center = board.center()?;
        match board.cell(center.row, center.col) {
            Ok(Mark::Empty) => Some(center),
            _ => None,
        }
    }

    /// Minimax value of `state` for the side to move.
    fn evaluate(&self, state: &GameState) -> Result<Evaluation> {
        let report = state.score();
        if report.won || state.board().is_full() {
            return Ok(Evaluation {
                score: report.score,
                nodes: 1,
            });
        }

        let open = state.board().available_positions();
        if let [only] = open.as_slice() {
            let score = state.apply_move(only.row, only.col)?.score().score;
            return Ok(Evaluation { score, nodes: 1 });
        }

        let mover = state.current_player();
        let mut best = mover.worst_case_score();
        let mut nodes = 1;

        for position in open {
            let child = state.apply_move(position.row, position.col)?.into_advanced();
            let evaluation = self.evaluate(&child)?;
            nodes += evaluation.nodes;
            if mover.prefers(best, evaluation.score) {
                best = evaluation.score;
            }
        }

        Ok(Evaluation { score: best, nodes })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::Error;
    use crate::tictactoe::board::Board;
    use crate::tictactoe::player::{Player, Players, Seat};

    /// X sits in the first seat, O in the second.
    fn state(layout: &str, to_move: Mark, automated: Mark) -> GameState {
        let players = Players::new(
            Player::new("xavier", Mark::X, automated == Mark::X).unwrap(),
            Player::new("olga", Mark::O, automated == Mark::O).unwrap(),
        )
        .unwrap();
        let seat = if to_move == Mark::X {
            Seat::First
        } else {
            Seat::Second
        };
        let board: Board = layout.parse().unwrap();
        GameState::from_board(board, Arc::new(players), seat)
    }

    fn exhaustive() -> MinimaxStrategy {
        MinimaxStrategy::new(
            MinimaxSettings {
                center_opening: false,
                allow_decided_game: false,
            },
            Logger::silent(),
        )
    }

    #[test]
    fn test_empty_board_opens_in_center() {
        let strategy = MinimaxStrategy::default();

        for mark in [Mark::X, Mark::O] {
            let outcome = strategy.search(&state(".../.../...", mark, mark)).unwrap();
            assert_eq!(outcome.position, Position::new(1, 1));
            assert_eq!(outcome.shortcut, Some(Shortcut::CenterOpening));
            assert_eq!(outcome.nodes, 1);
        }
    }

    #[test]
    fn test_reply_to_corner_opening_takes_center() {
        let strategy = MinimaxStrategy::default();
        let position = strategy
            .select_move(&state("X../.../...", Mark::O, Mark::O))
            .unwrap();
        assert_eq!(position, Position::new(1, 1));
    }

    #[test]
    fn test_center_shortcut_only_in_opening() {
        let strategy = MinimaxStrategy::default();
        // O wins row 0 instead of grabbing the open center.
        let outcome = strategy.search(&state("O.O/X../X.X", Mark::O, Mark::O)).unwrap();
        assert_eq!(outcome.position, Position::new(0, 1));
        assert_eq!(outcome.score, -3);
        assert_eq!(outcome.shortcut, None);
    }

    #[test]
    fn test_center_shortcut_never_fires_inside_recursion() {
        // One mark down and the center open: a root search would shortcut here.
        let reply = state("X../.../...", Mark::O, Mark::O);
        let with_shortcut = MinimaxStrategy::default().evaluate(&reply).unwrap();
        let without = exhaustive().evaluate(&reply).unwrap();

        assert_eq!(with_shortcut.score, without.score);
        assert_eq!(with_shortcut.nodes, without.nodes);
        assert!(with_shortcut.nodes > 8);
    }

    #[test]
    fn test_center_opening_matches_full_search_past_the_opening() {
        let midgame = state("X../.O./..X", Mark::O, Mark::O);
        let with_shortcut = MinimaxStrategy::default().search(&midgame).unwrap();
        let without = exhaustive().search(&midgame).unwrap();

        assert_eq!(with_shortcut, without);
        assert_eq!(with_shortcut.shortcut, None);
    }

    #[test]
    fn test_full_search_from_empty_board_is_a_draw() {
        let outcome = exhaustive()
            .search(&state(".../.../...", Mark::X, Mark::X))
            .unwrap();
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.position, Position::new(0, 0));
        assert_eq!(outcome.shortcut, None);
        assert!(outcome.nodes > 9);
    }

    #[test]
    fn test_blocks_opponent_diagonal() {
        // O holds (1,1) and (2,2) and threatens the main diagonal at (0,0).
        let position = exhaustive()
            .select_move(&state("..X/.OX/..O", Mark::X, Mark::X))
            .unwrap();
        assert_eq!(position, Position::new(0, 0));
    }

    #[test]
    fn test_takes_immediate_anti_diagonal_win() {
        let outcome = exhaustive()
            .search(&state("..X/.XO/..O", Mark::X, Mark::X))
            .unwrap();
        assert_eq!(outcome.position, Position::new(2, 0));
        assert_eq!(outcome.score, 6);
    }

    #[test]
    fn test_minimizer_blocks_anti_diagonal() {
        let position = exhaustive()
            .select_move(&state("..X/.XO/..O", Mark::O, Mark::O))
            .unwrap();
        assert_eq!(position, Position::new(2, 0));
    }

    #[test]
    fn test_prefers_strongest_winning_line() {
        // (0,2) wins row 0 for 3, (2,1) column 1 for 5, (2,2) the main diagonal for 6.
        let outcome = exhaustive()
            .search(&state("XX./OXO/O..", Mark::X, Mark::X))
            .unwrap();
        assert_eq!(outcome.position, Position::new(2, 2));
        assert_eq!(outcome.score, 6);
    }

    #[test]
    fn test_single_open_cell_is_played_without_recursion() {
        let outcome = exhaustive()
            .search(&state("XOX/XOO/OX.", Mark::X, Mark::X))
            .unwrap();
        assert_eq!(outcome.position, Position::new(2, 2));
        assert_eq!(outcome.shortcut, Some(Shortcut::SingleMove));
        assert_eq!(outcome.nodes, 1);
    }

    #[test]
    fn test_full_board_is_rejected() {
        let result = exhaustive().search(&state("XOX/XOO/OXX", Mark::X, Mark::X));
        assert_eq!(result, Err(Error::Precondition(Precondition::BoardFull)));
    }

    #[test]
    fn test_decided_game_is_rejected_unless_allowed() {
        let won = state("XXX/OO./...", Mark::O, Mark::O);
        assert_eq!(
            exhaustive().search(&won),
            Err(Error::Precondition(Precondition::GameDecided))
        );

        let strategy = MinimaxStrategy::new(
            MinimaxSettings {
                center_opening: false,
                allow_decided_game: true,
            },
            Logger::silent(),
        );
        let position = strategy.select_move(&won).unwrap();
        assert!(won.board().available_positions().contains(&position));
    }

    #[test]
    fn test_human_player_is_rejected() {
        let result = exhaustive().search(&state(".../.../...", Mark::X, Mark::O));
        assert_eq!(
            result,
            Err(Error::Precondition(Precondition::NotAutomated {
                name: "xavier".to_string()
            }))
        );
    }

    #[test]
    fn test_large_board_is_rejected() {
        let result = exhaustive().search(&state("..../..../..../....", Mark::X, Mark::X));
        assert_eq!(
            result,
            Err(Error::Precondition(Precondition::SearchTooLarge {
                open: 16,
                limit: MAX_SEARCH_CELLS
            }))
        );
    }

    #[test]
    fn test_late_large_board_is_searchable() {
        // Eight open cells on a 4x4 board; (0,3) completes the last column.
        let outcome = exhaustive()
            .search(&state("OOX./O..X/.O.X/...X", Mark::X, Mark::X))
            .unwrap();
        assert_eq!(outcome.position, Position::new(0, 3));
        assert_eq!(outcome.score, 5);
    }

    #[test]
    fn test_search_reports_candidates_to_logger() {
        let logger = Logger::buffered(Some("Bot".to_string()), true);
        let strategy = MinimaxStrategy::new(
            MinimaxSettings {
                center_opening: false,
                allow_decided_game: false,
            },
            logger.clone(),
        );
        strategy
            .select_move(&state("..X/.XO/..O", Mark::X, Mark::X))
            .unwrap();

        let lines = logger.lines();
        assert!(lines.iter().any(|l| l.contains("searching 5 open positions")));
        assert_eq!(lines.iter().filter(|l| l.contains("candidate")).count(), 5);
        assert!(lines.iter().any(|l| l.contains("xavier picks (2,0)")));
    }

    #[test]
    fn test_search_does_not_touch_input_state() {
        let start = state("..X/.XO/..O", Mark::O, Mark::O);
        let before = start.board().clone();
        exhaustive().select_move(&start).unwrap();
        assert_eq!(start.board(), &before);
        assert_eq!(start.current_seat(), Seat::Second);
    }
}
