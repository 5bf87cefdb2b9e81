use serde::{Deserialize, Serialize};

use super::game_state::GameState;
use super::minimax::MinimaxStrategy;
use super::types::Position;
use crate::error::{Precondition, Result};
use crate::session_rng::SessionRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotKind {
    Random,
    Minimax,
}

/// Move chooser for an automated seat.
#[derive(Debug, Clone)]
pub enum Bot {
    Random,
    Minimax(MinimaxStrategy),
}

impl Bot {
    pub fn kind(&self) -> BotKind {
        match self {
            Bot::Random => BotKind::Random,
            Bot::Minimax(_) => BotKind::Minimax,
        }
    }

    pub fn choose_move(&self, state: &GameState, rng: &mut SessionRng) -> Result<Position> {
        match self {
            Bot::Random => calculate_random_move(state, rng),
            Bot::Minimax(strategy) => strategy.select_move(state),
        }
    }
}

fn calculate_random_move(state: &GameState, rng: &mut SessionRng) -> Result<Position> {
    if state.is_terminal() {
        return Err(if state.board().is_full() {
            Precondition::BoardFull.into()
        } else {
            Precondition::GameDecided.into()
        });
    }
    let available_moves = state.board().available_positions();
    rng.pick(&available_moves)
        .copied()
        .ok_or_else(|| Precondition::BoardFull.into())
}
