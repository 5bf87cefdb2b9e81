mod board;
mod bot_controller;
mod game_state;
mod minimax;
mod player;
mod score;
mod session;
mod types;

pub use board::Board;
pub use bot_controller::{Bot, BotKind};
pub use game_state::GameState;
pub use minimax::{MAX_SEARCH_CELLS, MinimaxSettings, MinimaxStrategy, SearchOutcome, Shortcut};
pub use player::{Player, Players, Seat};
pub use score::{LineKind, NO_WIN_SCORE, ScoreReport, evaluate, lines};
pub use session::{MoveRecord, MoveSource, Round, RoundOutcome, ScriptedMoves};
pub use types::{Direction, FirstPlayerMode, GameStatus, Mark, Position};
