pub mod logger;
pub mod config;
pub mod error;
pub mod session_rng;
pub mod tictactoe;

pub use error::{Error, Precondition, Result};
pub use logger::{LogLevel, Logger};
pub use session_rng::SessionRng;
