use thiserror::Error;

/// Main error type for the engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("board size must be at least 1, got {size}")]
    InvalidBoardSize { size: usize },

    #[error("position ({row},{col}) is outside a {size}x{size} board")]
    OutOfRange { row: usize, col: usize, size: usize },

    #[error("illegal move: cell ({row},{col}) is already occupied")]
    IllegalMove { row: usize, col: usize },

    #[error("cannot place an empty mark")]
    EmptyMark,

    #[error("precondition violated: {0}")]
    Precondition(Precondition),

    #[error("invalid players: {0}")]
    InvalidPlayers(String),

    #[error("invalid board '{context}': {reason}")]
    InvalidBoard { reason: String, context: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("move source has no more moves")]
    MovesExhausted,
}

/// Misuse of the move selection API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Precondition {
    #[error("board is full")]
    BoardFull,

    #[error("game is already won")]
    GameDecided,

    #[error("player {name} is not automated")]
    NotAutomated { name: String },

    #[error("{open} open cells exceed the exhaustive search limit of {limit}")]
    SearchTooLarge { open: usize, limit: usize },
}

impl From<Precondition> for Error {
    fn from(precondition: Precondition) -> Self {
        Error::Precondition(precondition)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
