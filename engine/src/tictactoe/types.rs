use std::fmt;

use serde::{Deserialize, Serialize};

/// Cell state. `X` is the maximizing mark (+1), `O` the minimizing one (-1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn value(&self) -> i32 {
        match self {
            Mark::X => 1,
            Mark::O => -1,
            Mark::Empty => 0,
        }
    }

    /// Mark owning a line whose cell values sum to `sum`.
    pub fn from_sign(sum: i32) -> Mark {
        match sum.signum() {
            1 => Mark::X,
            -1 => Mark::O,
            _ => Mark::Empty,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            Mark::X => Some(Direction::Maximize),
            Mark::O => Some(Direction::Minimize),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '_',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Mark> {
        match symbol {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' | '0' => Some(Mark::O),
            '.' | '_' | '-' => Some(Mark::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Which way a side pushes the board score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Maximize,
    Minimize,
}

impl Direction {
    /// Starting value a search must improve upon.
    pub fn worst_case_score(&self) -> i32 {
        match self {
            Direction::Maximize => i32::MIN,
            Direction::Minimize => i32::MAX,
        }
    }

    /// Strict betterness: ties keep `current`.
    pub fn prefers(&self, current: i32, candidate: i32) -> bool {
        match self {
            Direction::Maximize => candidate > current,
            Direction::Minimize => candidate < current,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayerMode {
    Random,
    Host,
}
