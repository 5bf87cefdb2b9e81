use super::board::Board;
use super::types::{Mark, Position};

/// Score of a board with no won line.
pub const NO_WIN_SCORE: i32 = 0;

const EDGE_BONUS: i32 = 1;
const CENTER_BONUS: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Row(usize),
    Column(usize),
    MainDiagonal,
    AntiDiagonal,
}

impl LineKind {
    pub fn positions(self, size: usize) -> impl Iterator<Item = Position> {
        (0..size).map(move |i| self.nth(i, size))
    }

    fn nth(&self, i: usize, size: usize) -> Position {
        match *self {
            LineKind::Row(row) => Position::new(row, i),
            LineKind::Column(col) => Position::new(i, col),
            LineKind::MainDiagonal => Position::new(i, i),
            LineKind::AntiDiagonal => Position::new(i, size - i - 1),
        }
    }

    fn on_edge(&self, size: usize) -> bool {
        match *self {
            LineKind::Row(row) => row == size - 1,
            LineKind::Column(col) => col == size - 1,
            LineKind::MainDiagonal | LineKind::AntiDiagonal => true,
        }
    }

    fn through_center(&self, size: usize) -> bool {
        if size % 2 == 0 {
            return false;
        }
        let middle = size / 2;
        match *self {
            LineKind::Row(row) => row == middle,
            LineKind::Column(col) => col == middle,
            LineKind::MainDiagonal | LineKind::AntiDiagonal => true,
        }
    }
}

/// Lines in scan order: rows, columns, main diagonal, anti-diagonal.
pub fn lines(size: usize) -> impl Iterator<Item = LineKind> {
    (0..size)
        .map(LineKind::Row)
        .chain((0..size).map(LineKind::Column))
        .chain([LineKind::MainDiagonal, LineKind::AntiDiagonal])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreReport {
    pub won: bool,
    pub score: i32,
    pub line: Option<LineKind>,
}

impl ScoreReport {
    fn no_win() -> Self {
        Self {
            won: false,
            score: NO_WIN_SCORE,
            line: None,
        }
    }

    /// Mark holding the reported line.
    pub fn winner(&self) -> Option<Mark> {
        if self.won {
            Some(Mark::from_sign(self.score))
        } else {
            None
        }
    }
}

fn line_sum(board: &Board, line: LineKind) -> i32 {
    line.positions(board.size())
        .map(|position| board.mark_at(position).value())
        .sum()
}

/// Edge bonus for the last row, last column and diagonals; center bonus on odd boards.
fn adjusted_score(line: LineKind, sum: i32, size: usize) -> i32 {
    let sign = sum.signum();
    let mut score = sum;
    if line.on_edge(size) {
        score += sign * EDGE_BONUS;
    }
    if line.through_center(size) {
        score += sign * CENTER_BONUS;
    }
    score
}

pub fn evaluate(board: &Board) -> ScoreReport {
    let size = board.size();
    let mut best = ScoreReport::no_win();

    for line in lines(size) {
        let sum = line_sum(board, line);
        if sum.unsigned_abs() as usize != size {
            continue;
        }

        let score = adjusted_score(line, sum, size);
        if !best.won || score.abs() > best.score.abs() {
            best = ScoreReport {
                won: true,
                score,
                line: Some(line),
            };
        }
    }

    best
}
