use std::sync::Arc;

use super::board::Board;
use super::player::{Player, Players, Seat};
use super::score::{self, ScoreReport};
use super::types::{GameStatus, Mark, Position};
use crate::error::Result;

/// Board, players and turn pointer. Transitions return new states.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    players: Arc<Players>,
    to_move: Seat,
    last_move: Option<Position>,
}

impl GameState {
    pub fn new(size: usize, players: Players, first: Seat) -> Result<Self> {
        Ok(Self::from_board(Board::new(size)?, Arc::new(players), first))
    }

    /// Resumes from an existing position with `to_move` next.
    pub fn from_board(board: Board, players: Arc<Players>, to_move: Seat) -> Self {
        Self {
            board,
            players,
            to_move,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &Arc<Players> {
        &self.players
    }

    pub fn current_seat(&self) -> Seat {
        self.to_move
    }

    pub fn current_player(&self) -> &Player {
        self.players.get(self.to_move)
    }

    pub fn opponent(&self) -> &Player {
        self.players.opponent(self.to_move)
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Player whose mark sits on the last move, if one was recorded.
    pub fn last_mover(&self) -> Option<&Player> {
        let position = self.last_move?;
        let mark = self.board.cell(position.row, position.col).ok()?;
        let seat = self.players.seat_of(mark)?;
        Some(self.players.get(seat))
    }

    /// Places the current player's mark. The turn pointer is left untouched.
    pub fn apply_move(&self, row: usize, col: usize) -> Result<Self> {
        let board = self.board.place(row, col, self.current_player().mark())?;
        Ok(Self {
            board,
            players: Arc::clone(&self.players),
            to_move: self.to_move,
            last_move: Some(Position::new(row, col)),
        })
    }

    pub fn advance_turn(&self) -> Self {
        Self {
            board: self.board.clone(),
            players: Arc::clone(&self.players),
            to_move: self.to_move.other(),
            last_move: self.last_move,
        }
    }

    pub(crate) fn into_advanced(mut self) -> Self {
        self.to_move = self.to_move.other();
        self
    }

    /// Applies a move and hands the turn over unless the game ended.
    pub fn play(&self, row: usize, col: usize) -> Result<Self> {
        let next = self.apply_move(row, col)?;
        if next.is_terminal() {
            Ok(next)
        } else {
            Ok(next.into_advanced())
        }
    }

    pub fn score(&self) -> ScoreReport {
        score::evaluate(&self.board)
    }

    pub fn is_won(&self) -> bool {
        self.score().won
    }

    pub fn is_drawn(&self) -> bool {
        self.board.is_full() && !self.is_won()
    }

    pub fn is_terminal(&self) -> bool {
        self.board.is_full() || self.is_won()
    }

    pub fn winner(&self) -> Option<&Player> {
        let mark = self.score().winner()?;
        let seat = self.players.seat_of(mark)?;
        Some(self.players.get(seat))
    }

    pub fn status(&self) -> GameStatus {
        match self.score().winner() {
            Some(Mark::X) => GameStatus::XWon,
            Some(Mark::O) => GameStatus::OWon,
            _ if self.board.is_full() => GameStatus::Draw,
            _ => GameStatus::InProgress,
        }
    }
}
