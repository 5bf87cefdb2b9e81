use std::collections::VecDeque;

use super::bot_controller::Bot;
use super::game_state::GameState;
use super::player::Seat;
use super::types::Position;
use crate::error::{Error, Result};
use crate::logger::Logger;
use crate::session_rng::SessionRng;

/// Supplies moves for players that are not automated.
pub trait MoveSource {
    fn next_move(&mut self, state: &GameState) -> Result<Position>;
}

/// Replays a fixed list of moves in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoves {
    moves: VecDeque<Position>,
}

impl ScriptedMoves {
    pub fn new(moves: impl IntoIterator<Item = Position>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self, _state: &GameState) -> Result<Position> {
        self.moves.pop_front().ok_or(Error::MovesExhausted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub seat: Seat,
    pub position: Position,
    pub automated: bool,
}

#[derive(Debug, Clone)]
pub struct RoundOutcome {
    pub final_state: GameState,
    pub moves: Vec<MoveRecord>,
    pub winner: Option<Seat>,
}

/// One game from a starting state until it is won or drawn.
#[derive(Debug, Clone)]
pub struct Round {
    state: GameState,
    bots: [Bot; 2],
}

impl Round {
    /// `bots` is indexed by seat and only consulted for automated players.
    pub fn new(state: GameState, bots: [Bot; 2]) -> Self {
        Self { state, bots }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn play(
        &self,
        moves: &mut dyn MoveSource,
        rng: &mut SessionRng,
        logger: &Logger,
    ) -> Result<RoundOutcome> {
        let mut state = self.state.clone();
        let mut records = Vec::new();

        crate::log_info!(
            logger,
            "Round started, {} ({}) moves first",
            state.current_player().name(),
            state.current_player().mark()
        );

        while !state.is_terminal() {
            let seat = state.current_seat();
            let automated = state.current_player().is_automated();

            let (next, position) = if automated {
                self.play_bot_turn(&state, seat, rng)?
            } else {
                play_human_turn(&state, moves, logger)?
            };

            crate::log_debug!(
                logger,
                "{} played {}\n{}",
                state.current_player().name(),
                position,
                next.board()
            );

            records.push(MoveRecord {
                seat,
                position,
                automated,
            });
            state = next;
        }

        let winner = state
            .score()
            .winner()
            .and_then(|mark| state.players().seat_of(mark));

        match winner {
            Some(seat) => crate::log_info!(
                logger,
                "{} wins with score {} after {} moves",
                state.players().get(seat).name(),
                state.score().score,
                records.len()
            ),
            None => crate::log_info!(logger, "Draw after {} moves", records.len()),
        }

        Ok(RoundOutcome {
            final_state: state,
            moves: records,
            winner,
        })
    }

    fn play_bot_turn(
        &self,
        state: &GameState,
        seat: Seat,
        rng: &mut SessionRng,
    ) -> Result<(GameState, Position)> {
        let position = self.bots[seat.index()].choose_move(state, rng)?;
        Ok((state.play(position.row, position.col)?, position))
    }
}

/// Asks again after a move that is off the board or on an occupied cell.
fn play_human_turn(
    state: &GameState,
    moves: &mut dyn MoveSource,
    logger: &Logger,
) -> Result<(GameState, Position)> {
    loop {
        let position = moves.next_move(state)?;
        match state.play(position.row, position.col) {
            Ok(next) => return Ok((next, position)),
            Err(err @ (Error::OutOfRange { .. } | Error::IllegalMove { .. })) => {
                crate::log_info!(
                    logger,
                    "{} tried {}: {}",
                    state.current_player().name(),
                    position,
                    err
                );
            }
            Err(err) => return Err(err),
        }
    }
}
