use super::types::{Direction, Mark};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    mark: Mark,
    automated: bool,
    direction: Direction,
}

impl Player {
    pub fn new(name: impl Into<String>, mark: Mark, automated: bool) -> Result<Self> {
        let name = name.into();
        let direction = mark
            .direction()
            .ok_or_else(|| Error::InvalidPlayers(format!("player {} has no mark", name)))?;
        Ok(Self {
            name,
            mark,
            automated,
            direction,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn is_automated(&self) -> bool {
        self.automated
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn worst_case_score(&self) -> i32 {
        self.direction.worst_case_score()
    }

    pub fn prefers(&self, current: i32, candidate: i32) -> bool {
        self.direction.prefers(current, candidate)
    }
}

/// Turn pointer into a [`Players`] pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn index(&self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    pub fn other(&self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// The two players of a round, in creation order. Each is the other's opponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    players: [Player; 2],
}

impl Players {
    pub fn new(first: Player, second: Player) -> Result<Self> {
        if first.mark == second.mark {
            return Err(Error::InvalidPlayers(format!(
                "{} and {} both play {}",
                first.name, second.name, first.mark
            )));
        }
        Ok(Self {
            players: [first, second],
        })
    }

    pub fn get(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn opponent(&self, seat: Seat) -> &Player {
        self.get(seat.other())
    }

    pub fn seat_of(&self, mark: Mark) -> Option<Seat> {
        [Seat::First, Seat::Second]
            .into_iter()
            .find(|&seat| self.get(seat).mark == mark)
    }
}
