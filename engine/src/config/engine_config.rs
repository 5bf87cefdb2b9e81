use serde::{Deserialize, Serialize};

use super::Validate;
use crate::error::Result;
use crate::logger::Logger;
use crate::session_rng::SessionRng;
use crate::tictactoe::{
    Bot, BotKind, FirstPlayerMode, GameState, Mark, MinimaxSettings, MinimaxStrategy, Player,
    Players, Round, Seat,
};

/// Largest board the exhaustive search can finish from an empty start.
pub const MAX_BOARD_SIZE: usize = 3;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PlayerConfig {
    pub name: String,
    pub mark: Mark,
    pub automated: bool,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BotConfig {
    pub kind: BotKind,
    pub center_opening: bool,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    pub prefix: Option<String>,
    #[serde(default)]
    pub verbose: bool,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct EngineConfig {
    pub board_size: usize,
    pub first_player: FirstPlayerMode,
    pub players: [PlayerConfig; 2],
    pub bot: BotConfig,
    pub logging: LoggingConfig,
}

impl Validate for PlayerConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("player name must not be empty".to_string());
        }
        if self.mark == Mark::Empty {
            return Err(format!("player {} needs a non-empty mark", self.name));
        }
        Ok(())
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.board_size < 1 || self.board_size > MAX_BOARD_SIZE {
            return Err(format!(
                "board_size must be between 1 and {}, got {}",
                MAX_BOARD_SIZE, self.board_size
            ));
        }
        for player in &self.players {
            player.validate()?;
        }
        if self.players[0].mark == self.players[1].mark {
            return Err(format!(
                "players must use different marks, both use {}",
                self.players[0].mark
            ));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            first_player: FirstPlayerMode::Host,
            players: [
                PlayerConfig {
                    name: "player".to_string(),
                    mark: Mark::X,
                    automated: false,
                },
                PlayerConfig {
                    name: "bot".to_string(),
                    mark: Mark::O,
                    automated: true,
                },
            ],
            bot: BotConfig {
                kind: BotKind::Minimax,
                center_opening: true,
            },
            logging: LoggingConfig {
                prefix: Some("tictactoe".to_string()),
                verbose: false,
            },
        }
    }
}

impl EngineConfig {
    pub fn players(&self) -> Result<Players> {
        let [first, second] = &self.players;
        Players::new(
            Player::new(first.name.clone(), first.mark, first.automated)?,
            Player::new(second.name.clone(), second.mark, second.automated)?,
        )
    }

    pub fn first_seat(&self, rng: &mut SessionRng) -> Seat {
        match self.first_player {
            FirstPlayerMode::Host => Seat::First,
            FirstPlayerMode::Random => {
                if rng.random_bool() {
                    Seat::First
                } else {
                    Seat::Second
                }
            }
        }
    }

    pub fn logger(&self) -> Logger {
        Logger::new(self.logging.prefix.clone(), self.logging.verbose)
    }

    pub fn minimax_settings(&self) -> MinimaxSettings {
        MinimaxSettings {
            center_opening: self.bot.center_opening,
            ..MinimaxSettings::default()
        }
    }

    pub fn bot(&self, logger: &Logger) -> Bot {
        match self.bot.kind {
            BotKind::Random => Bot::Random,
            BotKind::Minimax => Bot::Minimax(MinimaxStrategy::new(
                self.minimax_settings(),
                logger.clone(),
            )),
        }
    }

    /// Fresh round with the configured bot on every automated seat.
    pub fn round(&self, rng: &mut SessionRng, logger: &Logger) -> Result<Round> {
        let first = self.first_seat(rng);
        let state = GameState::new(self.board_size, self.players()?, first)?;
        let bot = self.bot(logger);
        Ok(Round::new(state, [bot.clone(), bot]))
    }
}
