use std::{env, time::Duration};

use color_eyre::{
    eyre::{ensure, WrapErr},
    Result,
};
use log::debug;

use super::{
    board::Board,
    constants::{GRID_SIZE, MAX_GRID_SIZE, ORIGIN, SPEED_MS},
    types::Coord,
};

pub const GRID_SIZE_VAR: &str = "SNAKE_GRID_SIZE";
pub const SPEED_VAR: &str = "SNAKE_SPEED_MS";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub board:    Board,
    pub speed_ms: u64,
    pub origin:   Coord,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board:    Board::square(GRID_SIZE),
            speed_ms: SPEED_MS,
            origin:   ORIGIN,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn speed(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }

    /// Builds a config from the process environment, falling back to the
    /// defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Fails when a variable is set but cannot be parsed, or describes a
    /// board that cannot hold the origin plus one piece of food.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`GameConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(GRID_SIZE_VAR) {
            let size: i64 = raw
                .trim()
                .parse()
                .wrap_err_with(|| format!("{GRID_SIZE_VAR}={raw:?} is not a number"))?;
            config.board = Board::square(size);
        }

        if let Some(raw) = lookup(SPEED_VAR) {
            config.speed_ms = raw
                .trim()
                .parse()
                .wrap_err_with(|| format!("{SPEED_VAR}={raw:?} is not a number"))?;
        }

        config.validate()?;
        debug!("using {config:?}");
        Ok(config)
    }

    /// # Errors
    ///
    /// Fails when the board cannot fit the origin and a piece of food, or
    /// the tick speed is zero.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.board.width <= MAX_GRID_SIZE && self.board.height <= MAX_GRID_SIZE,
            "a {}x{} board is larger than the {MAX_GRID_SIZE}x{MAX_GRID_SIZE} limit",
            self.board.width,
            self.board.height
        );
        ensure!(
            self.board.contains(self.origin),
            "origin {} lies outside a {}x{} board",
            self.origin,
            self.board.width,
            self.board.height
        );
        ensure!(
            self.board.cells().is_some_and(|cells| cells >= 2),
            "a {}x{} board has no room for food",
            self.board.width,
            self.board.height
        );
        ensure!(self.speed_ms > 0, "tick speed must be positive");
        Ok(())
    }
}
