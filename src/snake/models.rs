use std::{collections::VecDeque, fmt, time::Duration};

use super::{
    board::Board,
    types::{Coord, Direction},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    GameOver,
}

/// Everything the shell needs to draw a frame and run the next tick.
///
/// The snake is stored head-first and is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub snake:     VecDeque<Coord>,
    pub food:      Coord,
    pub direction: Direction,
    pub speed_ms:  u64,
    pub game_over: bool,
    pub board:     Board,
}

#[allow(clippy::len_without_is_empty)]
impl GameState {
    #[must_use]
    pub fn head(&self) -> Coord {
        self.snake[0]
    }

    #[must_use]
    pub fn tail(&self) -> Coord {
        self.snake[self.snake.len() - 1]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snake.len()
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        if self.game_over {
            Status::GameOver
        } else {
            Status::Running
        }
    }

    #[must_use]
    pub const fn speed(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }

    #[must_use]
    pub fn occupies(&self, coord: Coord) -> bool {
        self.snake.contains(&coord)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.board.height {
            for x in 0..self.board.width {
                let c = Coord { x, y };
                if c == self.head() {
                    write!(f, "@")?;
                } else if self.occupies(c) {
                    write!(f, "#")?;
                } else if c == self.food {
                    write!(f, "*")?;
                } else {
                    write!(f, ".")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
