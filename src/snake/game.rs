use std::collections::VecDeque;

use itertools::Itertools;
use log::{debug, info, warn};
use rand::Rng;

use super::{
    config::GameConfig,
    constants::START_DIRECTION,
    models::GameState,
    types::Direction,
    utils::random_free_coord,
};

/// A fresh game: one segment at the origin, food somewhere else, heading
/// right.
pub fn reset<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> GameState {
    let snake = VecDeque::from([config.origin]);
    // a validated config always leaves room beside the origin.
    let food = random_free_coord(&config.board, &snake, rng)
        .unwrap_or(config.origin);

    GameState {
        snake,
        food,
        direction: START_DIRECTION,
        speed_ms: config.speed_ms,
        game_over: false,
        board: config.board,
    }
}

/// Runs a single tick.
///
/// Hitting a wall or any current segment (tail included) ends the game and
/// leaves the snake and food untouched. Landing on food grows the snake by
/// one and moves the food somewhere the new body is not.
pub fn advance<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> GameState {
    if state.game_over {
        return state.clone();
    }

    let next = state.head().neighbour(state.direction);

    if !state.board.contains(next) || state.occupies(next) {
        info!(
            "game over moving {} into {} at length {}",
            state.direction,
            next,
            state.len()
        );
        return GameState {
            game_over: true,
            ..state.clone()
        };
    }

    let mut step = state.clone();
    step.snake.push_front(next);

    if next == state.food {
        if let Some(food) = random_free_coord(&step.board, &step.snake, rng) {
            debug!(
                "ate food at {next}, length now {}, new food at {food}",
                step.len()
            );
            step.food = food;
        } else {
            warn!(
                "board is full at length {}: {}",
                step.len(),
                step.snake.iter().join(" ")
            );
            step.game_over = true;
        }
    } else {
        step.snake.pop_back();
    }

    step
}

/// Turns the snake, unless asked to reverse straight into its own neck.
#[must_use]
pub fn set_direction(state: &GameState, requested: Direction) -> GameState {
    if requested == state.direction.opposite() {
        debug!("ignoring reversal from {} to {requested}", state.direction);
        return state.clone();
    }

    GameState {
        direction: requested,
        ..state.clone()
    }
}
