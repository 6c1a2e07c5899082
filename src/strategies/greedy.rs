use color_eyre::{eyre::bail, Result};
use log::trace;

use super::Strategy;
use crate::snake::{
    models::GameState,
    types::Direction,
    utils::manhattan_distance,
};

/// Heads for the food along the shortest safe step, with no look-ahead.
pub struct Greedy;

impl Greedy {
    fn safe_directions(state: &GameState) -> impl Iterator<Item = Direction> + '_ {
        Direction::iter().copied().filter(move |d| {
            if *d == state.direction.opposite() {
                // filter out our neck
                return false;
            }
            let next = state.head().neighbour(*d);
            state.board.contains(next) && !state.occupies(next)
        })
    }
}

impl Strategy for Greedy {
    fn get_movement(&self, game_state: &GameState) -> Result<Direction> {
        if game_state.game_over {
            bail!("cannot steer a finished game");
        }

        let head = game_state.head();
        let choice = Self::safe_directions(game_state)
            .min_by_key(|d| manhattan_distance(head.neighbour(*d), game_state.food));

        trace!("greedy picked {choice:?} from {head}");

        // boxed in: keep going and accept the collision.
        Ok(choice.unwrap_or(game_state.direction))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::snake::{board::Board, types::Coord};

    fn state(body: &[(i64, i64)], food: (i64, i64), direction: Direction) -> GameState {
        GameState {
            snake: body.iter().map(|&(x, y)| Coord::new(x, y)).collect::<VecDeque<_>>(),
            food: Coord::new(food.0, food.1),
            direction,
            speed_ms: 200,
            game_over: false,
            board: Board::square(10),
        }
    }

    #[test]
    fn walks_towards_food() {
        let s = state(&[(2, 2)], (2, 7), Direction::Right);
        assert_eq!(Greedy.get_movement(&s).unwrap(), Direction::Down);
    }

    #[test]
    fn avoids_walls_and_body() {
        // food is behind a wall of body to the right.
        let s = state(&[(0, 1), (0, 2), (1, 2), (1, 1), (1, 0)], (5, 1), Direction::Up);
        assert_eq!(Greedy.get_movement(&s).unwrap(), Direction::Up);
    }

    #[test]
    fn refuses_finished_games() {
        let mut s = state(&[(2, 2)], (5, 5), Direction::Right);
        s.game_over = true;
        assert!(Greedy.get_movement(&s).is_err());
    }
}
