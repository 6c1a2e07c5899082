pub mod greedy;

use color_eyre::Result;
pub use greedy::Greedy;

use crate::snake::{models::GameState, types::Direction};

pub trait Strategy {
    /// # Errors
    ///
    /// Fails when asked to steer a game that has already ended.
    fn get_movement(&self, game_state: &GameState) -> Result<Direction>;
}
