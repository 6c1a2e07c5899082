use super::types::{Coord, Direction};

pub const GRID_SIZE: i64 = 20;
pub const MAX_GRID_SIZE: i64 = 100;
pub const ORIGIN: Coord = Coord { x: 2, y: 2 };
pub const START_DIRECTION: Direction = Direction::Right;
pub const SPEED_MS: u64 = 200;
