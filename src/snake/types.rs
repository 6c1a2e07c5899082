use std::{fmt, slice::Iter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn iter() -> Iter<'static, Direction> {
        static DIRECTIONS: [Direction; 4] = [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ];
        DIRECTIONS.iter()
    }

    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::Left => "Left",
                Direction::Right => "Right",
                Direction::Up => "Up",
                Direction::Down => "Down",
            }
        )
    }
}

/// A grid cell. `y` grows downwards, so moving up decreases it.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Coord {
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn neighbour(&self, direction: Direction) -> Coord {
        Coord {
            x: self.x
                + match direction {
                    Direction::Right => 1,
                    Direction::Left => -1,
                    _ => 0,
                },
            y: self.y
                + match direction {
                    Direction::Down => 1,
                    Direction::Up => -1,
                    _ => 0,
                },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposites_pair_up() {
        for d in Direction::iter() {
            assert_ne!(*d, d.opposite());
            assert_eq!(*d, d.opposite().opposite());
        }
    }

    #[test]
    fn up_moves_towards_the_top_row() {
        let c = Coord::new(4, 4);
        assert_eq!(c.neighbour(Direction::Up), Coord::new(4, 3));
        assert_eq!(c.neighbour(Direction::Down), Coord::new(4, 5));
        assert_eq!(c.neighbour(Direction::Left), Coord::new(3, 4));
        assert_eq!(c.neighbour(Direction::Right), Coord::new(5, 4));
    }
}
