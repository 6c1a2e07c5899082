use super::types::Coord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub width:  i64,
    pub height: i64,
}

impl Board {
    #[must_use]
    pub const fn square(size: i64) -> Self {
        Self {
            width:  size,
            height: size,
        }
    }

    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < self.width
            && coord.y < self.height
    }

    /// Number of cells, or `None` for a negative or overflowing size.
    #[must_use]
    pub fn cells(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)
            .and_then(|n| usize::try_from(n).ok())
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Coord { x, y }))
    }
}
