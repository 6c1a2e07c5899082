use rand::Rng;

use super::{board::Board, types::Coord};

#[must_use]
pub const fn manhattan_distance(a: Coord, b: Coord) -> i64 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Draws cells uniformly from the board until one is not in `exclude`.
///
/// Returns `None` only when `exclude` covers every cell of the board.
pub fn random_free_coord<'a, I, R>(
    board: &Board,
    exclude: I,
    rng: &mut R,
) -> Option<Coord>
where
    I: IntoIterator<Item = &'a Coord>,
    I::IntoIter: Clone,
    R: Rng + ?Sized,
{
    let exclude = exclude.into_iter();

    // fewer excluded cells than board cells guarantees a free one exists.
    if board.cells().map_or(true, |cells| exclude.clone().count() >= cells)
        && board.coords().all(|c| exclude.clone().any(|e| *e == c))
    {
        return None;
    }

    loop {
        let candidate = Coord {
            x: rng.gen_range(0..board.width),
            y: rng.gen_range(0..board.height),
        };
        if !exclude.clone().any(|e| *e == candidate) {
            return Some(candidate);
        }
    }
}
