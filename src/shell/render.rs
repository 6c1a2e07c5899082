use crate::snake::{board::Board, models::GameState, types::Coord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Head,
    Segment,
    Food,
}

impl SpriteKind {
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Head => '@',
            Self::Segment => '#',
            Self::Food => '*',
        }
    }
}

/// A filled square, `size` units wide, with its top-left corner at
/// (`left`, `top`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub left: u32,
    pub top:  u32,
    pub size: u32,
}

/// A square viewport mapping grid cells linearly onto display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub cell_size: u32,
    pub cells:     u32,
}

impl Viewport {
    /// The largest viewport that fits `width` units across the board.
    #[must_use]
    pub fn fit(width: u32, board: &Board) -> Self {
        let cells = u32::try_from(board.width.max(1)).unwrap_or(u32::MAX);
        Self {
            cell_size: (width / cells).max(1),
            cells,
        }
    }

    /// Fits the board into a terminal area where each unit is two columns
    /// wide and one row tall.
    #[must_use]
    pub fn fit_terminal(columns: u16, rows: u16, board: &Board) -> Self {
        Self::fit(u32::from((columns / 2).min(rows)), board)
    }

    #[must_use]
    pub const fn side(&self) -> u32 {
        self.cell_size * self.cells
    }

    #[must_use]
    pub fn cell_offset(&self, coord: Coord) -> (u32, u32) {
        let scale = |v: i64| u32::try_from(v).unwrap_or(0) * self.cell_size;
        (scale(coord.x), scale(coord.y))
    }

    fn sprite(&self, kind: SpriteKind, coord: Coord) -> Sprite {
        let (left, top) = self.cell_offset(coord);
        Sprite {
            kind,
            left,
            top,
            size: self.cell_size,
        }
    }
}

/// Everything to draw for one frame: the food first, then the body from
/// tail to head so the head ends up on top.
#[must_use]
pub fn sprites(state: &GameState, viewport: &Viewport) -> Vec<Sprite> {
    let mut out = Vec::with_capacity(state.len() + 1);
    out.push(viewport.sprite(SpriteKind::Food, state.food));
    for (i, segment) in state.snake.iter().enumerate().rev() {
        let kind = if i == 0 {
            SpriteKind::Head
        } else {
            SpriteKind::Segment
        };
        out.push(viewport.sprite(kind, *segment));
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::snake::types::Direction;

    fn sample() -> GameState {
        GameState {
            snake:     VecDeque::from([Coord::new(2, 1), Coord::new(1, 1)]),
            food:      Coord::new(3, 0),
            direction: Direction::Right,
            speed_ms:  200,
            game_over: false,
            board:     Board::square(4),
        }
    }

    #[test]
    fn fit_divides_width_by_grid() {
        let viewport = Viewport::fit(400, &Board::square(20));
        assert_eq!(viewport.cell_size, 20);
        assert_eq!(viewport.side(), 400);
        assert_eq!(viewport.cell_offset(Coord::new(3, 7)), (60, 140));
    }

    #[test]
    fn terminal_fit_uses_the_shorter_side() {
        let board = Board::square(20);
        // 200 columns is 100 square units, but only 45 rows are free.
        assert_eq!(Viewport::fit_terminal(200, 45, &board).cell_size, 2);
        assert_eq!(Viewport::fit_terminal(80, 100, &board).cell_size, 2);
        // too small still draws one unit per cell.
        assert_eq!(Viewport::fit_terminal(20, 10, &board).cell_size, 1);
    }

    #[test]
    fn head_is_drawn_last() {
        let viewport = Viewport::fit(40, &Board::square(4));
        let drawn = sprites(&sample(), &viewport);
        assert_eq!(drawn.len(), 3);
        assert_eq!(drawn[0].kind, SpriteKind::Food);
        assert_eq!(
            drawn[2],
            Sprite {
                kind: SpriteKind::Head,
                left: 20,
                top:  10,
                size: 10,
            }
        );
    }
}
