//! Translation of pointer positions to board coordinates.

use strictly_gomoku::{BoardSize, Coord};

/// Where the board's intersections sit on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    /// Screen column of column 0.
    pub origin_x: u16,
    /// Screen row of row 0.
    pub origin_y: u16,
    /// Screen columns between neighbouring intersections.
    pub unit_x: u16,
    /// Screen rows between neighbouring intersections.
    pub unit_y: u16,
    /// Board side length.
    pub size: BoardSize,
}

impl BoardGeometry {
    /// Screen position of an intersection.
    pub fn to_screen(&self, coord: Coord) -> (u16, u16) {
        (
            self.origin_x + coord.col as u16 * self.unit_x,
            self.origin_y + coord.row as u16 * self.unit_y,
        )
    }

    /// Nearest intersection to a pointer position.
    ///
    /// Positions more than half a unit outside the first or last grid line
    /// map to nothing.
    pub fn to_coord(&self, x: u16, y: u16) -> Option<Coord> {
        let col = nearest(x, self.origin_x, self.unit_x, self.size.get())?;
        let row = nearest(y, self.origin_y, self.unit_y, self.size.get())?;
        Some(Coord::new(row, col))
    }
}

/// Rounds `(pos - origin) / unit` to the closest line index in `[0, n)`.
fn nearest(pos: u16, origin: u16, unit: u16, n: usize) -> Option<usize> {
    if unit == 0 || n == 0 {
        return None;
    }
    let slack = i64::from(unit / 2);
    let span = (n as i64 - 1) * i64::from(unit);
    let offset = i64::from(pos) - i64::from(origin);
    if offset < -slack || offset > span + slack {
        return None;
    }
    let unit = i64::from(unit);
    let index = (offset + unit / 2).div_euclid(unit).clamp(0, n as i64 - 1);
    Some(index as usize)
}
