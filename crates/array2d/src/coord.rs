//! Cell coordinates.

use serde::{Deserialize, Serialize};

/// Represents a cell address as `(row, col)`.
///
/// Coordinates are signed so that a point may sit outside any grid, and so
/// that wrap-around grids can resolve negative indices.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// The row index. Row 0 is the top row.
    pub row: i64,
    /// The column index. Column 0 is the leftmost column.
    pub col: i64,
}

impl Coord {
    /// Creates a new `Coord`.
    #[must_use]
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Returns the coordinate offset by `(d_row, d_col)` scaled by `times`,
    /// or `None` if the result does not fit in an `i64`.
    pub fn checked_offset(self, (d_row, d_col): (i64, i64), times: i64) -> Option<Self> {
        let row = d_row.checked_mul(times)?.checked_add(self.row)?;
        let col = d_col.checked_mul(times)?.checked_add(self.col)?;
        Some(Self { row, col })
    }
}

impl From<(i64, i64)> for Coord {
    fn from((row, col): (i64, i64)) -> Self {
        Self { row, col }
    }
}

impl From<Coord> for (i64, i64) {
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_conversion() {
        let c: Coord = (3, -4).into();
        assert_eq!(c, Coord::new(3, -4));
        let t: (i64, i64) = c.into();
        assert_eq!(t, (3, -4));
    }

    #[test]
    fn test_checked_offset() {
        let c = Coord::new(2, 2);
        assert_eq!(c.checked_offset((0, 1), 3), Some(Coord::new(2, 5)));
        assert_eq!(c.checked_offset((-1, 0), 5), Some(Coord::new(-3, 2)));
        assert_eq!(c.checked_offset((0, 1), -2), Some(Coord::new(2, 0)));
        assert_eq!(Coord::new(0, i64::MAX).checked_offset((0, 1), 1), None);
        assert_eq!(c.checked_offset((-1, 0), i64::MIN), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Coord::new(1, -2)), "(1, -2)");
    }
}
