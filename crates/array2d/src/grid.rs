//! Sparse 2D grid with optional wrap-around on each axis.
//!
//! Only cells that were explicitly written occupy storage; every other cell
//! resolves to the grid's default value. An axis that wraps folds any index
//! back into range with Euclidean modulo, so a grid wrapping on both axes
//! behaves like the surface of a torus.

#![warn(missing_docs)]

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::coord::Coord;
use crate::error::{GridError, GridResult};

/// A fixed-size `rows x cols` grid mapping coordinates to values.
#[derive(Clone, Debug)]
pub struct Array2D<T> {
    /// Number of rows
    rows: usize,
    /// Number of columns
    cols: usize,
    /// Whether row indices wrap modulo `rows`
    wrap_rows: bool,
    /// Whether column indices wrap modulo `cols`
    wrap_cols: bool,
    /// Value of every cell that has not been set
    default_value: T,
    /// Explicitly set cells, keyed by normalized coordinate
    cells: HashMap<Coord, T>,
}

impl<T> Array2D<T> {
    /// Creates a new grid where every cell holds `default_value`.
    ///
    /// # Arguments
    /// * `rows` - Number of rows, must be non-zero
    /// * `cols` - Number of columns, must be non-zero
    /// * `default_value` - Value returned for cells that were never set
    /// * `wrap` - Whether both axes wrap around (torus topology)
    ///
    /// # Returns
    /// * `GridResult<Self>` - The grid or `InvalidDimension` if either dimension is zero
    pub fn new(rows: usize, cols: usize, default_value: T, wrap: bool) -> GridResult<Self> {
        Self::with_axis_wrap(rows, cols, default_value, wrap, wrap)
    }

    /// Creates a new grid where each axis wraps independently.
    ///
    /// # Arguments
    /// * `wrap_rows` - Whether row indices wrap (vertical movement leaves the bottom and re-enters at the top)
    /// * `wrap_cols` - Whether column indices wrap (horizontal movement leaves the right edge and re-enters at the left)
    pub fn with_axis_wrap(
        rows: usize,
        cols: usize,
        default_value: T,
        wrap_rows: bool,
        wrap_cols: bool,
    ) -> GridResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimension { rows, cols });
        }

        debug!(rows, cols, wrap_rows, wrap_cols, "Created grid");
        Ok(Self {
            rows,
            cols,
            wrap_rows,
            wrap_cols,
            default_value,
            cells: HashMap::new(),
        })
    }

    /// Number of rows in the grid.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the grid.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether row indices wrap around.
    pub fn wrap_rows(&self) -> bool {
        self.wrap_rows
    }

    /// Whether column indices wrap around.
    pub fn wrap_cols(&self) -> bool {
        self.wrap_cols
    }

    /// Whether both axes wrap, making the grid a torus.
    pub fn is_torus(&self) -> bool {
        self.wrap_rows && self.wrap_cols
    }

    /// The value of every cell that has not been set.
    pub fn default_value(&self) -> &T {
        &self.default_value
    }

    /// Folds a coordinate into the grid.
    ///
    /// Wrapping axes are reduced with Euclidean modulo; non-wrapping axes must
    /// already be in range.
    ///
    /// # Returns
    /// * `GridResult<Coord>` - The in-bounds coordinate or `OutOfBounds`
    pub fn normalize(&self, position: impl Into<Coord>) -> GridResult<Coord> {
        let position = position.into();
        let row = fold_axis(position.row, self.rows, self.wrap_rows);
        let col = fold_axis(position.col, self.cols, self.wrap_cols);
        match (row, col) {
            (Some(row), Some(col)) => Ok(Coord::new(row, col)),
            _ => Err(GridError::OutOfBounds {
                row: position.row,
                col: position.col,
                rows: self.rows,
                cols: self.cols,
            }),
        }
    }

    /// Whether `position` addresses a cell of this grid, after wrapping.
    pub fn contains(&self, position: impl Into<Coord>) -> bool {
        self.normalize(position).is_ok()
    }

    /// Gets the value at a position: the stored value, or the default if the cell was never set.
    ///
    /// # Returns
    /// * `GridResult<&T>` - The value or `OutOfBounds`
    pub fn get_data(&self, position: impl Into<Coord>) -> GridResult<&T> {
        let key = self.checked_key(position.into())?;
        Ok(self.cells.get(&key).unwrap_or(&self.default_value))
    }

    /// Sets the value at a position, overwriting anything stored there.
    ///
    /// # Returns
    /// * `GridResult<()>` - Success or `OutOfBounds`
    pub fn set_data(&mut self, position: impl Into<Coord>, value: T) -> GridResult<()> {
        let key = self.checked_key(position.into())?;
        trace!(row = key.row, col = key.col, "Set grid cell");
        self.cells.insert(key, value);
        Ok(())
    }

    /// Removes an explicitly set value so the cell resolves to the default again.
    ///
    /// # Returns
    /// * `GridResult<Option<T>>` - The value that was stored, if any, or `OutOfBounds`
    pub fn clear_data(&mut self, position: impl Into<Coord>) -> GridResult<Option<T>> {
        let key = self.checked_key(position.into())?;
        trace!(row = key.row, col = key.col, "Cleared grid cell");
        Ok(self.cells.remove(&key))
    }

    fn checked_key(&self, position: Coord) -> GridResult<Coord> {
        self.normalize(position).inspect_err(|e| {
            warn!(row = position.row, col = position.col, "Grid access rejected: {}", e);
        })
    }
}

impl<T: PartialEq> Array2D<T> {
    /// Returns every coordinate whose value equals `value`, in row-major order.
    ///
    /// Cells that were never set are matched against the default value, so
    /// searching for the default walks the whole grid. Any other value is
    /// looked up among the stored cells only.
    pub fn data_locs(&self, value: &T) -> Vec<Coord> {
        if *value != self.default_value {
            let mut locs: Vec<Coord> = self
                .cells
                .iter()
                .filter(|(_, cell)| *cell == value)
                .map(|(key, _)| *key)
                .collect();
            locs.sort_unstable_by_key(|c| (c.row, c.col));
            return locs;
        }

        let mut locs = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let key = Coord::new(row as i64, col as i64);
                let cell = self.cells.get(&key).unwrap_or(&self.default_value);
                if cell == value {
                    locs.push(key);
                }
            }
        }
        locs
    }
}

impl<T> std::fmt::Display for Array2D<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Array2D({}x{})", self.rows, self.cols)
    }
}

/// Maps an index onto `[0, dim)`, or `None` if it is out of range on a non-wrapping axis.
fn fold_axis(index: i64, dim: usize, wraps: bool) -> Option<i64> {
    // Dimensions beyond i64::MAX cannot be exceeded by any i64 index.
    let dim = i64::try_from(dim).unwrap_or(i64::MAX);
    if wraps {
        Some(index.rem_euclid(dim))
    } else if (0..dim).contains(&index) {
        Some(index)
    } else {
        None
    }
}
