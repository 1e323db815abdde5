//! This module defines the error types used by the `array2d` crate.

#![warn(missing_docs)]

use thiserror::Error;

/// Error type for grid and point operations.
///
/// This enum encapsulates all possible errors that can occur while building a
/// grid, addressing its cells or moving a point across it.
#[derive(Debug, Error)]
pub enum GridError {
    /// Error for invalid grid dimensions.
    /// This variant is returned when a grid is built with zero rows or zero columns.
    #[error("Invalid grid dimensions: {rows}x{cols} (rows and columns must be non-zero)")]
    InvalidDimension {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },
    /// Error for out-of-bounds access.
    /// This variant is returned when a coordinate falls outside the grid on an axis that does not wrap.
    #[error("Grid access out of bounds: ({row}, {col}) is outside {rows}x{cols}")]
    OutOfBounds {
        /// Row index that was requested.
        row: i64,
        /// Column index that was requested.
        col: i64,
        /// Number of rows in the grid.
        rows: usize,
        /// Number of columns in the grid.
        cols: usize,
    },
    /// Error for a move whose target cannot be represented.
    #[error("Coordinate overflow while moving from ({row}, {col})")]
    CoordinateOverflow {
        /// Row index the move started from.
        row: i64,
        /// Column index the move started from.
        col: i64,
    },
    /// Error for a grid configuration that could not be loaded or deserialized.
    #[error("Invalid grid configuration: {0}")]
    Config(#[from] config::ConfigError),
}

/// Convenience alias for results returned by this crate.
pub type GridResult<T> = Result<T, GridError>;
