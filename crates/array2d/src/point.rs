//! A coordinate with attached data that can move in cardinal directions.

#![warn(missing_docs)]

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::coord::Coord;
use crate::direction::Direction;
use crate::error::{GridError, GridResult};
use crate::grid::Array2D;

/// A position on (or off) a grid, carrying an optional payload.
///
/// A point is independent of any grid. Moves may be checked against a grid to
/// respect its bounds and wrap-around, but the grid never tracks points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point<D> {
    position: Coord,
    data: Option<D>,
}

impl<D> Point<D> {
    /// Creates a point at `position` with no data.
    pub fn new(position: impl Into<Coord>) -> Self {
        Self {
            position: position.into(),
            data: None,
        }
    }

    /// Creates a point at `position` carrying `data`.
    pub fn with_data(position: impl Into<Coord>, data: D) -> Self {
        Self {
            position: position.into(),
            data: Some(data),
        }
    }

    /// Current position.
    pub fn position(&self) -> Coord {
        self.position
    }

    /// Data attached to this point, if any.
    pub fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }

    /// Mutable access to the attached data, if any.
    pub fn data_mut(&mut self) -> Option<&mut D> {
        self.data.as_mut()
    }

    /// Attaches `data`, replacing anything attached before.
    pub fn set_data(&mut self, data: D) {
        self.data = Some(data);
    }

    /// Detaches and returns the data.
    pub fn take_data(&mut self) -> Option<D> {
        self.data.take()
    }

    /// Computes where `moves` steps in `direction` would land, without moving.
    ///
    /// No bounds are checked. A negative `moves` steps the opposite way.
    ///
    /// # Returns
    /// * `GridResult<Coord>` - The target coordinate or `CoordinateOverflow`
    pub fn get_move(&self, direction: Direction, moves: i64) -> GridResult<Coord> {
        self.position
            .checked_offset(direction.offset(), moves)
            .ok_or(GridError::CoordinateOverflow {
                row: self.position.row,
                col: self.position.col,
            })
    }

    /// Moves this point `moves` steps in `direction`.
    ///
    /// # Arguments
    /// * `direction` - Direction of travel
    /// * `moves` - Number of steps; negative values step the opposite way
    /// * `matrix` - Grid whose bounds and wrap-around apply to the move. With
    ///   `None` the point moves unconditionally.
    ///
    /// # Returns
    /// * `GridResult<Coord>` - The new position, or an error with the point left where it was
    pub fn set_move<T>(
        &mut self,
        direction: Direction,
        moves: i64,
        matrix: Option<&Array2D<T>>,
    ) -> GridResult<Coord> {
        let target = self.get_move(direction, moves).inspect_err(|e| {
            warn!(%direction, moves, "Point was not moved: {}", e);
        })?;
        let position = self.place(target, matrix)?;
        debug!(%direction, moves, row = position.row, col = position.col, "Moved point");
        Ok(position)
    }

    /// Moves this point to an absolute position.
    ///
    /// With a grid, the position is folded by the grid's wrap-around and must
    /// otherwise lie inside it.
    ///
    /// # Returns
    /// * `GridResult<Coord>` - The new position, or `OutOfBounds` with the point left where it was
    pub fn set_position<T>(
        &mut self,
        position: impl Into<Coord>,
        matrix: Option<&Array2D<T>>,
    ) -> GridResult<Coord> {
        self.place(position.into(), matrix)
    }

    fn place<T>(&mut self, target: Coord, matrix: Option<&Array2D<T>>) -> GridResult<Coord> {
        let resolved = match matrix {
            Some(grid) => grid.normalize(target).inspect_err(|e| {
                warn!(from = %self.position, "Point was not moved: {}", e);
            })?,
            None => target,
        };
        self.position = resolved;
        Ok(resolved)
    }
}

impl<D: std::fmt::Debug> std::fmt::Display for Point<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.data {
            Some(data) => write!(f, "Point({}, data={:?})", self.position, data),
            None => write!(f, "Point({}, data=None)", self.position),
        }
    }
}
