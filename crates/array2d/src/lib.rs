#![warn(missing_docs)]
#![doc = "Sparse 2D grids with optional torus wrap-around."]
#![doc = ""]
#![doc = "An [`Array2D`] maps `(row, col)` coordinates to values, falling back to a default"]
#![doc = "for cells that were never set. A [`Point`] carries a coordinate and optional data"]
#![doc = "and moves in [`Direction`]s, optionally bounded or wrapped by a grid."]

pub mod config;
pub mod coord;
pub mod direction;
pub mod error;
pub mod grid;
pub mod point;

pub use config::GridConfig;
pub use coord::Coord;
pub use direction::Direction;
pub use error::{GridError, GridResult};
pub use grid::Array2D;
pub use point::Point;
