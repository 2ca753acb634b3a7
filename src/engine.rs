//! Bounded Conway's Game of Life engine.
//!
//! The field is a fixed `width x height` rectangle with dead borders:
//! neighbours outside the rectangle do not exist and never wrap around.

mod error;
mod grid;

pub use error::GridError;
pub use grid::{Grid, GridStats, DEFAULT_FILL_RATE};
