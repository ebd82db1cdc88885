//! Conway's Game of Life on a fixed-size toroidal board.
//!
//! A [`Grid`] is one generation: the set of live `(x, y)` coordinates. [`tick`]
//! derives the next generation without touching its input, and returns `None`
//! once no cell changes state.

pub mod engine;
pub mod error;
pub mod grid;
mod torus;

pub use engine::{next_state, step, tick, Transition};
pub use error::GridError;
pub use grid::{Grid, TCoord, TSeed};
pub use torus::{NEIGHBOR_CACHE_MAX_CELLS, Neighbors, wrap_neighbors};
