// grid.rs - Grid types for Conway's Game of Life

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::GridError;
use crate::torus::{Neighbors, Torus};

pub type TCoord = (usize, usize);              // (x, y), x = column, y = row
pub type TSeed  = [Vec<bool>];                 // seed matrix indexed [x][y]

/// One generation of a toroidal board: the set of live coordinates.
///
/// A grid is built once (from a seed or by the engine) and then read. The
/// engine never modifies the grid it is stepping; it fills a fresh one.
#[derive(Clone)]
pub struct Grid {
    torus: Arc<Torus>,
    live_cells: HashSet<TCoord>,
}

impl Grid {
    /// Creates a `width x height` board, optionally seeded from a `[x][y]` matrix.
    pub fn new(width: usize, height: usize, initial_state: Option<&TSeed>) -> Result<Self, GridError> {
        let mut grid = Self::empty(width, height)?;

        if let Some(seed) = initial_state {
            if seed.len() != width {
                return Err(GridError::SeedWidth { width, columns: seed.len() });
            }
            for (x, column) in seed.iter().enumerate() {
                if column.len() != height {
                    return Err(GridError::SeedHeight { x, height, len: column.len() });
                }
                for (y, &alive) in column.iter().enumerate() {
                    if alive { grid.live_cells.insert((x, y)); }
                }
            }
        }

        debug!(
            width,
            height,
            population = grid.population(),
            neighbor_cache = grid.torus.is_cached(),
            "grid created"
        );
        Ok(grid)
    }

    /// All-dead board.
    pub fn empty(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        Ok(Self::with_torus(Torus::shared(width, height)))
    }

    /// Board with the given cells alive.
    pub fn from_cells<I>(width: usize, height: usize, cells: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = TCoord>,
    {
        let mut grid = Self::empty(width, height)?;
        for (x, y) in cells {
            grid.set(x, y, true)?;
        }
        Ok(grid)
    }

    /// Empty board sharing this grid's topology (and neighbor cache).
    pub(crate) fn blank(&self) -> Self {
        Self::with_torus(Arc::clone(&self.torus))
    }

    fn with_torus(torus: Arc<Torus>) -> Self {
        Self { torus, live_cells: HashSet::new() }
    }

    pub fn width(&self) -> usize { self.torus.width() }
    pub fn height(&self) -> usize { self.torus.height() }

    pub fn population(&self) -> usize { self.live_cells.len() }
    pub fn is_empty(&self) -> bool { self.live_cells.is_empty() }

    /// Live coordinates, in no particular order.
    pub fn live_cells(&self) -> impl Iterator<Item = TCoord> + '_ {
        self.live_cells.iter().copied()
    }

    pub fn get(&self, x: usize, y: usize) -> Result<bool, GridError> {
        self.check_bounds(x, y)?;
        Ok(self.is_alive((x, y)))
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<(), GridError> {
        self.check_bounds(x, y)?;
        if alive {
            self.live_cells.insert((x, y));
        } else {
            self.live_cells.remove(&(x, y));
        }
        Ok(())
    }

    /// Wrapped Moore neighborhood of `(x, y)`. See [`crate::wrap_neighbors`]
    /// for how narrow boards collapse.
    pub fn neighbors(&self, x: usize, y: usize) -> Result<Neighbors, GridError> {
        self.check_bounds(x, y)?;
        Ok(self.torus.neighbors(x, y))
    }

    // Unchecked variants for the engine, which only walks coordinates already on the board.
    #[inline]
    pub(crate) fn is_alive(&self, cell: TCoord) -> bool {
        self.live_cells.contains(&cell)
    }

    #[inline]
    pub(crate) fn neighbors_of(&self, (x, y): TCoord) -> Neighbors {
        self.torus.neighbors(x, y)
    }

    #[inline]
    pub(crate) fn insert(&mut self, cell: TCoord) {
        debug_assert!(cell.0 < self.width() && cell.1 < self.height());
        self.live_cells.insert(cell);
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), GridError> {
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(GridError::OutOfBounds { x, y, width, height });
        }
        Ok(())
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.live_cells == other.live_cells
    }
}

impl Eq for Grid {}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                f.write_str(if self.is_alive((x, y)) { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{} ({} alive)", self.width(), self.height(), self.population())?;
        fmt::Display::fmt(self, f)
    }
}
