use thiserror::Error;

/// Contract violations reported by [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid dimensions {width}x{height}: both must be at least 1")]
    InvalidDimension { width: usize, height: usize },

    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },

    // Seed matrices are indexed [x][y]: `width` columns of `height` cells each.
    #[error("seed matrix has {columns} columns, grid is {width} wide")]
    SeedWidth { width: usize, columns: usize },

    #[error("seed column {x} has {len} cells, grid is {height} tall")]
    SeedHeight { x: usize, height: usize, len: usize },
}
