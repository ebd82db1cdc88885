// torus.rs - Edge-wrapping topology and the per-cell neighbor cache

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, PoisonError, Weak};

use arrayvec::ArrayVec;

use crate::grid::TCoord;

/// Largest board (in cells) that gets a precomputed neighbor table.
pub const NEIGHBOR_CACHE_MAX_CELLS: usize = 1 << 16;

/// Moore neighborhood of one cell, duplicates already collapsed.
pub type Neighbors = ArrayVec<TCoord, 8>;

/// Dimensions of a toroidal board, plus an optional table of every cell's
/// wrapped neighbors. One instance per board size is shared by all live grids.
#[derive(Debug)]
pub(crate) struct Torus {
    width: usize,
    height: usize,
    table: Option<Vec<Neighbors>>,  // indexed y * width + x
}

// Weak so a size's table is freed once no grid of that size is left.
static SHARED: LazyLock<Mutex<HashMap<(usize, usize), Weak<Torus>>>> = LazyLock::new(Default::default);

impl Torus {
    /// The topology for `width x height`, reusing the one already held by any
    /// other grid of that size.
    pub(crate) fn shared(width: usize, height: usize) -> Arc<Self> {
        let mut registry = SHARED.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(torus) = registry.get(&(width, height)).and_then(Weak::upgrade) {
            return torus;
        }

        registry.retain(|_, torus| torus.strong_count() > 0);
        let torus = Arc::new(Self::new(width, height));
        registry.insert((width, height), Arc::downgrade(&torus));
        torus
    }

    /// Builds the topology, precomputing neighbors when the board is small enough.
    fn new(width: usize, height: usize) -> Self {
        let area = width.saturating_mul(height);
        let table = (area <= NEIGHBOR_CACHE_MAX_CELLS).then(|| {
            let mut table = Vec::with_capacity(area);
            for y in 0..height {
                for x in 0..width {
                    table.push(wrap_neighbors(x, y, width, height));
                }
            }
            table
        });
        Self { width, height, table }
    }

    #[cfg(test)]
    fn uncached(width: usize, height: usize) -> Self {
        Self { width, height, table: None }
    }

    pub(crate) fn width(&self) -> usize { self.width }
    pub(crate) fn height(&self) -> usize { self.height }
    pub(crate) fn is_cached(&self) -> bool { self.table.is_some() }

    /// Caller guarantees `x < width` and `y < height`.
    pub(crate) fn neighbors(&self, x: usize, y: usize) -> Neighbors {
        match &self.table {
            Some(table) => table[y * self.width + x].clone(),
            None        => wrap_neighbors(x, y, self.width, self.height),
        }
    }
}

/// Computes the eight surrounding coordinates with wraparound on both axes.
///
/// On boards two cells wide (or tall) both sides wrap onto the same column, and on
/// a one-cell axis they wrap back onto the cell itself. Repeats are dropped and the
/// cell is never listed as its own neighbor.
pub fn wrap_neighbors(x: usize, y: usize, width: usize, height: usize) -> Neighbors {
    let mut neighbors = Neighbors::new();
    let columns = [wrap_dec(x, width), x, wrap_inc(x, width)];
    let rows    = [wrap_dec(y, height), y, wrap_inc(y, height)];

    for &nx in &columns {
        for &ny in &rows {
            let coord = (nx, ny);
            if coord == (x, y) || neighbors.contains(&coord) { continue; }
            neighbors.push(coord);
        }
    }
    neighbors
}

#[inline]
fn wrap_dec(v: usize, len: usize) -> usize {
    if v == 0 { len - 1 } else { v - 1 }
}

#[inline]
fn wrap_inc(v: usize, len: usize) -> usize {
    if v + 1 == len { 0 } else { v + 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(n: Neighbors) -> Vec<TCoord> {
        let mut v = n.to_vec();
        v.sort();
        v
    }

    #[test]
    fn interior_cell_has_eight_distinct_neighbors() {
        let n = sorted(wrap_neighbors(2, 2, 5, 5));
        assert_eq!(n, vec![(1, 1), (1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2), (3, 3)]);
    }

    #[test]
    fn corner_wraps_to_opposite_edges() {
        let n = wrap_neighbors(0, 0, 7, 4);
        assert_eq!(n.len(), 8);
        assert!(n.contains(&(6, 3)));
        assert!(n.contains(&(6, 0)));
        assert!(n.contains(&(0, 3)));
        assert!(n.contains(&(1, 1)));
    }

    #[test]
    fn far_corner_wraps_to_origin() {
        let n = wrap_neighbors(6, 3, 7, 4);
        assert!(n.contains(&(0, 0)));
        assert!(n.contains(&(0, 3)));
        assert!(n.contains(&(6, 0)));
    }

    #[test]
    fn two_wide_board_collapses_columns() {
        // x-1 and x+1 both land on the other column
        let n = sorted(wrap_neighbors(0, 1, 2, 4));
        assert_eq!(n, vec![(0, 0), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert!(wrap_neighbors(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn one_wide_column_only_sees_vertical_neighbors() {
        let n = sorted(wrap_neighbors(0, 0, 1, 3));
        assert_eq!(n, vec![(0, 1), (0, 2)]);
    }

    #[test]
    fn cached_table_matches_direct_computation() {
        let cached = Torus::new(6, 3);
        let direct = Torus::uncached(6, 3);
        assert!(cached.is_cached());
        assert!(!direct.is_cached());
        for y in 0..3 {
            for x in 0..6 {
                assert_eq!(cached.neighbors(x, y), direct.neighbors(x, y), "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn same_size_boards_share_one_table() {
        let a = Torus::shared(11, 13);
        let b = Torus::shared(11, 13);
        let c = Torus::shared(13, 11);
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
    }

    #[test]
    fn table_is_rebuilt_after_every_grid_of_that_size_is_gone() {
        let first = Torus::shared(17, 3);
        let weak = Arc::downgrade(&first);
        drop(first);
        assert!(weak.upgrade().is_none());
        assert_eq!(Torus::shared(17, 3).width(), 17);
    }

    #[test]
    fn large_board_skips_the_table() {
        let torus = Torus::new(1024, 1024);
        assert!(!torus.is_cached());
        assert_eq!(torus.neighbors(0, 0).len(), 8);
    }
}
