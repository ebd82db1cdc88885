// engine.rs - Generation transitions over the sparse live set

use std::collections::HashMap;

use tracing::trace;

use crate::grid::{Grid, TCoord};

/// Result of stepping one generation, with how many cells changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: Grid,
    pub births: usize,
    pub deaths: usize,
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.births + self.deaths > 0
    }

    /// The next grid, or `None` when nothing changed (still life or empty board).
    pub fn into_changed(self) -> Option<Grid> {
        if self.changed() { Some(self.next) } else { None }
    }
}

/// Conway's rules for one cell.
#[inline]
pub fn next_state(alive: bool, live_neighbors: usize) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Computes the next generation of `current`.
///
/// Only live cells and the dead cells touching them can change, so the work is
/// driven by the live set: each live cell is judged from its own neighbor count,
/// and every dead neighbor it touches gets a tally. Dead cells that end up with a
/// tally of exactly three are born.
pub fn step(current: &Grid) -> Transition {
    let mut next = current.blank();
    let mut dead_neighbor_counts: HashMap<TCoord, usize> = HashMap::new();
    let mut deaths = 0;

    for cell in current.live_cells() {
        let mut live_neighbors = 0;
        for neighbor in current.neighbors_of(cell) {
            if current.is_alive(neighbor) {
                live_neighbors += 1;
            } else {
                *dead_neighbor_counts.entry(neighbor).or_default() += 1;
            }
        }

        if next_state(true, live_neighbors) { next.insert(cell); } else { deaths += 1; }
    }

    let mut births = 0;
    for (cell, count) in dead_neighbor_counts {
        if next_state(false, count) {
            next.insert(cell);
            births += 1;
        }
    }

    trace!(births, deaths, population = next.population(), "generation stepped");
    Transition { next, births, deaths }
}

/// Next generation of `current`, or `None` once the board stops changing.
pub fn tick(current: &Grid) -> Option<Grid> {
    step(current).into_changed()
}
