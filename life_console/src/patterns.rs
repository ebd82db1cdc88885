// patterns.rs - Starting boards: named patterns and random fill

use anyhow::{Result, ensure};
use life_engine::{Grid, TCoord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A named arrangement of live cells, anchored at (0, 0).
#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [TCoord],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "r-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "gosper-glider-gun",
        cells: &[
            (24, 0),
            (22, 1), (24, 1),
            (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
            (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
            (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
            (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
            (10, 6), (16, 6), (24, 6),
            (11, 7), (15, 7),
            (12, 8), (13, 8),
        ],
    },
];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// clap value parser for `--pattern`.
pub fn parse_pattern(name: &str) -> Result<&'static Pattern, String> {
    find(name).ok_or_else(|| {
        let known: Vec<&str> = PATTERNS.iter().map(|p| p.name).collect();
        format!("unknown pattern '{name}' (known: {})", known.join(", "))
    })
}

impl Pattern {
    /// Bounding box as (width, height).
    pub fn size(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }

    /// Builds a board with this pattern in the middle.
    pub fn place_centered(&self, width: usize, height: usize) -> Result<Grid> {
        let (pw, ph) = self.size();
        ensure!(
            pw <= width && ph <= height,
            "pattern '{}' needs at least {pw}x{ph} cells, board is {width}x{height}",
            self.name
        );

        let (dx, dy) = ((width - pw) / 2, (height - ph) / 2);
        let cells = self.cells.iter().map(|&(x, y)| (x + dx, y + dy));
        Ok(Grid::from_cells(width, height, cells)?)
    }
}

/// Fills a `[x][y]` seed matrix, each cell alive with probability `density`.
pub fn random_fill(width: usize, height: usize, density: f64, rng: &mut impl Rng) -> Vec<Vec<bool>> {
    (0..width)
        .map(|_| (0..height).map(|_| rng.random_bool(density)).collect())
        .collect()
}

/// Where the first generation comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Seed {
    Random { density: f64, seed: u64 },
    Pattern(&'static Pattern),
}

impl Seed {
    pub fn build(&self, width: usize, height: usize) -> Result<Grid> {
        match self {
            Seed::Random { density, seed } => {
                let mut rng = StdRng::seed_from_u64(*seed);
                let matrix = random_fill(width, height, *density, &mut rng);
                Ok(Grid::new(width, height, Some(&matrix))?)
            }
            Seed::Pattern(pattern) => pattern.place_centered(width, height),
        }
    }
}
