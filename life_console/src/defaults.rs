//! Default values for command-line options.

pub const WIDTH: u32 = 25;
pub const HEIGHT: u32 = 25;

/// Percentage of the board alive after a random fill.
pub const INITIAL_POP: u8 = 20;

pub const GENERATIONS: u64 = 100;

/// Frames per second; 0 runs unpaced.
pub const FRAMERATE: u32 = 10;
pub const MAX_FRAMERATE: u32 = 1_000;
