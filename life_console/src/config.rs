// config.rs - Command line and the run configuration built from it

use clap::{ArgAction, Parser};
use tracing::info;

use crate::defaults;
use crate::driver::RunSettings;
use crate::patterns::{Pattern, Seed, parse_pattern};

/// Conway's Game of Life on a wrapping board, drawn in the terminal.
///
/// The run ends when the requested number of generations is reached or the
/// board stops changing (a still life, or every cell dead).
#[derive(Parser, Debug)]
#[command(name = "life", author, version, long_about = None)]
pub struct Cli {
    /// Width of the board in cells
    #[arg(long, default_value_t = defaults::WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Height of the board in cells
    #[arg(long, default_value_t = defaults::HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Percentage of the board which should be alive initially (random fill only)
    #[arg(long = "initialpop", value_name = "PERCENT", default_value_t = defaults::INITIAL_POP,
          value_parser = clap::value_parser!(u8).range(0..=100))]
    pub initial_pop: u8,

    /// Number of generations to simulate
    #[arg(long, default_value_t = defaults::GENERATIONS)]
    pub generations: u64,

    /// Frames per second (0 runs as fast as possible)
    #[arg(long, default_value_t = defaults::FRAMERATE,
          value_parser = clap::value_parser!(u32).range(0..=defaults::MAX_FRAMERATE as i64))]
    pub framerate: u32,

    /// Start from a named pattern instead of a random fill
    #[arg(long, value_name = "NAME", value_parser = parse_pattern)]
    pub pattern: Option<&'static Pattern>,

    /// Seed for the random fill, to replay a run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip drawing frames; only print the final summary
    #[arg(short, long)]
    pub quiet: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Everything a run needs, validated.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub width: usize,
    pub height: usize,
    pub seed: Seed,
    pub settings: RunSettings,
    pub render: bool,
}

impl Cli {
    pub fn into_config(self) -> RunConfig {
        let seed = match self.pattern {
            Some(pattern) => Seed::Pattern(pattern),
            None => {
                let seed = self.seed.unwrap_or_else(rand::random);
                info!(seed, "random fill seed");
                Seed::Random { density: f64::from(self.initial_pop) / 100.0, seed }
            }
        };

        RunConfig {
            width: self.width as usize,
            height: self.height as usize,
            seed,
            settings: RunSettings::new(self.generations, self.framerate),
            render: !self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("life").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_match_the_documented_values() {
        let config = parse(&["--seed", "9"]).unwrap().into_config();
        assert_eq!((config.width, config.height), (25, 25));
        assert_eq!(config.seed, Seed::Random { density: 0.2, seed: 9 });
        assert_eq!(config.settings, RunSettings { generations: 100, frame_interval: Some(Duration::from_millis(100)) });
        assert!(config.render);
    }

    #[test]
    fn pattern_replaces_random_fill() {
        let config = parse(&["--pattern", "glider", "--framerate", "0", "--quiet"]).unwrap().into_config();
        assert!(matches!(config.seed, Seed::Pattern(p) if p.name == "glider"));
        assert_eq!(config.settings.frame_interval, None);
        assert!(!config.render);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(parse(&["--width", "0"]).is_err());
        assert!(parse(&["--height", "0"]).is_err());
        assert!(parse(&["--initialpop", "101"]).is_err());
        assert!(parse(&["--framerate", "5000"]).is_err());
        assert!(parse(&["--pattern", "spaceship"]).is_err());
    }

    #[test]
    fn verbosity_counts() {
        assert_eq!(parse(&["-vv"]).unwrap().verbose, 2);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
