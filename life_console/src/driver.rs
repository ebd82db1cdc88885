// driver.rs - Generation loop: pacing, termination and cancellation

use std::fmt;
use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use life_engine::{Grid, step};
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::ui::Renderer;

/// Owns the current generation and swaps in each successor.
#[derive(Debug)]
pub struct Simulation {
    current: Grid,
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Advanced { births: usize, deaths: usize },
    Settled,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        Self { current: grid, generation: 0 }
    }

    pub fn grid(&self) -> &Grid { &self.current }
    pub fn generation(&self) -> u64 { self.generation }

    /// Steps one generation. A settled board is left as it is.
    pub fn advance(&mut self) -> Advance {
        let transition = step(&self.current);
        if !transition.changed() { return Advance::Settled; }

        let (births, deaths) = (transition.births, transition.deaths);
        self.current = transition.next;
        self.generation += 1;
        Advance::Advanced { births, deaths }
    }

    fn settled(&self) -> Outcome {
        let generation = self.generation;
        match self.current.population() {
            0          => Outcome::Extinct { generation },
            population => Outcome::Stabilized { generation, population },
        }
    }
}

/// How long to run and how fast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub generations: u64,
    pub frame_interval: Option<Duration>,  // None = as fast as possible
}

impl RunSettings {
    /// `framerate` in frames per second; 0 disables pacing.
    pub fn new(generations: u64, framerate: u32) -> Self {
        let frame_interval = (framerate > 0).then(|| Duration::from_secs(1) / framerate);
        Self { generations, frame_interval }
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Stabilized { generation: u64, population: usize },
    Extinct { generation: u64 },
    LimitReached { generation: u64, population: usize },
    Interrupted { generation: u64, population: usize },
}

impl Outcome {
    pub fn generation(&self) -> u64 {
        match *self {
            Outcome::Stabilized { generation, .. }
            | Outcome::Extinct { generation }
            | Outcome::LimitReached { generation, .. }
            | Outcome::Interrupted { generation, .. } => generation,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Stabilized { generation, population } => {
                write!(f, "stable at generation {generation} with {population} live cells")
            }
            Outcome::Extinct { generation } => write!(f, "died out by generation {generation}"),
            Outcome::LimitReached { generation, population } => {
                write!(f, "reached generation {generation} with {population} live cells")
            }
            Outcome::Interrupted { generation, population } => {
                write!(f, "interrupted at generation {generation} with {population} live cells")
            }
        }
    }
}

/// Renders the starting board, then advances and renders once per frame until
/// the board settles, `settings.generations` is reached, or `shutdown` resolves.
pub async fn run<R, F>(sim: &mut Simulation, renderer: &mut R, settings: &RunSettings, shutdown: F) -> Result<Outcome>
where
    R: Renderer,
    F: Future<Output = ()>,
{
    let mut pace = settings.frame_interval.map(|period| {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval
    });
    tokio::pin!(shutdown);

    info!(
        width = sim.grid().width(),
        height = sim.grid().height(),
        population = sim.grid().population(),
        generations = settings.generations,
        frame_interval = ?settings.frame_interval,
        "simulation starting"
    );
    renderer.render(sim.grid(), sim.generation())?;

    while sim.generation() < settings.generations {
        tokio::select! {
            _ = &mut shutdown => {
                let outcome = Outcome::Interrupted { generation: sim.generation(), population: sim.grid().population() };
                info!(%outcome, "simulation stopped");
                return Ok(outcome);
            }
            _ = next_frame(pace.as_mut()) => {}
        }

        match sim.advance() {
            Advance::Settled => {
                let outcome = sim.settled();
                info!(%outcome, "simulation stopped");
                return Ok(outcome);
            }
            Advance::Advanced { births, deaths } => {
                debug!(generation = sim.generation(), births, deaths, population = sim.grid().population(), "advanced");
                renderer.render(sim.grid(), sim.generation())?;
            }
        }
    }

    let outcome = Outcome::LimitReached { generation: sim.generation(), population: sim.grid().population() };
    info!(%outcome, "simulation stopped");
    Ok(outcome)
}

async fn next_frame(pace: Option<&mut Interval>) {
    match pace {
        Some(interval) => { interval.tick().await; }
        None           => tokio::task::yield_now().await,
    }
}
