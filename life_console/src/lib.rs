//! Console front end for `life_engine`: command line, seeding, the generation
//! loop and ANSI rendering.

pub mod config;
pub mod console;
pub mod defaults;
pub mod driver;
pub mod patterns;
pub mod ui;

pub use config::{Cli, RunConfig};
pub use driver::{Outcome, RunSettings, Simulation, run};
pub use ui::{AnsiRenderer, NullRenderer, Renderer};
