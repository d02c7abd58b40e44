//! Rules engine: turn machine, measurement collapse, win/tie detection.

pub mod error;
pub mod outcome;
pub mod session;
mod win;

pub use error::RulesError;
pub use outcome::{GameResult, MeasurementOutcome, PlacementOutcome};
pub use session::{GameSession, Phase, SessionBuilder};
