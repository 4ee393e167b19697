//! Drives a planner on tokio and reports its progress as events.

mod events;
pub use events::*;

mod runner;
pub use runner::*;
