//! Headless balance simulator.
//!
//! Plays the real store with a scripted greedy player to answer pacing
//! questions for an edition:
//! - When does each story beat fire?
//! - When does the battle unlock?
//! - How far does the soul-upgrade loop get?

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{format_duration, KillRecord, SimReport, StoryRecord};
pub use runner::{choose_actions, run_simulation, ActionCounts};
