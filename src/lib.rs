//! Deep Root - an idle growth game.
//!
//! This crate exposes the progression store and its rules for the terminal
//! front end, the balance simulator and tests.

pub mod build_info;
pub mod combat;
pub mod core;
pub mod simulator;

pub use crate::core::actions::{apply_action, reduce, Action};
pub use crate::core::balance::{Balance, Edition};
pub use crate::core::constants::{TICK_DELTA_SECONDS, TICK_INTERVAL_MS};
pub use crate::core::game_state::GameState;
pub use crate::core::tick::{advance_time, TickEvent, TickResult};
