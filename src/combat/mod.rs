//! Auto-battle: enemies and damage-over-time resolution.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
