//! Core game state and logic.

pub mod actions;
pub mod balance;
pub mod constants;
pub mod game_state;
pub mod skills;
pub mod story;
pub mod tick;
pub mod upgrades;

pub use actions::*;
pub use balance::{Balance, CostCurve, Edition};
pub use constants::*;
pub use game_state::*;
pub use skills::{Skill, SkillId, Skills};
pub use story::{next_unlocks, StoryBeat, STORY};
pub use tick::{advance_time, TickEvent, TickResult};
pub use upgrades::*;
