//! The periodic state transition.
//!
//! [`advance_time`] is called by the front end once per
//! [`TICK_INTERVAL_MS`](super::constants::TICK_INTERVAL_MS) with a fixed
//! `dt`. It returns a [`TickResult`] describing what happened so callers can
//! react without diffing the state. The narrative log inside the state stays
//! the authoritative record.

use super::constants::{BATTLE_UNLOCK_THRESHOLD, STARTER_ENEMY_LEVEL};
use super::game_state::GameState;
use super::skills::SkillId;
use super::story::{next_unlocks, STORY};
use crate::combat::logic::{attack_power, resolve_combat, CombatEvent};
use crate::combat::types::Enemy;

/// A single event produced by a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    /// A skill's timer ran out.
    SkillExpired { skill: SkillId },

    /// The current enemy reached 0 hp and was cleared.
    EnemyDefeated {
        name: String,
        level: u32,
        soul_fragments: u64,
        message: String,
    },

    /// Lifetime life force reached the battle threshold for the first time.
    BattleUnlocked { message: String },

    /// A narrative milestone fired. `index` is its position in the story table.
    StoryUnlocked { index: usize, message: String },
}

/// Result of processing a single tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    /// Events in the order they happened.
    pub events: Vec<TickEvent>,
    pub life_force_gained: f64,
    pub mana_gained: f64,
    /// Damage dealt to the enemy this tick (0 when not fighting).
    pub damage_dealt: f64,
}

impl TickResult {
    pub fn enemy_defeated(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, TickEvent::EnemyDefeated { .. }))
    }

    pub fn story_messages(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            TickEvent::StoryUnlocked { message, .. } => Some(message.as_str()),
            _ => None,
        })
    }
}

/// Advances the simulation by `dt` seconds as one atomic update.
///
/// Every rate below is read from the state as it was when the tick started,
/// so the life force credited in step 2 does not feed the attack power of the
/// same tick. Steps, in order:
///
/// 1. focus regeneration, clamped to max focus
/// 2. passive life force and mana accrual (mirrored into the lifetime totals)
/// 3. skill timers run down; expired skills deactivate
/// 4. combat against the current enemy, if any
/// 5. one-time automatic spawn of the starter enemy at the battle threshold
/// 6. narrative unlocks, each crossed threshold exactly once, in order
///
/// A non-positive or non-finite `dt` is ignored.
pub fn advance_time(state: &mut GameState, dt: f64) -> TickResult {
    let mut result = TickResult::default();
    if !dt.is_finite() || dt <= 0.0 {
        return result;
    }

    let mut next = state.clone();
    let before: &GameState = state;

    // ── 1. Focus regeneration ───────────────────────────────────
    next.focus = (before.focus + before.focus_regen_per_second() * dt).min(before.max_focus);

    // ── 2. Passive accrual ──────────────────────────────────────
    let life_force_gained = before.life_force_per_second() * dt;
    let mana_gained = before.mana_per_second() * dt;
    next.gain_life_force(life_force_gained);
    next.gain_mana(mana_gained);
    result.life_force_gained = life_force_gained;
    result.mana_gained = mana_gained;

    // ── 3. Skill timers ─────────────────────────────────────────
    for id in SkillId::all() {
        if next.skills.get_mut(id).tick(dt) {
            result.events.push(TickEvent::SkillExpired { skill: id });
        }
    }

    // ── 4. Combat ───────────────────────────────────────────────
    let power = attack_power(
        before.total_life_force,
        before.multipliers.attack,
        before.skills.damage_factor(),
    );
    let combat = next
        .enemy
        .as_mut()
        .map(|enemy| resolve_combat(enemy, power, dt));
    match combat {
        Some(CombatEvent::Hit { damage }) => {
            result.damage_dealt = damage;
        }
        Some(CombatEvent::EnemyDied {
            name,
            level,
            soul_fragments,
        }) => {
            result.damage_dealt = power * dt;
            next.soul_fragments += soul_fragments;
            next.enemies_defeated += 1;
            next.enemy = None;
            let message = format!(
                "{} is purified. +{} soul fragments.",
                name, soul_fragments
            );
            next.add_log_entry(message.clone());
            result.events.push(TickEvent::EnemyDefeated {
                name,
                level,
                soul_fragments,
                message,
            });
        }
        None => {}
    }

    // ── 5. Battle unlock ────────────────────────────────────────
    if !next.battle_unlocked && next.total_life_force >= BATTLE_UNLOCK_THRESHOLD {
        next.battle_unlocked = true;
        if next.enemy.is_none() {
            let enemy = Enemy::starter();
            let message = format!("{} rises from the abyss to meet you!", enemy.name);
            next.last_enemy_level = STARTER_ENEMY_LEVEL;
            next.enemy = Some(enemy);
            next.add_log_entry(message.clone());
            result.events.push(TickEvent::BattleUnlocked { message });
        }
    }

    // ── 6. Narrative unlocks ────────────────────────────────────
    let first = next.story_index;
    let (story_index, messages) = next_unlocks(next.total_life_force, first, &STORY);
    for (offset, message) in messages.into_iter().enumerate() {
        next.add_log_entry(message);
        result.events.push(TickEvent::StoryUnlocked {
            index: first + offset,
            message: message.to_string(),
        });
    }
    next.story_index = story_index;

    next.elapsed_seconds += dt;
    *state = next;
    result
}
