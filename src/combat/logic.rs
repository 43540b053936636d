use super::types::Enemy;
use crate::core::constants::{ATTACK_POWER_FACTOR, SOUL_FRAGMENTS_PER_LEVEL};

/// Damage per second dealt to the current enemy.
///
/// `sqrt(total_life_force) * 5 * attack_multiplier * skill_factor`
pub fn attack_power(total_life_force: f64, attack_multiplier: f64, skill_factor: f64) -> f64 {
    total_life_force.max(0.0).sqrt() * ATTACK_POWER_FACTOR * attack_multiplier * skill_factor
}

/// Soul fragments awarded for defeating an enemy of `level`.
pub fn soul_reward(level: u32) -> u64 {
    level as u64 * SOUL_FRAGMENTS_PER_LEVEL
}

/// Outcome of one combat step against a single enemy.
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    Hit { damage: f64 },
    EnemyDied { name: String, level: u32, soul_fragments: u64 },
}

/// Applies `power * dt` damage to `enemy`.
///
/// The caller clears the enemy on [`CombatEvent::EnemyDied`].
pub fn resolve_combat(enemy: &mut Enemy, power: f64, dt: f64) -> CombatEvent {
    let damage = power * dt;
    enemy.take_damage(damage);
    if enemy.is_alive() {
        CombatEvent::Hit { damage }
    } else {
        CombatEvent::EnemyDied {
            name: enemy.name.clone(),
            level: enemy.level,
            soul_fragments: soul_reward(enemy.level),
        }
    }
}

/// Seconds of combat needed to finish `enemy` at a constant `power`.
pub fn seconds_to_kill(enemy: &Enemy, power: f64) -> Option<f64> {
    if power <= 0.0 {
        return None;
    }
    Some(enemy.hp.max(0.0) / power)
}
