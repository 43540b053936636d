//! Player actions against the progression store.
//!
//! Every action is total: when its precondition does not hold it returns
//! `false` and leaves the state untouched. Front ends grey out the matching
//! control using the `can_*` predicates on [`GameState`].

use super::constants::DEEP_BREATH_FOCUS_COST;
use super::game_state::GameState;
use super::skills::SkillId;
use super::tick::advance_time;
use super::upgrades::{SoulUpgradeKind, UpgradeKind};
use crate::combat::types::generate_enemy;
use rand::Rng;

/// Every mutation the store accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    DeepBreath,
    Meditate,
    BuyUpgrade(UpgradeKind),
    BuySoulUpgrade(SoulUpgradeKind),
    ActivateSkill(SkillId),
    SpawnEnemy,
    AdvanceTime { dt: f64 },
}

/// Applies `action` in place. Returns false when the action was a no-op.
pub fn apply_action<R: Rng>(state: &mut GameState, action: Action, rng: &mut R) -> bool {
    match action {
        Action::DeepBreath => deep_breath(state),
        Action::Meditate => meditate(state),
        Action::BuyUpgrade(kind) => buy_upgrade(state, kind),
        Action::BuySoulUpgrade(kind) => buy_soul_upgrade(state, kind),
        Action::ActivateSkill(id) => activate_skill(state, id),
        Action::SpawnEnemy => spawn_enemy(state, rng),
        Action::AdvanceTime { dt } => {
            advance_time(state, dt);
            true
        }
    }
}

/// Pure form of [`apply_action`]: returns the successor state.
pub fn reduce<R: Rng>(state: &GameState, action: Action, rng: &mut R) -> GameState {
    let mut next = state.clone();
    apply_action(&mut next, action, rng);
    next
}

/// Trades 10 focus for life force scaled by efficiency and multipliers.
pub fn deep_breath(state: &mut GameState) -> bool {
    if state.focus < DEEP_BREATH_FOCUS_COST {
        return false;
    }
    let gain = state.deep_breath_gain();
    state.focus -= DEEP_BREATH_FOCUS_COST;
    state.gain_life_force(gain);
    true
}

/// Trades life force for a focus refill, clamped to max focus.
pub fn meditate(state: &mut GameState) -> bool {
    let cost = state.balance.meditate_cost;
    if state.life_force < cost || state.focus >= state.max_focus {
        return false;
    }
    let restore = state.meditate_restore();
    state.life_force -= cost;
    state.focus = (state.focus + restore).min(state.max_focus);
    true
}

pub fn buy_upgrade(state: &mut GameState, kind: UpgradeKind) -> bool {
    let cost = state.upgrade_cost(kind);
    if state.life_force < cost {
        return false;
    }
    state.life_force -= cost;
    state.upgrades.increment(kind);
    true
}

pub fn buy_soul_upgrade(state: &mut GameState, kind: SoulUpgradeKind) -> bool {
    let cost = state.soul_upgrade_cost(kind);
    if state.soul_fragments < cost {
        return false;
    }
    state.soul_fragments -= cost;
    state.multipliers.raise(kind);
    let message = format!(
        "{} deepens to rank {} (x{:.1}).",
        kind.name(),
        state.multipliers.rank(kind),
        state.multipliers.get(kind)
    );
    state.add_log_entry(message);
    true
}

pub fn activate_skill(state: &mut GameState, id: SkillId) -> bool {
    let skill = *state.skills.get(id);
    if skill.active || state.mana < skill.mana_cost {
        return false;
    }
    state.mana -= skill.mana_cost;
    state.skills.get_mut(id).activate();
    state.add_log_entry(format!("{} floods the depths with light!", id.name()));
    true
}

/// Summons the next enemy, one level above the last one spawned.
///
/// Only one enemy exists at a time; summoning while fighting is a no-op.
pub fn spawn_enemy<R: Rng>(state: &mut GameState, rng: &mut R) -> bool {
    if state.enemy.is_some() {
        return false;
    }
    let level = state.last_enemy_level + 1;
    let enemy = generate_enemy(level, rng);
    state.add_log_entry(format!(
        "{} (Lv.{}) answers your summons.",
        enemy.name, enemy.level
    ));
    state.last_enemy_level = level;
    state.enemy = Some(enemy);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::types::{Enemy, ENEMY_NAMES};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(1)
    }

    #[test]
    fn test_deep_breath() {
        let mut state = GameState::default();
        assert!(deep_breath(&mut state));
        assert_eq!(state.focus, 90.0);
        assert_eq!(state.life_force, 1.0);
        assert_eq!(state.total_life_force, 1.0);
        // No log entry for breathing
        assert_eq!(state.log.len(), 1);
    }

    #[test]
    fn test_deep_breath_low_focus_is_noop() {
        let mut state = GameState::default();
        state.focus = 5.0;
        let before = state.clone();
        assert!(!deep_breath(&mut state));
        assert_eq!(state, before);
    }

    #[test]
    fn test_deep_breath_exactly_ten_focus() {
        let mut state = GameState::default();
        state.focus = 10.0;
        assert!(deep_breath(&mut state));
        assert_eq!(state.focus, 0.0);
    }

    #[test]
    fn test_deep_breath_scales_with_multipliers() {
        let mut state = GameState::default();
        state.upgrades.set(UpgradeKind::Efficiency, 3);
        state.multipliers.growth = 1.5;
        deep_breath(&mut state);
        assert_eq!(state.life_force, 4.5);
    }

    #[test]
    fn test_meditate() {
        let mut state = GameState::default();
        state.life_force = 25.0;
        state.total_life_force = 25.0;
        state.focus = 50.0;
        assert!(meditate(&mut state));
        assert_eq!(state.life_force, 5.0);
        assert_eq!(state.total_life_force, 25.0);
        assert_eq!(state.focus, 80.0);
    }

    #[test]
    fn test_meditate_clamps_focus() {
        let mut state = GameState::default();
        state.life_force = 20.0;
        state.total_life_force = 20.0;
        state.focus = 95.0;
        assert!(meditate(&mut state));
        assert_eq!(state.focus, 100.0);
    }

    #[test]
    fn test_meditate_preconditions() {
        let mut state = GameState::default();
        state.life_force = 19.0;
        state.total_life_force = 19.0;
        state.focus = 0.0;
        let before = state.clone();
        assert!(!meditate(&mut state));
        assert_eq!(state, before);

        // Full focus
        state.life_force = 100.0;
        state.total_life_force = 100.0;
        state.focus = 100.0;
        let before = state.clone();
        assert!(!meditate(&mut state));
        assert_eq!(state, before);
    }

    #[test]
    fn test_buy_upgrade() {
        let mut state = GameState::default();
        state.life_force = 30.0;
        state.total_life_force = 30.0;
        assert!(buy_upgrade(&mut state, UpgradeKind::AutoGrow));
        assert_eq!(state.life_force, 20.0);
        assert_eq!(state.upgrade_level(UpgradeKind::AutoGrow), 1);
        assert!(buy_upgrade(&mut state, UpgradeKind::AutoGrow));
        assert_eq!(state.life_force, 5.0);
        assert_eq!(state.upgrade_level(UpgradeKind::AutoGrow), 2);
        // 22.5 > 5
        assert!(!buy_upgrade(&mut state, UpgradeKind::AutoGrow));
        assert_eq!(state.upgrade_level(UpgradeKind::AutoGrow), 2);
        assert_eq!(state.total_life_force, 30.0);
    }

    #[test]
    fn test_buy_upgrade_unaffordable_is_noop() {
        let mut state = GameState::default();
        let before = state.clone();
        assert!(!buy_upgrade(&mut state, UpgradeKind::AutoGrow));
        assert_eq!(state, before);
    }

    #[test]
    fn test_buy_soul_upgrade() {
        let mut state = GameState::default();
        state.soul_fragments = 30;
        assert!(buy_soul_upgrade(&mut state, SoulUpgradeKind::Attack));
        assert_eq!(state.soul_fragments, 20);
        assert!((state.multipliers.attack - 1.2).abs() < 1e-9);
        assert_eq!(state.multipliers.growth, 1.0);
        assert!(state.latest_log().unwrap_or("").contains("Abyssal Sharpness"));

        // Second rank costs 18
        assert!(buy_soul_upgrade(&mut state, SoulUpgradeKind::Attack));
        assert_eq!(state.soul_fragments, 2);
        assert!(!buy_soul_upgrade(&mut state, SoulUpgradeKind::Growth));
    }

    #[test]
    fn test_activate_skill() {
        let mut state = GameState::default();
        state.mana = 60.0;
        state.total_mana = 60.0;
        assert!(activate_skill(&mut state, SkillId::PurifyingRadiance));
        assert_eq!(state.mana, 10.0);
        let skill = state.skills.get(SkillId::PurifyingRadiance);
        assert!(skill.active);
        assert_eq!(skill.timer, skill.duration);
        assert_eq!(state.log.len(), 2);
    }

    #[test]
    fn test_activate_skill_preconditions() {
        let mut state = GameState::default();
        state.mana = 49.0;
        state.total_mana = 49.0;
        let before = state.clone();
        assert!(!activate_skill(&mut state, SkillId::PurifyingRadiance));
        assert_eq!(state, before);

        state.mana = 200.0;
        state.total_mana = 200.0;
        assert!(activate_skill(&mut state, SkillId::PurifyingRadiance));
        let before = state.clone();
        assert!(!activate_skill(&mut state, SkillId::PurifyingRadiance));
        assert_eq!(state, before);
    }

    #[test]
    fn test_spawn_enemy_escalates_level() {
        let mut state = GameState::default();
        let mut rng = rng();
        assert!(spawn_enemy(&mut state, &mut rng));
        let first = state.enemy.clone().expect("enemy spawned");
        assert_eq!(first.level, 1);
        assert_eq!(first.max_hp, 1000.0);
        assert!(ENEMY_NAMES.contains(&first.name.as_str()));

        // One at a time
        assert!(!spawn_enemy(&mut state, &mut rng));

        state.enemy = None;
        assert!(spawn_enemy(&mut state, &mut rng));
        let second = state.enemy.clone().expect("enemy spawned");
        assert_eq!(second.level, 2);
        assert_eq!(second.hp, 2000.0);
        assert_eq!(state.last_enemy_level, 2);
    }

    #[test]
    fn test_spawn_after_starter_is_level_two() {
        let mut state = GameState::default();
        state.last_enemy_level = 1;
        let mut rng = rng();
        spawn_enemy(&mut state, &mut rng);
        assert_eq!(state.enemy.as_ref().map(|e| e.level), Some(2));
        assert_ne!(state.enemy, Some(Enemy::starter()));
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut state = GameState::default();
        let mut rng = rng();
        assert!(apply_action(&mut state, Action::DeepBreath, &mut rng));
        assert_eq!(state.life_force, 1.0);
        assert!(!apply_action(
            &mut state,
            Action::BuyUpgrade(UpgradeKind::AutoGrow),
            &mut rng
        ));
        assert!(apply_action(&mut state, Action::AdvanceTime { dt: 0.1 }, &mut rng));
        assert!((state.elapsed_seconds - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let state = GameState::default();
        let mut rng = rng();
        let next = reduce(&state, Action::DeepBreath, &mut rng);
        assert_eq!(state.life_force, 0.0);
        assert_eq!(next.life_force, 1.0);
        assert_eq!(next.focus, 90.0);
    }
}
