//! End-to-end tests for the progression store.
//!
//! Drives the store only through the public API: `apply_action` for player
//! input and `advance_time` for the periodic tick.
//!
//! Uses seeded ChaCha8Rng for deterministic enemy names.

use deeproot::core::constants::{OPENING_LOG_LINE, STARTER_ENEMY_NAME};
use deeproot::core::skills::SkillId;
use deeproot::core::story::STORY;
use deeproot::core::upgrades::{SoulUpgradeKind, UpgradeKind};
use deeproot::{
    advance_time, apply_action, reduce, Action, Edition, GameState, TickEvent,
    TICK_DELTA_SECONDS,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

fn count_in_log(state: &GameState, message: &str) -> usize {
    state.log.iter().filter(|line| line.as_str() == message).count()
}

#[test]
fn test_opening_breaths_reach_first_beat() {
    let mut rng = test_rng();
    let mut state = GameState::default();
    assert_eq!(state.life_force, 0.0);
    assert_eq!(state.focus, 100.0);

    // Nothing is affordable yet
    let before = state.clone();
    assert!(!apply_action(
        &mut state,
        Action::BuyUpgrade(UpgradeKind::AutoGrow),
        &mut rng
    ));
    assert_eq!(state, before);

    assert!(apply_action(&mut state, Action::DeepBreath, &mut rng));
    assert_eq!(state.life_force, 1.0);
    assert_eq!(state.focus, 90.0);

    for _ in 0..9 {
        assert!(apply_action(&mut state, Action::DeepBreath, &mut rng));
    }
    assert_eq!(state.life_force, 10.0);
    assert_eq!(state.total_life_force, 10.0);
    assert_eq!(state.focus, 0.0);

    // Out of focus: an eleventh breath changes nothing
    let before = state.clone();
    assert!(!apply_action(&mut state, Action::DeepBreath, &mut rng));
    assert_eq!(state, before);

    // The story catches up on the next tick
    let result = advance_time(&mut state, TICK_DELTA_SECONDS);
    assert_eq!(state.latest_log(), Some(STORY[0].message));
    assert_eq!(result.story_messages().count(), 1);
    assert_eq!(state.story_index, 1);

    // Enough for the first Root Expansion now
    assert!(apply_action(
        &mut state,
        Action::BuyUpgrade(UpgradeKind::AutoGrow),
        &mut rng
    ));
    assert_eq!(state.life_force, 0.0);
    assert_eq!(state.total_life_force, 10.0);
    assert_eq!(state.upgrade_level(UpgradeKind::AutoGrow), 1);
    assert_eq!(state.upgrade_cost(UpgradeKind::AutoGrow), 15.0);
}

#[test]
fn test_story_beats_fire_once_in_order() {
    let mut state = GameState::default();
    state.upgrades.set(UpgradeKind::AutoGrow, 50);

    let mut ticks = 0;
    while state.total_life_force < 1000.0 {
        advance_time(&mut state, TICK_DELTA_SECONDS);
        ticks += 1;
        assert!(ticks < 10_000, "life force never reached 1000");
    }
    // A few more ticks must not repeat anything
    for _ in 0..20 {
        advance_time(&mut state, TICK_DELTA_SECONDS);
    }

    let reached: Vec<&str> = STORY
        .iter()
        .filter(|beat| beat.threshold <= 1000.0)
        .map(|beat| beat.message)
        .collect();
    assert_eq!(reached.len(), 3);
    for message in &reached {
        assert_eq!(count_in_log(&state, message), 1, "{}", message);
    }
    assert_eq!(state.latest_log(), reached.last().copied());
    assert_eq!(state.log.back().map(String::as_str), Some(OPENING_LOG_LINE));
    assert_eq!(state.story_index, 3);
}

#[test]
fn test_several_beats_in_one_tick_keep_ascending_order() {
    let mut state = GameState::default();
    state.life_force = 1500.0;
    state.total_life_force = 1500.0;

    let result = advance_time(&mut state, TICK_DELTA_SECONDS);
    let indices: Vec<usize> = result
        .events
        .iter()
        .filter_map(|e| match e {
            TickEvent::StoryUnlocked { index, .. } => Some(*index),
            _ => None,
        })
        .collect();
    assert_eq!(indices, vec![0, 1, 2]);
    // Newest first: the highest threshold sits on top
    assert_eq!(state.log[0], STORY[2].message);
    assert_eq!(state.log[1], STORY[1].message);
    assert_eq!(state.log[2], STORY[0].message);
}

#[test]
fn test_starter_battle_to_victory() {
    let mut state = GameState::default();
    state.life_force = 2500.0;
    state.total_life_force = 2500.0;

    let result = advance_time(&mut state, TICK_DELTA_SECONDS);
    assert!(result
        .events
        .iter()
        .any(|e| matches!(e, TickEvent::BattleUnlocked { .. })));
    assert!(state.battle_unlocked);
    let enemy = state.enemy.as_ref().expect("starter enemy spawned");
    assert_eq!(enemy.name, STARTER_ENEMY_NAME);
    assert_eq!(enemy.level, 1);
    assert_eq!(enemy.hp, 1000.0);
    assert_eq!(enemy.max_hp, 1000.0);

    let mut last_hp = 1000.0;
    let mut ticks = 0;
    while let Some(enemy) = state.enemy.clone() {
        assert!(enemy.hp <= last_hp);
        last_hp = enemy.hp;
        let result = advance_time(&mut state, TICK_DELTA_SECONDS);
        assert_eq!(state.total_life_force, 2500.0);
        if let Some(after) = &state.enemy {
            assert!(after.hp < last_hp, "hp must strictly decrease");
        } else {
            assert!(result.enemy_defeated());
        }
        ticks += 1;
        assert!(ticks < 1000, "enemy never died");
    }

    // 250 damage per second against 1000 hp
    assert_eq!(ticks, 40);
    assert_eq!(state.soul_fragments, 5);
    assert_eq!(state.enemies_defeated, 1);
    assert!(state.enemy.is_none());

    // The starter never comes back on its own
    for _ in 0..50 {
        advance_time(&mut state, TICK_DELTA_SECONDS);
    }
    assert!(state.enemy.is_none());
}

#[test]
fn test_summon_after_victory_levels_up() {
    let mut rng = test_rng();
    let mut state = GameState::default();
    state.total_life_force = 2500.0;
    advance_time(&mut state, TICK_DELTA_SECONDS);
    assert!(state.in_battle());

    // Only one enemy at a time
    assert!(!apply_action(&mut state, Action::SpawnEnemy, &mut rng));

    state.enemy = None;
    assert!(apply_action(&mut state, Action::SpawnEnemy, &mut rng));
    let enemy = state.enemy.as_ref().expect("summoned");
    assert_eq!(enemy.level, 2);
    assert_eq!(enemy.max_hp, 2000.0);
    assert_eq!(state.last_enemy_level, 2);
}

#[test]
fn test_radiance_speeds_up_the_fight() {
    let mut rng = test_rng();
    let mut state = GameState::default();
    state.total_life_force = 2500.0;
    state.mana = 60.0;
    state.total_mana = 60.0;
    advance_time(&mut state, TICK_DELTA_SECONDS);

    assert!(apply_action(
        &mut state,
        Action::ActivateSkill(SkillId::PurifyingRadiance),
        &mut rng
    ));
    assert_eq!(state.mana, 10.0);
    assert!(state.is_skill_active(SkillId::PurifyingRadiance));

    // 1250 damage per second with the skill up
    let result = advance_time(&mut state, TICK_DELTA_SECONDS);
    assert_eq!(result.damage_dealt, 125.0);

    // Can't recast while active
    assert!(!apply_action(
        &mut state,
        Action::ActivateSkill(SkillId::PurifyingRadiance),
        &mut rng
    ));
}

#[test]
fn test_soul_upgrades_spend_fragments() {
    let mut rng = test_rng();
    let mut state = GameState::default();
    state.soul_fragments = 30;

    assert!(apply_action(
        &mut state,
        Action::BuySoulUpgrade(SoulUpgradeKind::Attack),
        &mut rng
    ));
    assert_eq!(state.soul_fragments, 20);
    assert_eq!(state.soul_upgrade_cost(SoulUpgradeKind::Attack), 18);

    assert!(apply_action(
        &mut state,
        Action::BuySoulUpgrade(SoulUpgradeKind::Attack),
        &mut rng
    ));
    assert_eq!(state.soul_fragments, 2);
    assert_eq!(state.multipliers.rank(SoulUpgradeKind::Attack), 2);

    let before = state.clone();
    assert!(!apply_action(
        &mut state,
        Action::BuySoulUpgrade(SoulUpgradeKind::Growth),
        &mut rng
    ));
    assert_eq!(state, before);
}

#[test]
fn test_focus_and_totals_stay_consistent() {
    let mut rng = test_rng();
    for edition in Edition::all() {
        let mut state = GameState::new(edition.balance());
        let script = [
            Action::DeepBreath,
            Action::Meditate,
            Action::BuyUpgrade(UpgradeKind::AutoGrow),
            Action::BuyUpgrade(UpgradeKind::Meditation),
            Action::BuyUpgrade(UpgradeKind::ManaConductivity),
            Action::ActivateSkill(SkillId::PurifyingRadiance),
            Action::SpawnEnemy,
        ];
        for step in 0..3000 {
            let action = script[step % script.len()];
            apply_action(&mut state, action, &mut rng);
            advance_time(&mut state, TICK_DELTA_SECONDS);

            assert!(state.focus >= 0.0 && state.focus <= state.max_focus);
            assert!(state.total_life_force >= state.life_force);
            assert!(state.total_mana >= state.mana);
            assert!(state.life_force >= 0.0);
            assert!(state.log.len() <= 50);
        }
    }
}

#[test]
fn test_advance_time_action_matches_direct_tick() {
    let mut rng = test_rng();
    let mut state = GameState::default();
    state.upgrades.set(UpgradeKind::AutoGrow, 3);

    let reduced = reduce(
        &state,
        Action::AdvanceTime {
            dt: TICK_DELTA_SECONDS,
        },
        &mut rng,
    );
    advance_time(&mut state, TICK_DELTA_SECONDS);
    assert_eq!(reduced, state);
}
