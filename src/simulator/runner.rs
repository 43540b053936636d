//! Drives the real progression store with a scripted player.
//!
//! The runner only talks to the store through [`apply_action`] and
//! [`advance_time`], the same entry points the terminal front end uses, so
//! the pacing it reports matches real play.

use super::config::SimConfig;
use super::report::{KillRecord, SimReport, StoryRecord};
use crate::core::actions::{apply_action, Action};
use crate::core::constants::{TICKS_PER_SECOND, TICK_DELTA_SECONDS};
use crate::core::game_state::GameState;
use crate::core::skills::SkillId;
use crate::core::tick::{advance_time, TickEvent, TickResult};
use crate::core::upgrades::{SoulUpgradeKind, UpgradeKind};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Counts of the actions the scripted player managed to apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ActionCounts {
    pub deep_breaths: u64,
    pub meditations: u64,
    pub upgrades_bought: u64,
    pub soul_upgrades_bought: u64,
    pub skills_cast: u64,
    pub summons: u64,
}

impl ActionCounts {
    fn record(&mut self, action: Action) {
        match action {
            Action::DeepBreath => self.deep_breaths += 1,
            Action::Meditate => self.meditations += 1,
            Action::BuyUpgrade(_) => self.upgrades_bought += 1,
            Action::BuySoulUpgrade(_) => self.soul_upgrades_bought += 1,
            Action::ActivateSkill(_) => self.skills_cast += 1,
            Action::SpawnEnemy => self.summons += 1,
            Action::AdvanceTime { .. } => {}
        }
    }
}

/// Tracks statistics during a run. Accumulates data from tick events.
#[derive(Debug, Default)]
struct SimStats {
    actions: ActionCounts,
    story: Vec<StoryRecord>,
    kills: Vec<KillRecord>,
    battle_unlocked_at: Option<f64>,
}

impl SimStats {
    fn record_tick(&mut self, state: &GameState, result: &TickResult) {
        for event in &result.events {
            match event {
                TickEvent::StoryUnlocked { index, message } => self.story.push(StoryRecord {
                    index: *index,
                    message: message.clone(),
                    seconds: state.elapsed_seconds,
                }),
                TickEvent::EnemyDefeated {
                    name,
                    level,
                    soul_fragments,
                    ..
                } => self.kills.push(KillRecord {
                    name: name.clone(),
                    level: *level,
                    soul_fragments: *soul_fragments,
                    seconds: state.elapsed_seconds,
                }),
                TickEvent::BattleUnlocked { .. } => {
                    self.battle_unlocked_at = Some(state.elapsed_seconds);
                }
                TickEvent::SkillExpired { .. } => {}
            }
        }
    }
}

/// Picks the actions a greedy player would press before the next tick.
///
/// At most one action of each kind per tick, roughly the pace of a player
/// clicking along with the 100ms timer.
pub fn choose_actions(state: &GameState) -> Vec<Action> {
    let mut actions = Vec::new();

    if state.can_deep_breath() {
        actions.push(Action::DeepBreath);
    } else if state.can_meditate() {
        actions.push(Action::Meditate);
    }

    // Cheapest upgrade first; ties go to the earlier kind
    let cheapest = UpgradeKind::all()
        .into_iter()
        .min_by(|a, b| state.upgrade_cost(*a).total_cmp(&state.upgrade_cost(*b)));
    if let Some(kind) = cheapest {
        actions.push(Action::BuyUpgrade(kind));
    }

    if state.in_battle() {
        actions.push(Action::ActivateSkill(SkillId::PurifyingRadiance));
    } else if state.battle_unlocked {
        actions.push(Action::SpawnEnemy);
    }

    let soul_kind = if state.soul_upgrade_cost(SoulUpgradeKind::Growth)
        < state.soul_upgrade_cost(SoulUpgradeKind::Attack)
    {
        SoulUpgradeKind::Growth
    } else {
        SoulUpgradeKind::Attack
    };
    actions.push(Action::BuySoulUpgrade(soul_kind));

    actions
}

/// Run one simulated session and return its report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut state = GameState::new(config.edition.balance());
    let mut stats = SimStats::default();

    for tick in 0..config.total_ticks() {
        for action in choose_actions(&state) {
            if apply_action(&mut state, action, &mut rng) {
                stats.actions.record(action);
            }
        }

        let result = advance_time(&mut state, TICK_DELTA_SECONDS);
        stats.record_tick(&state, &result);

        if config.verbosity >= 2 {
            for event in &result.events {
                if let Some(line) = describe_event(event) {
                    println!("[{:>7.1}s] {}", state.elapsed_seconds, line);
                }
            }
        }
        if config.verbosity >= 1 && tick > 0 && tick % (600 * TICKS_PER_SECOND as u64) == 0 {
            println!(
                "  {:>5} min: life force {:.0} (total {:.0}), souls {}",
                tick / (60 * TICKS_PER_SECOND as u64),
                state.life_force,
                state.total_life_force,
                state.soul_fragments
            );
        }
    }

    SimReport::from_run(
        config,
        &state,
        stats.actions,
        stats.story,
        stats.kills,
        stats.battle_unlocked_at,
    )
}

fn describe_event(event: &TickEvent) -> Option<String> {
    match event {
        TickEvent::SkillExpired { skill } => Some(format!("{} fades", skill.name())),
        TickEvent::EnemyDefeated { message, .. }
        | TickEvent::BattleUnlocked { message }
        | TickEvent::StoryUnlocked { message, .. } => Some(message.clone()),
    }
}
