use super::balance::Balance;
use super::constants::*;
use super::skills::{SkillId, Skills};
use super::upgrades::{soul_upgrade_cost, Multipliers, SoulUpgradeKind, UpgradeKind, Upgrades};
use crate::combat::logic::attack_power;
use crate::combat::types::Enemy;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// The whole progression store.
///
/// Owned by the front end and passed by reference to the action functions in
/// [`super::actions`] and to [`super::tick::advance_time`]. Nothing else
/// mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub life_force: f64,
    /// Lifetime life force. Never decreases.
    pub total_life_force: f64,
    pub mana: f64,
    pub total_mana: f64,
    pub focus: f64,
    pub max_focus: f64,
    pub soul_fragments: u64,
    /// Global growth multiplier. Stays at 1.0; no prestige layer feeds it.
    pub essence_multiplier: f64,
    pub upgrades: Upgrades,
    pub multipliers: Multipliers,
    pub skills: Skills,
    pub enemy: Option<Enemy>,
    /// Level of the most recently spawned enemy (0 before the first).
    pub last_enemy_level: u32,
    /// Latched the first time lifetime life force reaches the battle threshold.
    pub battle_unlocked: bool,
    pub enemies_defeated: u64,
    /// Narrative log, newest first.
    pub log: VecDeque<String>,
    /// Cursor into [`super::story::STORY`].
    pub story_index: usize,
    /// Simulated seconds advanced so far.
    pub elapsed_seconds: f64,
    pub balance: Balance,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Balance::default())
    }
}

impl GameState {
    /// Creates a fresh game using the given edition balance.
    pub fn new(balance: Balance) -> Self {
        let mut log = VecDeque::with_capacity(LOG_CAPACITY);
        log.push_front(OPENING_LOG_LINE.to_string());

        Self {
            life_force: 0.0,
            total_life_force: 0.0,
            mana: 0.0,
            total_mana: 0.0,
            focus: STARTING_FOCUS,
            max_focus: MAX_FOCUS,
            soul_fragments: 0,
            essence_multiplier: 1.0,
            upgrades: Upgrades::new(),
            multipliers: Multipliers::default(),
            skills: Skills::new(),
            enemy: None,
            last_enemy_level: 0,
            battle_unlocked: false,
            enemies_defeated: 0,
            log,
            story_index: 0,
            elapsed_seconds: 0.0,
            balance,
        }
    }

    /// Prepends a log line, dropping the oldest past [`LOG_CAPACITY`].
    pub fn add_log_entry(&mut self, message: impl Into<String>) {
        self.log.push_front(message.into());
        self.log.truncate(LOG_CAPACITY);
    }

    /// Most recent log line.
    pub fn latest_log(&self) -> Option<&str> {
        self.log.front().map(String::as_str)
    }

    /// Credits life force and mirrors it into the lifetime total.
    pub(crate) fn gain_life_force(&mut self, amount: f64) {
        self.life_force += amount;
        self.total_life_force += amount;
    }

    pub(crate) fn gain_mana(&mut self, amount: f64) {
        self.mana += amount;
        self.total_mana += amount;
    }

    pub fn upgrade_level(&self, kind: UpgradeKind) -> u32 {
        self.upgrades.get(kind)
    }

    /// Life force price of the next level of `kind`. Not rounded.
    pub fn upgrade_cost(&self, kind: UpgradeKind) -> f64 {
        self.balance.curve(kind).cost_at(self.upgrades.get(kind))
    }

    pub fn soul_upgrade_cost(&self, kind: SoulUpgradeKind) -> u64 {
        soul_upgrade_cost(self.multipliers.rank(kind))
    }

    /// Combined efficiency, essence and growth multiplier on life force gains.
    pub fn growth_factor(&self) -> f64 {
        self.upgrades.get(UpgradeKind::Efficiency) as f64
            * self.essence_multiplier
            * self.multipliers.growth
    }

    pub fn deep_breath_gain(&self) -> f64 {
        DEEP_BREATH_BASE_GAIN * self.growth_factor()
    }

    pub fn life_force_per_second(&self) -> f64 {
        self.upgrades.get(UpgradeKind::AutoGrow) as f64 * self.growth_factor()
    }

    pub fn mana_per_second(&self) -> f64 {
        self.upgrades.get(UpgradeKind::ManaConductivity) as f64 * self.balance.mana_rate
    }

    pub fn focus_regen_per_second(&self) -> f64 {
        self.balance
            .focus_regen(self.upgrades.get(UpgradeKind::Meditation))
    }

    pub fn meditate_restore(&self) -> f64 {
        self.balance
            .meditate_restore(self.upgrades.get(UpgradeKind::Meditation))
    }

    /// Damage per second against the current enemy, including active skills.
    pub fn attack_power(&self) -> f64 {
        attack_power(
            self.total_life_force,
            self.multipliers.attack,
            self.skills.damage_factor(),
        )
    }

    pub fn is_skill_active(&self, id: SkillId) -> bool {
        self.skills.get(id).active
    }

    pub fn in_battle(&self) -> bool {
        self.enemy.is_some()
    }

    // Affordability predicates mirror each action's precondition exactly.

    pub fn can_deep_breath(&self) -> bool {
        self.focus >= DEEP_BREATH_FOCUS_COST
    }

    pub fn can_meditate(&self) -> bool {
        self.life_force >= self.balance.meditate_cost && self.focus < self.max_focus
    }

    pub fn can_buy_upgrade(&self, kind: UpgradeKind) -> bool {
        self.life_force >= self.upgrade_cost(kind)
    }

    pub fn can_buy_soul_upgrade(&self, kind: SoulUpgradeKind) -> bool {
        self.soul_fragments >= self.soul_upgrade_cost(kind)
    }

    pub fn can_activate_skill(&self, id: SkillId) -> bool {
        let skill = self.skills.get(id);
        !skill.active && self.mana >= skill.mana_cost
    }

    pub fn can_spawn_enemy(&self) -> bool {
        self.enemy.is_none()
    }
}
