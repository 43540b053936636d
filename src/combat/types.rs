use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::constants::{ENEMY_BASE_HP, STARTER_ENEMY_LEVEL, STARTER_ENEMY_NAME};

/// Names a manually summoned enemy can be given.
pub const ENEMY_NAMES: [&str; 8] = [
    "Hollow Wraith",
    "Blight Crawler",
    "Ashen Devourer",
    "Rootless Shade",
    "Gloom Leech",
    "Withering Husk",
    "Void Moth",
    "Sunken Maw",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Enemy {
    pub name: String,
    /// Goes negative on the killing blow before the enemy is cleared.
    pub hp: f64,
    pub max_hp: f64,
    pub level: u32,
}

impl Enemy {
    pub fn new(name: String, level: u32) -> Self {
        let max_hp = enemy_max_hp(level);
        Self {
            name,
            hp: max_hp,
            max_hp,
            level,
        }
    }

    /// The fixed guardian that appears when the battle unlocks.
    pub fn starter() -> Self {
        Self::new(STARTER_ENEMY_NAME.to_string(), STARTER_ENEMY_LEVEL)
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0.0
    }

    pub fn take_damage(&mut self, amount: f64) {
        self.hp -= amount;
    }

    /// Remaining hp as a fraction of max, clamped to [0, 1] for display.
    pub fn hp_fraction(&self) -> f64 {
        if self.max_hp <= 0.0 {
            return 0.0;
        }
        (self.hp / self.max_hp).clamp(0.0, 1.0)
    }
}

/// `1000 * 2^(level-1)`; level 0 is treated as level 1.
pub fn enemy_max_hp(level: u32) -> f64 {
    ENEMY_BASE_HP * 2f64.powi(level.saturating_sub(1) as i32)
}

pub fn random_enemy_name<R: Rng>(rng: &mut R) -> &'static str {
    ENEMY_NAMES.choose(rng).copied().unwrap_or(STARTER_ENEMY_NAME)
}

/// Summons an enemy at `level` with a name drawn uniformly from [`ENEMY_NAMES`].
pub fn generate_enemy<R: Rng>(level: u32, rng: &mut R) -> Enemy {
    Enemy::new(random_enemy_name(rng).to_string(), level)
}
