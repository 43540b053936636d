use super::constants::{SOUL_COST_BASE, SOUL_COST_GROWTH, SOUL_UPGRADE_STEP, STARTING_EFFICIENCY_LEVEL};
use serde::{Deserialize, Serialize};

pub const NUM_UPGRADES: usize = 4;

/// Upgrades bought with life force.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UpgradeKind {
    AutoGrow,
    Efficiency,
    ManaConductivity,
    Meditation,
}

impl UpgradeKind {
    pub fn all() -> [UpgradeKind; NUM_UPGRADES] {
        [
            UpgradeKind::AutoGrow,
            UpgradeKind::Efficiency,
            UpgradeKind::ManaConductivity,
            UpgradeKind::Meditation,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            UpgradeKind::AutoGrow => 0,
            UpgradeKind::Efficiency => 1,
            UpgradeKind::ManaConductivity => 2,
            UpgradeKind::Meditation => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UpgradeKind::AutoGrow => "Root Expansion",
            UpgradeKind::Efficiency => "Photosynthesis",
            UpgradeKind::ManaConductivity => "Mana Conductivity",
            UpgradeKind::Meditation => "Stillness",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UpgradeKind::AutoGrow => "+1 life force/s per level",
            UpgradeKind::Efficiency => "multiplies every life force gain",
            UpgradeKind::ManaConductivity => "draws mana from the deep",
            UpgradeKind::Meditation => "faster focus recovery",
        }
    }
}

/// Upgrade levels, indexed by [`UpgradeKind`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Upgrades {
    levels: [u32; NUM_UPGRADES],
}

impl Default for Upgrades {
    fn default() -> Self {
        Self::new()
    }
}

impl Upgrades {
    pub fn new() -> Self {
        let mut levels = [0; NUM_UPGRADES];
        levels[UpgradeKind::Efficiency.index()] = STARTING_EFFICIENCY_LEVEL;
        Self { levels }
    }

    pub fn get(&self, kind: UpgradeKind) -> u32 {
        self.levels[kind.index()]
    }

    pub fn set(&mut self, kind: UpgradeKind, level: u32) {
        self.levels[kind.index()] = level;
    }

    pub fn increment(&mut self, kind: UpgradeKind) {
        self.levels[kind.index()] = self.levels[kind.index()].saturating_add(1);
    }
}

/// Permanent multipliers bought with soul fragments.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SoulUpgradeKind {
    Attack,
    Growth,
}

impl SoulUpgradeKind {
    pub fn all() -> [SoulUpgradeKind; 2] {
        [SoulUpgradeKind::Attack, SoulUpgradeKind::Growth]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SoulUpgradeKind::Attack => "Abyssal Sharpness",
            SoulUpgradeKind::Growth => "Eternal Growth",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Multipliers {
    pub attack: f64,
    pub growth: f64,
}

impl Default for Multipliers {
    fn default() -> Self {
        Self {
            attack: 1.0,
            growth: 1.0,
        }
    }
}

impl Multipliers {
    pub fn get(&self, kind: SoulUpgradeKind) -> f64 {
        match kind {
            SoulUpgradeKind::Attack => self.attack,
            SoulUpgradeKind::Growth => self.growth,
        }
    }

    pub fn raise(&mut self, kind: SoulUpgradeKind) {
        match kind {
            SoulUpgradeKind::Attack => self.attack += SOUL_UPGRADE_STEP,
            SoulUpgradeKind::Growth => self.growth += SOUL_UPGRADE_STEP,
        }
    }

    /// Number of soul upgrades already bought for `kind`.
    ///
    /// Rounded so accumulated float error in repeated `+= 0.2` never skips a step.
    pub fn rank(&self, kind: SoulUpgradeKind) -> u32 {
        ((self.get(kind) - 1.0) / SOUL_UPGRADE_STEP).round().max(0.0) as u32
    }
}

/// Soul fragment price of the next upgrade after `rank` purchases.
pub fn soul_upgrade_cost(rank: u32) -> u64 {
    (SOUL_COST_GROWTH.powi(rank as i32) * SOUL_COST_BASE).floor() as u64
}
