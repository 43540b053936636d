//! Edition balance tables.
//!
//! Deep Root has shipped several balance curves over its life. Each one is
//! kept as a named [`Edition`] and resolved into a [`Balance`] value that the
//! game state carries. The curves are deliberately not reconciled.

use super::upgrades::UpgradeKind;
use serde::{Deserialize, Serialize};

/// Exponential cost curve: `base * growth^level`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostCurve {
    pub base: f64,
    pub growth: f64,
}

impl CostCurve {
    pub const fn new(base: f64, growth: f64) -> Self {
        Self { base, growth }
    }

    /// Unrounded cost of buying the next level when currently at `level`.
    pub fn cost_at(&self, level: u32) -> f64 {
        self.base * self.growth.powi(level as i32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Edition {
    /// First playable build: flat regen, cheap meditation.
    Seedling,
    /// Mana and meditation scaling introduced.
    Verdant,
    /// Battle-era balance with soul upgrades and skills.
    #[default]
    Abyssal,
}

impl Edition {
    pub fn all() -> [Edition; 3] {
        [Edition::Seedling, Edition::Verdant, Edition::Abyssal]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Edition::Seedling => "seedling",
            Edition::Verdant => "verdant",
            Edition::Abyssal => "abyssal",
        }
    }

    /// Parses a CLI edition name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Edition> {
        Edition::all()
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(name))
    }

    pub fn balance(&self) -> Balance {
        match self {
            Edition::Seedling => Balance {
                edition: *self,
                focus_regen_base: 2.0,
                focus_regen_per_meditation: 0.0,
                meditate_cost: 5.0,
                meditate_focus_base: 20.0,
                meditate_focus_per_level: 0.0,
                mana_rate: 0.1,
                auto_grow: CostCurve::new(10.0, 1.5),
                efficiency: CostCurve::new(50.0, 2.0),
                mana_conductivity: CostCurve::new(200.0, 1.8),
                meditation: CostCurve::new(100.0, 2.2),
            },
            Edition::Verdant => Balance {
                edition: *self,
                focus_regen_base: 2.0,
                focus_regen_per_meditation: 1.0,
                meditate_cost: 5.0,
                meditate_focus_base: 20.0,
                meditate_focus_per_level: 5.0,
                mana_rate: 0.05,
                auto_grow: CostCurve::new(10.0, 1.5),
                efficiency: CostCurve::new(50.0, 2.0),
                mana_conductivity: CostCurve::new(200.0, 2.5),
                meditation: CostCurve::new(100.0, 2.2),
            },
            Edition::Abyssal => Balance {
                edition: *self,
                focus_regen_base: 2.0,
                focus_regen_per_meditation: 0.5,
                meditate_cost: 20.0,
                meditate_focus_base: 30.0,
                meditate_focus_per_level: 10.0,
                mana_rate: 0.5,
                auto_grow: CostCurve::new(10.0, 1.5),
                efficiency: CostCurve::new(50.0, 2.0),
                mana_conductivity: CostCurve::new(200.0, 3.0),
                meditation: CostCurve::new(100.0, 2.2),
            },
        }
    }
}

/// Balance constants that differ between editions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub edition: Edition,
    /// Focus regenerated per second before meditation bonuses.
    pub focus_regen_base: f64,
    /// Extra focus per second for each meditation level.
    pub focus_regen_per_meditation: f64,
    /// Life force spent by one meditate action.
    pub meditate_cost: f64,
    pub meditate_focus_base: f64,
    pub meditate_focus_per_level: f64,
    /// Mana per second per mana conductivity level.
    pub mana_rate: f64,
    pub auto_grow: CostCurve,
    pub efficiency: CostCurve,
    pub mana_conductivity: CostCurve,
    pub meditation: CostCurve,
}

impl Default for Balance {
    fn default() -> Self {
        Edition::default().balance()
    }
}

impl Balance {
    pub fn curve(&self, kind: UpgradeKind) -> CostCurve {
        match kind {
            UpgradeKind::AutoGrow => self.auto_grow,
            UpgradeKind::Efficiency => self.efficiency,
            UpgradeKind::ManaConductivity => self.mana_conductivity,
            UpgradeKind::Meditation => self.meditation,
        }
    }

    /// Focus regenerated per second at the given meditation level.
    pub fn focus_regen(&self, meditation_level: u32) -> f64 {
        self.focus_regen_base + self.focus_regen_per_meditation * meditation_level as f64
    }

    /// Focus restored by one meditate action at the given meditation level.
    pub fn meditate_restore(&self, meditation_level: u32) -> f64 {
        self.meditate_focus_base + self.meditate_focus_per_level * meditation_level as f64
    }
}
