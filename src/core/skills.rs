use super::constants::{
    PURIFYING_RADIANCE_DAMAGE_FACTOR, PURIFYING_RADIANCE_DURATION, PURIFYING_RADIANCE_MANA_COST,
};
use serde::{Deserialize, Serialize};

pub const NUM_SKILLS: usize = 1;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SkillId {
    PurifyingRadiance,
}

impl SkillId {
    pub fn all() -> [SkillId; NUM_SKILLS] {
        [SkillId::PurifyingRadiance]
    }

    pub fn index(&self) -> usize {
        match self {
            SkillId::PurifyingRadiance => 0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SkillId::PurifyingRadiance => "Purifying Radiance",
        }
    }

    /// Attack multiplier applied while the skill is active.
    pub fn damage_factor(&self) -> f64 {
        match self {
            SkillId::PurifyingRadiance => PURIFYING_RADIANCE_DAMAGE_FACTOR,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub active: bool,
    /// Remaining active seconds. Always 0 while inactive.
    pub timer: f64,
    pub duration: f64,
    pub mana_cost: f64,
}

impl Skill {
    pub fn new(duration: f64, mana_cost: f64) -> Self {
        Self {
            active: false,
            timer: 0.0,
            duration,
            mana_cost,
        }
    }

    pub fn activate(&mut self) {
        self.active = true;
        self.timer = self.duration;
    }

    /// Runs the timer down by `dt`. Returns true if the skill expired.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !self.active {
            return false;
        }
        self.timer -= dt;
        if self.timer <= 0.0 {
            self.active = false;
            self.timer = 0.0;
            return true;
        }
        false
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Skills {
    entries: [Skill; NUM_SKILLS],
}

impl Default for Skills {
    fn default() -> Self {
        Self::new()
    }
}

impl Skills {
    pub fn new() -> Self {
        Self {
            entries: [Skill::new(
                PURIFYING_RADIANCE_DURATION,
                PURIFYING_RADIANCE_MANA_COST,
            )],
        }
    }

    pub fn get(&self, id: SkillId) -> &Skill {
        &self.entries[id.index()]
    }

    pub fn get_mut(&mut self, id: SkillId) -> &mut Skill {
        &mut self.entries[id.index()]
    }

    /// Product of damage factors of every active skill.
    pub fn damage_factor(&self) -> f64 {
        SkillId::all()
            .iter()
            .filter(|id| self.get(**id).active)
            .map(|id| id.damage_factor())
            .product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_skill_inactive() {
        let skills = Skills::new();
        let radiance = skills.get(SkillId::PurifyingRadiance);
        assert!(!radiance.active);
        assert_eq!(radiance.timer, 0.0);
        assert_eq!(skills.damage_factor(), 1.0);
    }

    #[test]
    fn test_activate_resets_timer() {
        let mut skill = Skill::new(10.0, 50.0);
        skill.activate();
        assert!(skill.active);
        assert_eq!(skill.timer, 10.0);
    }

    #[test]
    fn test_tick_expires_and_clamps() {
        let mut skill = Skill::new(0.25, 50.0);
        skill.activate();
        assert!(!skill.tick(0.1));
        assert!(!skill.tick(0.1));
        assert!(skill.tick(0.1));
        assert!(!skill.active);
        assert_eq!(skill.timer, 0.0);
    }

    #[test]
    fn test_tick_inactive_is_noop() {
        let mut skill = Skill::new(10.0, 50.0);
        assert!(!skill.tick(5.0));
        assert_eq!(skill.timer, 0.0);
    }

    #[test]
    fn test_damage_factor_when_active() {
        let mut skills = Skills::new();
        skills.get_mut(SkillId::PurifyingRadiance).activate();
        assert_eq!(skills.damage_factor(), 5.0);
    }
}
