// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
// Simulated seconds passed to advance_time per tick (fixed, not measured)
pub const TICK_DELTA_SECONDS: f64 = TICK_INTERVAL_MS as f64 / 1000.0;
pub const TICKS_PER_SECOND: u32 = 10;
pub const INPUT_POLL_MS: u64 = 50;

// Focus
pub const MAX_FOCUS: f64 = 100.0;
pub const STARTING_FOCUS: f64 = 100.0;
pub const DEEP_BREATH_FOCUS_COST: f64 = 10.0;
pub const DEEP_BREATH_BASE_GAIN: f64 = 1.0;

// Starting upgrade levels
pub const STARTING_EFFICIENCY_LEVEL: u32 = 1;

// Soul upgrades: cost = floor(SOUL_COST_GROWTH^steps * SOUL_COST_BASE)
pub const SOUL_UPGRADE_STEP: f64 = 0.2;
pub const SOUL_COST_BASE: f64 = 10.0;
pub const SOUL_COST_GROWTH: f64 = 1.8;

// Skills
pub const PURIFYING_RADIANCE_DURATION: f64 = 10.0;
pub const PURIFYING_RADIANCE_MANA_COST: f64 = 50.0;
pub const PURIFYING_RADIANCE_DAMAGE_FACTOR: f64 = 5.0;

// Combat
pub const BATTLE_UNLOCK_THRESHOLD: f64 = 2500.0;
pub const ENEMY_BASE_HP: f64 = 1000.0;
pub const ATTACK_POWER_FACTOR: f64 = 5.0;
pub const SOUL_FRAGMENTS_PER_LEVEL: u64 = 5;
pub const STARTER_ENEMY_NAME: &str = "Abyssal Guardian";
pub const STARTER_ENEMY_LEVEL: u32 = 1;

// Narrative log
pub const LOG_CAPACITY: usize = 50;
pub const OPENING_LOG_LINE: &str = "You wake in the dark.";
