//! Simulation configuration.

use crate::core::balance::Edition;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Simulated seconds to play
    pub seconds: u64,

    /// Balance edition to play
    pub edition: Edition,

    /// Random seed for enemy names (None = random)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = every event)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seconds: 60 * 60,
            edition: Edition::default(),
            seed: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Ten minutes: enough to see the opening beats
    pub fn quick() -> Self {
        Self {
            seconds: 10 * 60,
            ..Default::default()
        }
    }

    /// Four hours: reaches the soul-upgrade loop on every edition
    pub fn long_haul() -> Self {
        Self {
            seconds: 4 * 60 * 60,
            ..Default::default()
        }
    }

    pub fn total_ticks(&self) -> u64 {
        self.seconds * crate::core::constants::TICKS_PER_SECOND as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.seconds, 3600);
        assert_eq!(config.edition, Edition::Abyssal);
        assert_eq!(config.total_ticks(), 36_000);
    }

    #[test]
    fn test_presets() {
        assert_eq!(SimConfig::quick().seconds, 600);
        assert_eq!(SimConfig::long_haul().total_ticks(), 144_000);
    }
}
