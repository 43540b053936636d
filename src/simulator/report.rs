//! Simulation report generation.

use super::config::SimConfig;
use super::runner::ActionCounts;
use crate::core::game_state::GameState;
use crate::core::story::STORY;
use crate::core::upgrades::{SoulUpgradeKind, UpgradeKind};
use serde::Serialize;

/// When a narrative beat fired.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryRecord {
    pub index: usize,
    pub message: String,
    pub seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KillRecord {
    pub name: String,
    pub level: u32,
    pub soul_fragments: u64,
    pub seconds: f64,
}

/// Results from a single simulated session.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub edition: String,
    pub seconds: u64,
    pub seed: Option<u64>,

    // Final resources
    pub final_life_force: f64,
    pub final_total_life_force: f64,
    pub final_mana: f64,
    pub final_soul_fragments: u64,
    pub final_focus: f64,

    // Final progression
    pub upgrade_levels: Vec<(String, u32)>,
    pub attack_multiplier: f64,
    pub growth_multiplier: f64,
    pub highest_enemy_level: u32,

    // Pacing
    pub battle_unlocked_at: Option<f64>,
    pub story: Vec<StoryRecord>,
    pub kills: Vec<KillRecord>,
    pub actions: ActionCounts,
}

impl SimReport {
    pub fn from_run(
        config: &SimConfig,
        state: &GameState,
        actions: ActionCounts,
        story: Vec<StoryRecord>,
        kills: Vec<KillRecord>,
        battle_unlocked_at: Option<f64>,
    ) -> Self {
        Self {
            edition: config.edition.name().to_string(),
            seconds: config.seconds,
            seed: config.seed,
            final_life_force: state.life_force,
            final_total_life_force: state.total_life_force,
            final_mana: state.mana,
            final_soul_fragments: state.soul_fragments,
            final_focus: state.focus,
            upgrade_levels: UpgradeKind::all()
                .iter()
                .map(|k| (k.name().to_string(), state.upgrade_level(*k)))
                .collect(),
            attack_multiplier: state.multipliers.get(SoulUpgradeKind::Attack),
            growth_multiplier: state.multipliers.get(SoulUpgradeKind::Growth),
            highest_enemy_level: state.last_enemy_level,
            battle_unlocked_at,
            story,
            kills,
            actions,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    DEEP ROOT PACING REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Edition: {}   Simulated: {}   Seed: {}\n\n",
            self.edition,
            format_duration(self.seconds as f64),
            self.seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "random".to_string())
        ));

        report.push_str("── RESOURCES ────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Life Force:          {:.0} (lifetime {:.0})\n",
            self.final_life_force, self.final_total_life_force
        ));
        report.push_str(&format!("  Mana:                {:.1}\n", self.final_mana));
        report.push_str(&format!(
            "  Soul Fragments:      {}\n",
            self.final_soul_fragments
        ));
        report.push_str(&format!("  Focus:               {:.0}\n\n", self.final_focus));

        report.push_str("── UPGRADES ─────────────────────────────────────────────────────\n");
        for (name, level) in &self.upgrade_levels {
            report.push_str(&format!("  {:<20} Lv.{}\n", name, level));
        }
        report.push_str(&format!(
            "  Attack x{:.1}   Growth x{:.1}\n\n",
            self.attack_multiplier, self.growth_multiplier
        ));

        report.push_str("── STORY ────────────────────────────────────────────────────────\n");
        for (index, beat) in STORY.iter().enumerate() {
            let reached = self
                .story
                .iter()
                .find(|r| r.index == index)
                .map(|r| format_duration(r.seconds))
                .unwrap_or_else(|| "-".to_string());
            report.push_str(&format!(
                "  {:>9.0} LF  {:>10}\n",
                beat.threshold, reached
            ));
        }
        report.push('\n');

        report.push_str("── BATTLE ───────────────────────────────────────────────────────\n");
        match self.battle_unlocked_at {
            Some(seconds) => report.push_str(&format!(
                "  Unlocked at:         {}\n",
                format_duration(seconds)
            )),
            None => report.push_str("  Unlocked at:         never\n"),
        }
        report.push_str(&format!("  Enemies Defeated:    {}\n", self.kills.len()));
        report.push_str(&format!(
            "  Highest Enemy Level: {}\n",
            self.highest_enemy_level
        ));
        if let Some(last) = self.kills.last() {
            report.push_str(&format!(
                "  Last Kill:           {} Lv.{} at {}\n",
                last.name,
                last.level,
                format_duration(last.seconds)
            ));
        }
        report.push('\n');

        report.push_str("── ACTIONS ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Deep Breaths: {}   Meditations: {}   Upgrades: {}\n",
            self.actions.deep_breaths, self.actions.meditations, self.actions.upgrades_bought
        ));
        report.push_str(&format!(
            "  Soul Upgrades: {}   Skills Cast: {}   Summons: {}\n",
            self.actions.soul_upgrades_bought, self.actions.skills_cast, self.actions.summons
        ));

        report
    }

    /// Generate a JSON report.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Formats seconds as `1h 02m 03s`, dropping leading zero units.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    if h > 0 {
        format!("{}h {:02}m {:02}s", h, m, s)
    } else if m > 0 {
        format!("{}m {:02}s", m, s)
    } else {
        format!("{}s", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_report() -> SimReport {
        SimReport::from_run(
            &SimConfig {
                seconds: 60,
                seed: Some(3),
                verbosity: 0,
                ..Default::default()
            },
            &GameState::default(),
            ActionCounts::default(),
            Vec::new(),
            Vec::new(),
            None,
        )
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(5.0), "5s");
        assert_eq!(format_duration(65.0), "1m 05s");
        assert_eq!(format_duration(3723.0), "1h 02m 03s");
    }

    #[test]
    fn test_text_report_sections() {
        let text = empty_report().to_text();
        assert!(text.contains("Edition: abyssal"));
        assert!(text.contains("Root Expansion"));
        assert!(text.contains("Unlocked at:         never"));
    }

    #[test]
    fn test_json_report() {
        let json: serde_json::Value =
            serde_json::from_str(&empty_report().to_json()).expect("valid json");
        assert_eq!(json["edition"], "abyssal");
        assert_eq!(json["seed"], 3);
        assert!(json["battle_unlocked_at"].is_null());
        assert_eq!(json["upgrade_levels"][1][1], 1);
    }
}
