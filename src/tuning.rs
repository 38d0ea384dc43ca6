//! Data-driven game balance
//!
//! Every magic number with gameplay impact lives here so it can be loaded
//! from JSON instead of recompiled. Spawn odds are per-kind because the
//! original hard-coded chances were inconsistent with their own comments;
//! treating them as data settles that.

use serde::{Deserialize, Serialize};

use crate::sim::PowerUpKind;

/// Per-kind power-up spawn odds, expressed as "1 in N" per destroyed brick
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnOdds {
    pub speed: u32,
    pub sticky: u32,
    pub pass_through: u32,
    pub pad_size_increase: u32,
    pub confuse: u32,
    pub chaos: u32,
}

impl Default for SpawnOdds {
    fn default() -> Self {
        Self {
            speed: 5,
            sticky: 5,
            pass_through: 5,
            pad_size_increase: 5,
            confuse: 5,
            chaos: 5,
        }
    }
}

/// Gameplay balance parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub spawn_one_in: SpawnOdds,

    /// Timed effect durations in seconds
    pub sticky_duration: f32,
    pub pass_through_duration: f32,
    pub confuse_duration: f32,
    pub chaos_duration: f32,

    /// Ball velocity multiplier for the speed power-up
    pub speed_factor: f32,
    /// Pixels added to paddle width per pad-size-increase pickup
    pub pad_size_increase: f32,
    /// Downward capsule velocity (pixels/s)
    pub powerup_fall_speed: f32,
    /// Points per destroyed brick
    pub brick_score: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_one_in: SpawnOdds::default(),
            sticky_duration: 20.0,
            pass_through_duration: 10.0,
            confuse_duration: 15.0,
            chaos_duration: 15.0,
            speed_factor: 1.2,
            pad_size_increase: 50.0,
            powerup_fall_speed: 150.0,
            brick_score: 10,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON document; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Spawn odds ("1 in N") for a power-up kind
    pub fn spawn_one_in(&self, kind: PowerUpKind) -> u32 {
        match kind {
            PowerUpKind::Speed => self.spawn_one_in.speed,
            PowerUpKind::Sticky => self.spawn_one_in.sticky,
            PowerUpKind::PassThrough => self.spawn_one_in.pass_through,
            PowerUpKind::PadSizeIncrease => self.spawn_one_in.pad_size_increase,
            PowerUpKind::Confuse => self.spawn_one_in.confuse,
            PowerUpKind::Chaos => self.spawn_one_in.chaos,
        }
    }

    /// Effect duration for a kind; 0 marks an instantaneous kind
    pub fn duration(&self, kind: PowerUpKind) -> f32 {
        match kind {
            PowerUpKind::Speed | PowerUpKind::PadSizeIncrease => 0.0,
            PowerUpKind::Sticky => self.sticky_duration,
            PowerUpKind::PassThrough => self.pass_through_duration,
            PowerUpKind::Confuse => self.confuse_duration,
            PowerUpKind::Chaos => self.chaos_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let tuning = Tuning::default();
        assert_eq!(tuning.spawn_one_in(PowerUpKind::Sticky), 5);
        assert_eq!(tuning.duration(PowerUpKind::Speed), 0.0);
        assert_eq!(tuning.duration(PowerUpKind::Sticky), 20.0);
        assert_eq!(tuning.duration(PowerUpKind::PassThrough), 10.0);
    }

    #[test]
    fn test_from_json_partial_override() {
        let tuning = Tuning::from_json(
            r#"{ "speed_factor": 1.5, "spawn_one_in": { "chaos": 10 } }"#,
        )
        .expect("valid tuning json");
        assert_eq!(tuning.speed_factor, 1.5);
        assert_eq!(tuning.spawn_one_in(PowerUpKind::Chaos), 10);
        // Untouched fields keep their defaults
        assert_eq!(tuning.spawn_one_in(PowerUpKind::Speed), 5);
        assert_eq!(tuning.brick_score, 10);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Tuning::from_json("not json").is_err());
    }
}
