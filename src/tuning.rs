//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`] so the simulation can be
//! constructed with reference values, test values, or a JSON override file.
//! The simulation never hard-codes a balance number.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Asset scale factors, applied once when sprites/collision boxes are built.
pub const CHARACTER_SCALE: f32 = 0.65;
pub const CACTUS_SCALE: f32 = 0.65;
pub const BIRD_SCALE: f32 = 0.70;

/// Nominal (unscaled) sprite dimensions the collision boxes derive from.
const CHARACTER_RUN_DIMS: Vec2 = Vec2::new(88.0, 94.0);
const CHARACTER_DUCK_DIMS: Vec2 = Vec2::new(118.0, 56.0);
const CACTUS_SMALL_DIMS: Vec2 = Vec2::new(34.0, 70.0);
const CACTUS_LARGE_DIMS: Vec2 = Vec2::new(50.0, 100.0);
const BIRD_DIMS: Vec2 = Vec2::new(80.0, 60.0);

/// Immutable balance configuration handed to the session at construction.
///
/// All fields have reference defaults; a JSON override file may set any
/// subset of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Launch velocity of a jump (negative = upward, world units/s)
    pub jump_velocity: f32,
    /// Gravity, world units/s². Tuned as jump_velocity² / 200 so the arc
    /// peaks at 100 units and completes in under a second; stored as
    /// configuration, not re-derived at runtime.
    pub gravity: f32,

    /// Scroll base speeds (world units/s at game speed 1.0)
    pub ground_speed: f32,
    pub cactus_speed: f32,
    pub bird_speed: f32,

    /// Difficulty ramp: speed gained per second while active
    pub ramp_rate: f32,
    /// Game speed bounds; reset restores `min_speed`
    pub min_speed: f32,
    pub max_speed: f32,

    /// Score accrual at game speed 1.0
    pub points_per_second: f32,

    /// Spawn pacing: target interval = max(base/speed, min) * jitter
    pub spawn_base_interval: f32,
    pub spawn_min_interval: f32,
    /// Uniform jitter multiplier bounds, redrawn each time a spawn fires
    pub spawn_jitter: (f32, f32),

    /// Obstacle type weights (ground : flying)
    pub ground_obstacle_weight: u32,
    pub flying_obstacle_weight: u32,
    /// Flying obstacle altitude weights (low : high)
    pub bird_low_weight: u32,
    pub bird_high_weight: u32,
    /// Altitude of each bird level, as offset above GROUND_HEIGHT
    pub bird_low_offset: f32,
    pub bird_high_offset: f32,

    /// Animation cadences, seconds per frame
    pub run_frame_secs: f32,
    pub bird_frame_secs: f32,

    /// Collision boxes (scale factors already applied)
    pub character_run_box: Vec2,
    pub character_duck_box: Vec2,
    pub cactus_small_box: Vec2,
    pub cactus_large_box: Vec2,
    pub bird_box: Vec2,
}

impl Default for Tuning {
    fn default() -> Self {
        let jump_velocity = -450.0;
        Self {
            jump_velocity,
            gravity: jump_velocity * jump_velocity / 200.0,

            ground_speed: 300.0,
            cactus_speed: 300.0,
            bird_speed: 350.0,

            ramp_rate: 0.04,
            min_speed: 1.0,
            max_speed: 3.0,

            points_per_second: 10.0,

            spawn_base_interval: 2.0,
            spawn_min_interval: 1.0,
            spawn_jitter: (0.7, 1.3),

            ground_obstacle_weight: 2,
            flying_obstacle_weight: 1,
            bird_low_weight: 30,
            bird_high_weight: 70,
            bird_low_offset: 70.0,
            bird_high_offset: 92.0,

            run_frame_secs: 0.1,
            bird_frame_secs: 0.15,

            character_run_box: CHARACTER_RUN_DIMS * CHARACTER_SCALE,
            character_duck_box: CHARACTER_DUCK_DIMS * CHARACTER_SCALE,
            cactus_small_box: CACTUS_SMALL_DIMS * CACTUS_SCALE,
            cactus_large_box: CACTUS_LARGE_DIMS * CACTUS_SCALE,
            bird_box: BIRD_DIMS * BIRD_SCALE,
        }
    }
}

impl Tuning {
    /// Load tuning overrides from a JSON file; unset fields keep defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read tuning file {}", path.display()))?;
        let tuning: Tuning = serde_json::from_str(&text)
            .with_context(|| format!("invalid tuning file {}", path.display()))?;
        Ok(tuning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_matches_documented_derivation() {
        let t = Tuning::default();
        let expected = t.jump_velocity * t.jump_velocity / 200.0;
        assert!((t.gravity - expected).abs() < 1e-3);
        assert!((t.gravity - 1012.5).abs() < 1e-3);
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let t: Tuning = serde_json::from_str(r#"{"ramp_rate": 0.1}"#).unwrap();
        assert_eq!(t.ramp_rate, 0.1);
        assert_eq!(t.max_speed, 3.0);
        assert_eq!(t.spawn_jitter, (0.7, 1.3));
    }

    #[test]
    fn scale_factors_applied_to_boxes() {
        let t = Tuning::default();
        assert!((t.character_run_box.x - 88.0 * 0.65).abs() < 1e-4);
        assert!((t.bird_box.y - 60.0 * 0.70).abs() < 1e-4);
    }
}
