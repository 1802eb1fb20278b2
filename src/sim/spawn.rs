//! Obstacle spawn scheduling
//!
//! Spawn pacing accumulates a timer against a jittered target interval. The
//! target is recomputed (with the then-current speed and a fresh jitter draw)
//! each time a spawn fires, so placement never turns periodic.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{BirdLevel, CACTUS_VARIANTS, Obstacle};
use crate::consts::SCREEN_W;
use crate::tuning::Tuning;

/// Decides when the next obstacle enters the field.
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    timer: f32,
    target: f32,
}

impl SpawnScheduler {
    pub fn new(speed: f32, rng: &mut Pcg32, tuning: &Tuning) -> Self {
        Self {
            timer: 0.0,
            target: next_interval(speed, rng, tuning),
        }
    }

    /// Accumulate `dt`; when the target interval elapses, emit one obstacle
    /// at the right edge and rearm. Callers only tick this while the game is
    /// active, so nothing spawns into a frozen world.
    pub fn tick(
        &mut self,
        dt: f32,
        speed: f32,
        rng: &mut Pcg32,
        tuning: &Tuning,
    ) -> Option<Obstacle> {
        self.timer += dt;
        if self.timer < self.target {
            return None;
        }
        self.timer = 0.0;
        self.target = next_interval(speed, rng, tuning);
        Some(roll_obstacle(rng, tuning))
    }

    /// Zero the timer and redraw the target, as part of a session reset.
    pub fn reset(&mut self, speed: f32, rng: &mut Pcg32, tuning: &Tuning) {
        self.timer = 0.0;
        self.target = next_interval(speed, rng, tuning);
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}

/// Target interval: base shortened by game speed, floored at the minimum,
/// then jittered by a uniform multiplier.
fn next_interval(speed: f32, rng: &mut Pcg32, tuning: &Tuning) -> f32 {
    let (lo, hi) = tuning.spawn_jitter;
    let adjusted = (tuning.spawn_base_interval / speed).max(tuning.spawn_min_interval);
    adjusted * rng.random_range(lo..hi)
}

/// Weighted obstacle selection: ground vs flying by the type weights, then a
/// uniform cactus variant or a weighted bird altitude.
pub fn roll_obstacle(rng: &mut Pcg32, tuning: &Tuning) -> Obstacle {
    let type_total = tuning.ground_obstacle_weight + tuning.flying_obstacle_weight;
    if rng.random_range(0..type_total) < tuning.ground_obstacle_weight {
        let variant = rng.random_range(0..CACTUS_VARIANTS);
        Obstacle::cactus(variant, SCREEN_W, tuning)
    } else {
        let level_total = tuning.bird_low_weight + tuning.bird_high_weight;
        let level = if rng.random_range(0..level_total) < tuning.bird_low_weight {
            BirdLevel::Low
        } else {
            BirdLevel::High
        };
        Obstacle::bird(level, SCREEN_W, tuning)
    }
}
