//! Game state and core simulation types
//!
//! Everything the session owns lives here: the character, the scrolling
//! ground, live obstacles, the score tracker, and the owning [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::spawn::SpawnScheduler;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Simulation running, score accruing
    Active,
    /// Collision ended the run; world frozen until restart
    Over,
}

/// Character state machine
///
/// Idle is the pre-first-input pose; it accepts the same inputs as Running
/// and collapses into Running on the first stand_up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterState {
    Idle,
    Running,
    Ducking,
    Jumping,
    Dead,
}

/// The player character
#[derive(Debug, Clone)]
pub struct Character {
    pub x: f32,
    /// Top of the standing collision box, y pointing down
    pub y: f32,
    pub vel_y: f32,
    pub state: CharacterState,
    pub anim_frame: usize,
    anim_timer: f32,
    /// y of the box top when standing on the baseline
    ground_y: f32,
    run_box: Vec2,
    duck_box: Vec2,
}

impl Character {
    pub fn new(tuning: &Tuning) -> Self {
        let ground_y = BASELINE_Y - tuning.character_run_box.y;
        Self {
            x: CHARACTER_X,
            y: ground_y,
            vel_y: 0.0,
            state: CharacterState::Idle,
            anim_frame: 0,
            anim_timer: 0.0,
            ground_y,
            run_box: tuning.character_run_box,
            duck_box: tuning.character_duck_box,
        }
    }

    pub fn ground_y(&self) -> f32 {
        self.ground_y
    }

    pub fn is_alive(&self) -> bool {
        self.state != CharacterState::Dead
    }

    /// Launch a jump. Valid only from Running or Idle; no-op otherwise
    /// (in particular, no double jumps and no jumping out of a duck).
    pub fn jump(&mut self, tuning: &Tuning) {
        if matches!(self.state, CharacterState::Running | CharacterState::Idle) {
            self.state = CharacterState::Jumping;
            self.vel_y = tuning.jump_velocity;
        }
    }

    /// Start ducking. Valid only from Running or Idle; cannot duck mid-air.
    pub fn duck(&mut self) {
        if matches!(self.state, CharacterState::Running | CharacterState::Idle) {
            self.state = CharacterState::Ducking;
        }
    }

    /// Stop ducking (or leave the idle pose).
    pub fn stand_up(&mut self) {
        if matches!(self.state, CharacterState::Ducking | CharacterState::Idle) {
            self.state = CharacterState::Running;
        }
    }

    /// Kill the character. Idempotent; Dead accepts no further updates.
    pub fn die(&mut self) {
        if self.state != CharacterState::Dead {
            self.state = CharacterState::Dead;
            self.vel_y = 0.0;
        }
    }

    /// Advance physics and animation by `dt` seconds.
    pub fn advance(&mut self, dt: f32, tuning: &Tuning) {
        if self.state == CharacterState::Dead {
            return;
        }

        if self.state == CharacterState::Jumping {
            // Explicit Euler is fine at this arc length and frame cadence
            self.vel_y += tuning.gravity * dt;
            self.y += self.vel_y * dt;

            if self.y >= self.ground_y {
                self.y = self.ground_y;
                self.vel_y = 0.0;
                self.state = CharacterState::Running;
            }
        }

        // Two-frame run/duck cycle; other states are static poses
        if matches!(self.state, CharacterState::Running | CharacterState::Ducking) {
            self.anim_timer += dt;
            if self.anim_timer >= tuning.run_frame_secs {
                self.anim_timer = 0.0;
                self.anim_frame = (self.anim_frame + 1) % 2;
            }
        }
    }

    /// Current collision rectangle. Ducking swaps in a shorter, wider box
    /// bottom-aligned to the baseline.
    pub fn collision_rect(&self) -> Rect {
        match self.state {
            CharacterState::Ducking => Rect::new(
                self.x,
                BASELINE_Y - self.duck_box.y,
                self.duck_box.x,
                self.duck_box.y,
            ),
            _ => Rect::new(self.x, self.y, self.run_box.x, self.run_box.y),
        }
    }
}

/// Number of cactus visual variants; the first `CACTUS_SMALL_VARIANTS` use
/// the small collision box, the rest the large one.
pub const CACTUS_VARIANTS: u8 = 6;
pub const CACTUS_SMALL_VARIANTS: u8 = 3;

/// Flying obstacle altitude levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirdLevel {
    /// Duckable (and jumpable at full height)
    Low,
    /// Too high to clear standing; must duck
    High,
}

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Cactus { variant: u8 },
    Bird { level: BirdLevel },
}

/// A live obstacle scrolling leftward toward the character
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Left edge of the collision box
    pub x: f32,
    /// Top edge of the collision box
    pub y: f32,
    pub size: Vec2,
    pub anim_frame: usize,
    anim_timer: f32,
}

impl Obstacle {
    /// A cactus standing on the baseline.
    pub fn cactus(variant: u8, x: f32, tuning: &Tuning) -> Self {
        debug_assert!(variant < CACTUS_VARIANTS);
        let size = if variant < CACTUS_SMALL_VARIANTS {
            tuning.cactus_small_box
        } else {
            tuning.cactus_large_box
        };
        Self {
            kind: ObstacleKind::Cactus { variant },
            x,
            y: BASELINE_Y - size.y,
            size,
            anim_frame: 0,
            anim_timer: 0.0,
        }
    }

    /// A bird at one of the two discrete altitude levels.
    pub fn bird(level: BirdLevel, x: f32, tuning: &Tuning) -> Self {
        let offset = match level {
            BirdLevel::Low => tuning.bird_low_offset,
            BirdLevel::High => tuning.bird_high_offset,
        };
        Self {
            kind: ObstacleKind::Bird { level },
            x,
            y: GROUND_HEIGHT - offset,
            size: tuning.bird_box,
            anim_frame: 0,
            anim_timer: 0.0,
        }
    }

    fn base_speed(&self, tuning: &Tuning) -> f32 {
        match self.kind {
            ObstacleKind::Cactus { .. } => tuning.cactus_speed,
            ObstacleKind::Bird { .. } => tuning.bird_speed,
        }
    }

    /// Scroll left at `base_speed * speed * dt`. Birds keep flapping even at
    /// zero speed (the frozen game-over world still animates wings).
    pub fn advance(&mut self, dt: f32, speed: f32, tuning: &Tuning) {
        self.x -= self.base_speed(tuning) * speed * dt;

        if let ObstacleKind::Bird { .. } = self.kind {
            self.anim_timer += dt;
            if self.anim_timer >= tuning.bird_frame_secs {
                self.anim_timer = 0.0;
                self.anim_frame = (self.anim_frame + 1) % 2;
            }
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.size.x, self.size.y)
    }

    /// True once the right edge has passed x = 0.
    pub fn off_screen(&self) -> bool {
        self.x + self.size.x < 0.0
    }
}

/// Two tiling ground segments producing an infinite scroll.
#[derive(Debug, Clone)]
pub struct Ground {
    pub x1: f32,
    pub x2: f32,
    pub segment_width: f32,
    pub y: f32,
}

impl Default for Ground {
    fn default() -> Self {
        Self::new()
    }
}

impl Ground {
    pub fn new() -> Self {
        Self {
            x1: 0.0,
            x2: SCREEN_W,
            segment_width: SCREEN_W,
            y: GROUND_HEIGHT,
        }
    }

    pub fn advance(&mut self, dt: f32, speed: f32, tuning: &Tuning) {
        let distance = tuning.ground_speed * speed * dt;
        self.x1 -= distance;
        self.x2 -= distance;

        // A segment fully off the left edge hops to the right of the other
        if self.x1 + self.segment_width < 0.0 {
            self.x1 = self.x2 + self.segment_width;
        }
        if self.x2 + self.segment_width < 0.0 {
            self.x2 = self.x1 + self.segment_width;
        }
        debug_assert!(self.covers_screen());
    }

    /// The two segments span the visible width with no gap.
    pub fn covers_screen(&self) -> bool {
        let (left, right) = if self.x1 <= self.x2 {
            (self.x1, self.x2)
        } else {
            (self.x2, self.x1)
        };
        left <= 0.0 && right <= left + self.segment_width && right + self.segment_width >= SCREEN_W
    }

    pub fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = self.segment_width;
    }
}

/// Current and best score for the process lifetime.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreTracker {
    pub score: f32,
    pub best: f32,
}

impl ScoreTracker {
    /// Accrue score; callers gate this on the Active phase.
    pub fn advance(&mut self, dt: f32, speed: f32, tuning: &Tuning) {
        self.score += tuning.points_per_second * speed * dt;
    }

    /// Fold the finished run into `best` and start over.
    pub fn reset(&mut self) {
        self.best = self.best.max(self.score);
        self.score = 0.0;
    }

    pub fn points(&self) -> u64 {
        self.score as u64
    }

    pub fn best_points(&self) -> u64 {
        self.best as u64
    }
}

/// Complete session state. Owns every mutable piece of the simulation;
/// reset is all-or-nothing and synchronous within one tick.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Unitless difficulty multiplier, clamped to [min_speed, max_speed]
    pub speed: f32,
    /// Seconds of Active play this run
    pub time_secs: f32,
    pub character: Character,
    pub ground: Ground,
    /// Live obstacles in insertion (spawn) order
    pub obstacles: Vec<Obstacle>,
    pub score: ScoreTracker,
    pub spawner: SpawnScheduler,
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new session with the given seed.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let spawner = SpawnScheduler::new(tuning.min_speed, &mut rng, &tuning);
        Self {
            seed,
            phase: GamePhase::Active,
            speed: tuning.min_speed,
            time_secs: 0.0,
            character: Character::new(&tuning),
            ground: Ground::new(),
            obstacles: Vec::new(),
            score: ScoreTracker::default(),
            spawner,
            rng,
            tuning,
        }
    }

    /// Full restart: fresh character, empty field, score folded into best,
    /// speed and timers back to initial values. The RNG stream continues so
    /// consecutive runs differ.
    pub fn reset(&mut self) {
        self.character = Character::new(&self.tuning);
        self.obstacles.clear();
        self.score.reset();
        self.speed = self.tuning.min_speed;
        self.time_secs = 0.0;
        self.ground.reset();
        self.spawner.reset(self.tuning.min_speed, &mut self.rng, &self.tuning);
        self.phase = GamePhase::Active;
    }
}
