//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable obstacle iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, first_hit};
pub use spawn::{SpawnScheduler, roll_obstacle};
pub use state::{
    BirdLevel, CACTUS_SMALL_VARIANTS, CACTUS_VARIANTS, Character, CharacterState, GamePhase,
    GameState, Ground, Obstacle, ObstacleKind, ScoreTracker,
};
pub use tick::{TickInput, tick};
