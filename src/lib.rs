//! Dino Dash - a terminal endless-runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `assets`: Sprite identifiers and the ASCII asset pack
//! - `platform`: Renderer/input/clock boundary traits and the terminal frontend
//! - `render`: Scene composition through the renderer interface
//! - `highscores`: In-memory session leaderboard

pub mod assets;
pub mod highscores;
pub mod platform;
pub mod render;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Target frame rate; the frame clock sleeps to this cadence
    pub const TARGET_FPS: u32 = 24;
    /// Per-frame dt cap so a stall can't teleport the world
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Visible field, in world units
    pub const SCREEN_W: f32 = 640.0;
    pub const SCREEN_H: f32 = 480.0;

    /// Top of the ground strip
    pub const GROUND_HEIGHT: f32 = 425.0;
    /// Baseline the character and ground obstacles stand on
    pub const BASELINE_Y: f32 = GROUND_HEIGHT + 10.0;

    /// Fixed horizontal position of the character
    pub const CHARACTER_X: f32 = 60.0;
}
