//! Platform boundary
//!
//! The simulation consumes these services through minimal traits:
//! - [`Renderer`]: draw sprites and text, present a frame
//! - [`InputSource`]: drain pending discrete input events
//! - [`Clock`]: frame-paced elapsed wall time
//!
//! `terminal` holds the crossterm implementations used by the binary.

pub mod terminal;

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::assets::Sprite;

/// Discrete input events; no continuous/analog input exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    JumpPressed,
    DuckPressed,
    DuckReleased,
    ConfirmPressed,
    QuitRequested,
}

/// Non-blocking input polling; drains every pending event into `out`.
pub trait InputSource {
    fn poll(&mut self, out: &mut Vec<InputEvent>) -> Result<()>;
}

/// Supplies elapsed wall time per frame.
pub trait Clock {
    /// Seconds since the previous call, after any frame-rate pacing sleep.
    fn elapsed_since_last_tick(&mut self) -> f32;
}

/// Text emphasis for HUD rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Primary,
    Dim,
}

/// Drawing surface. Coordinates are world units; implementations own the
/// mapping to their device.
pub trait Renderer {
    fn clear(&mut self) -> Result<()>;
    /// Draw with the sprite's bottom edge anchored at `y + sprite.size.y`.
    fn draw_sprite(&mut self, sprite: &Sprite, x: f32, y: f32) -> Result<()>;
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: TextColor) -> Result<()>;
    fn present(&mut self) -> Result<()>;
    /// World-unit width of one text glyph, for centering.
    fn text_cell_width(&self) -> f32;
}

/// Caps the loop at a target frame rate and reports real elapsed time.
///
/// This is deliberately not a fixed-timestep accumulator: simulation timers
/// are rate-independent against the actual dt, and precision under frame-rate
/// variance is an accepted tradeoff.
pub struct FrameClock {
    target: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            target: Duration::from_secs(1) / target_fps.max(1),
            last: Instant::now(),
        }
    }
}

impl Clock for FrameClock {
    fn elapsed_since_last_tick(&mut self) -> f32 {
        let deadline = self.last + self.target;
        let now = Instant::now();
        if now < deadline {
            std::thread::sleep(deadline - now);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}
