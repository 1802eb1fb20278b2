//! Crossterm terminal frontend
//!
//! Maps the 640x480 world onto the terminal cell grid. Raw mode plus the
//! alternate screen are acquired at startup (fatal on failure) and restored
//! on drop.

use std::io::{Stdout, Write, stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{self, Color},
    terminal,
};

use super::{InputEvent, InputSource, Renderer, TextColor};
use crate::assets::Sprite;
use crate::consts::{SCREEN_H, SCREEN_W};

/// Renders the world into the terminal cell grid.
pub struct TerminalRenderer {
    out: Stdout,
    cols: u16,
    rows: u16,
}

impl TerminalRenderer {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode().context("terminal raw mode unavailable")?;
        let mut out = stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
        )
        .context("failed to acquire terminal display surface")?;
        let (cols, rows) = terminal::size().context("cannot query terminal size")?;
        Ok(Self { out, cols, rows })
    }

    fn scale(&self) -> (f32, f32) {
        (self.cols as f32 / SCREEN_W, self.rows as f32 / SCREEN_H)
    }

    /// Print one art row at cell coordinates, clipped to the screen.
    fn put_row(&mut self, col: i32, row: i32, text: &str) -> Result<()> {
        if row < 0 || row >= self.rows as i32 {
            return Ok(());
        }
        let skip = (-col).max(0) as usize;
        let start_col = col.max(0);
        let budget = (self.cols as i32 - start_col).max(0) as usize;
        let visible: String = text.chars().skip(skip).take(budget).collect();
        if visible.is_empty() {
            return Ok(());
        }
        queue!(
            self.out,
            cursor::MoveTo(start_col as u16, row as u16),
            style::Print(visible),
        )?;
        Ok(())
    }
}

impl Renderer for TerminalRenderer {
    fn clear(&mut self) -> Result<()> {
        // Track resizes once per frame
        let (cols, rows) = terminal::size().context("cannot query terminal size")?;
        self.cols = cols;
        self.rows = rows;
        queue!(self.out, terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn draw_sprite(&mut self, sprite: &Sprite, x: f32, y: f32) -> Result<()> {
        let (sx, sy) = self.scale();
        let col = (x * sx).round() as i32;
        // Anchor the art's bottom edge to the bottom of the world-unit box
        let bottom_row = ((y + sprite.size.y) * sy).round() as i32;
        let top_row = bottom_row - sprite.art.len() as i32;
        for (i, art_row) in sprite.art.iter().enumerate() {
            self.put_row(col, top_row + i as i32, art_row)?;
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: TextColor) -> Result<()> {
        let (sx, sy) = self.scale();
        let col = (x * sx).round() as i32;
        let row = (y * sy).round() as i32;
        let fg = match color {
            TextColor::Primary => Color::White,
            TextColor::Dim => Color::DarkGrey,
        };
        queue!(self.out, style::SetForegroundColor(fg))?;
        self.put_row(col, row, text)?;
        queue!(self.out, style::ResetColor)?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.out.flush().context("terminal write failed")?;
        Ok(())
    }

    fn text_cell_width(&self) -> f32 {
        SCREEN_W / self.cols.max(1) as f32
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// How long a duck hold survives without a key repeat before we synthesize
/// the release. Most terminals never deliver key-up events, so a stream of
/// repeats is the only hold signal available.
const DUCK_HOLD_WINDOW: Duration = Duration::from_millis(300);

/// Translates terminal key events into game input events.
pub struct TerminalInput {
    ducking: bool,
    last_duck_press: Instant,
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            ducking: false,
            last_duck_press: Instant::now(),
        }
    }

    fn translate(&mut self, key: KeyEvent, out: &mut Vec<InputEvent>) {
        if key.kind == KeyEventKind::Release {
            // Honored where the terminal actually reports key-up
            if key.code == KeyCode::Down && self.ducking {
                self.ducking = false;
                out.push(InputEvent::DuckReleased);
            }
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                out.push(InputEvent::QuitRequested);
            }
            KeyCode::Char('q') | KeyCode::Esc => out.push(InputEvent::QuitRequested),
            KeyCode::Char(' ') | KeyCode::Up => out.push(InputEvent::JumpPressed),
            KeyCode::Enter => out.push(InputEvent::ConfirmPressed),
            KeyCode::Down => {
                self.last_duck_press = Instant::now();
                if !self.ducking {
                    self.ducking = true;
                    out.push(InputEvent::DuckPressed);
                }
            }
            _ => {}
        }
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self, out: &mut Vec<InputEvent>) -> Result<()> {
        while event::poll(Duration::ZERO).context("input poll failed")? {
            if let Event::Key(key) = event::read().context("input read failed")? {
                self.translate(key, out);
            }
        }

        // Synthesize the release once key repeats stop arriving
        if self.ducking && self.last_duck_press.elapsed() > DUCK_HOLD_WINDOW {
            self.ducking = false;
            out.push(InputEvent::DuckReleased);
        }
        Ok(())
    }
}
