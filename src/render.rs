//! Scene composition
//!
//! Turns a [`GameState`] into renderer calls: obstacles, then ground, then
//! character, then the HUD, matching the field's draw order.

use anyhow::Result;

use crate::assets::{AssetProvider, SpriteId};
use crate::consts::{SCREEN_H, SCREEN_W};
use crate::platform::{Renderer, TextColor};
use crate::sim::{GamePhase, GameState, ObstacleKind};

/// HUD anchor for the score readout
const SCORE_X: f32 = 500.0;
const SCORE_Y: f32 = 20.0;

pub fn draw_scene(
    renderer: &mut impl Renderer,
    assets: &impl AssetProvider,
    state: &GameState,
) -> Result<()> {
    renderer.clear()?;

    for obstacle in &state.obstacles {
        let id = match obstacle.kind {
            ObstacleKind::Cactus { variant } => SpriteId::Cactus { variant },
            ObstacleKind::Bird { .. } => SpriteId::Bird {
                frame: obstacle.anim_frame,
            },
        };
        renderer.draw_sprite(assets.sprite(id), obstacle.x, obstacle.y)?;
    }

    let ground = assets.sprite(SpriteId::Ground);
    renderer.draw_sprite(ground, state.ground.x1, state.ground.y)?;
    renderer.draw_sprite(ground, state.ground.x2, state.ground.y)?;

    let character = &state.character;
    let rect = character.collision_rect();
    let sprite = assets.sprite(SpriteId::Character {
        state: character.state,
        frame: character.anim_frame,
    });
    renderer.draw_sprite(sprite, rect.x, rect.y)?;

    let score_line = format!("Score: {}", state.score.points());
    renderer.draw_text(&score_line, SCORE_X, SCORE_Y, TextColor::Primary)?;
    if state.score.best_points() > 0 {
        let best_line = format!("HI: {}", state.score.best_points());
        renderer.draw_text(&best_line, SCORE_X, SCORE_Y + 40.0, TextColor::Dim)?;
    }

    if state.phase == GamePhase::Over {
        draw_centered(renderer, "GAME OVER", SCREEN_H / 2.0 - 30.0, TextColor::Primary)?;
        draw_centered(
            renderer,
            "Press SPACE or ENTER to restart",
            SCREEN_H / 2.0 + 20.0,
            TextColor::Dim,
        )?;
    }

    renderer.present()
}

fn draw_centered(renderer: &mut impl Renderer, text: &str, y: f32, color: TextColor) -> Result<()> {
    let width = text.chars().count() as f32 * renderer.text_cell_width();
    renderer.draw_text(text, (SCREEN_W - width) / 2.0, y, color)
}
