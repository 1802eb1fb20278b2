//! Sprite identifiers and the built-in ASCII asset pack
//!
//! The simulation never touches sprites; it works in world-unit collision
//! boxes from [`Tuning`]. Sprites pair those boxes with terminal art so the
//! renderer can anchor each drawable to its collision footprint.

use glam::Vec2;

use crate::sim::CharacterState;
use crate::tuning::Tuning;

/// Names a drawable the renderer can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    Character { state: CharacterState, frame: usize },
    Cactus { variant: u8 },
    Bird { frame: usize },
    Ground,
}

/// A drawable image: world-unit size (scale factor already applied) plus
/// rows of terminal art. Art is anchored by its bottom edge to the bottom of
/// the world-unit box, so feet stay on the ground line whatever the art's
/// row count.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub size: Vec2,
    pub art: &'static [&'static str],
}

/// Resolves sprite identifiers to drawable images.
pub trait AssetProvider {
    fn sprite(&self, id: SpriteId) -> &Sprite;
}

const CHAR_RUN_1: &[&str] = &[
    "  ▄▄▄▄▄",
    "  █ ● ██",
    "▄▄█▄▄▄▀",
    "▀▄████",
    "  ▐▌ ▀▄",
];

const CHAR_RUN_2: &[&str] = &[
    "  ▄▄▄▄▄",
    "  █ ● ██",
    "▄▄█▄▄▄▀",
    "▀▄████",
    "  ▄▀ ▐▌",
];

const CHAR_JUMP: &[&str] = &[
    "  ▄▄▄▄▄",
    "  █ ● ██",
    "▄▄█▄▄▄▀",
    "▀▄████",
    "  ▐▌ ▐▌",
];

const CHAR_DEAD: &[&str] = &[
    "  ▄▄▄▄▄",
    "  █ ✕ ██",
    "▄▄█▄▄▄▀",
    "▀▄████",
    "  ▐▌ ▐▌",
];

const CHAR_DUCK_1: &[&str] = &[
    "▄▄▄▄▄▄▄▄▄ ● █",
    "▀▄████████▄▀",
    "  ▐▌  ▀▄",
];

const CHAR_DUCK_2: &[&str] = &[
    "▄▄▄▄▄▄▄▄▄ ● █",
    "▀▄████████▄▀",
    "  ▄▀  ▐▌",
];

const CACTUS_SMALL_1: &[&str] = &[
    " █ ",
    "▄█▄",
    " █ ",
];

const CACTUS_SMALL_2: &[&str] = &[
    " █ █",
    " █▄█",
    " █ ",
];

const CACTUS_SMALL_3: &[&str] = &[
    "█ █ ",
    "█▄█ ",
    " █ ",
];

const CACTUS_LARGE_1: &[&str] = &[
    "  █  ",
    "█ █ █",
    "█▄█▄█",
    "  █  ",
    "  █  ",
];

const CACTUS_LARGE_2: &[&str] = &[
    "  █ █",
    "█ █▄█",
    "█▄█  ",
    "  █  ",
    "  █  ",
];

const CACTUS_LARGE_3: &[&str] = &[
    "█ █  ",
    "█▄█ █",
    "  █▄█",
    "  █  ",
    "  █  ",
];

const BIRD_1: &[&str] = &[
    "▄▀▀▄    ",
    "   ▀██▄▄▀",
];

const BIRD_2: &[&str] = &[
    "    ▄██▄▄▀",
    "▀▄▄▀     ",
];

// One long periodic row, clipped by the renderer to the segment span.
const GROUND_ROW: &[&str] = &[
    "_,.-'~'-._,.-'~'-._,.-'~'-._,.-'~'-._,.-'~'-._,.-'~'-._,.-'~'-._,.-'~'-._,.-'~'-._,.-'~'-._,.-'~'-._,.-'~'-._,.-'~'-._,.-'~'-._,.-'~'-._,.-'~'-._,.-'~'-._,.-'~'-._,.-'~'-._,.-'~'-.",
];

/// The built-in asset pack. Collision-box sizes come from [`Tuning`] so art
/// and physics can never drift apart.
#[derive(Debug, Clone)]
pub struct AsciiAssets {
    char_run: [Sprite; 2],
    char_duck: [Sprite; 2],
    char_jump: Sprite,
    char_dead: Sprite,
    char_idle: Sprite,
    cacti: [Sprite; 6],
    bird: [Sprite; 2],
    ground: Sprite,
}

impl AsciiAssets {
    pub fn new(tuning: &Tuning) -> Self {
        let run = tuning.character_run_box;
        let duck = tuning.character_duck_box;
        let small = tuning.cactus_small_box;
        let large = tuning.cactus_large_box;
        let bird = tuning.bird_box;
        Self {
            char_run: [
                Sprite { size: run, art: CHAR_RUN_1 },
                Sprite { size: run, art: CHAR_RUN_2 },
            ],
            char_duck: [
                Sprite { size: duck, art: CHAR_DUCK_1 },
                Sprite { size: duck, art: CHAR_DUCK_2 },
            ],
            char_jump: Sprite { size: run, art: CHAR_JUMP },
            char_dead: Sprite { size: run, art: CHAR_DEAD },
            char_idle: Sprite { size: run, art: CHAR_JUMP },
            cacti: [
                Sprite { size: small, art: CACTUS_SMALL_1 },
                Sprite { size: small, art: CACTUS_SMALL_2 },
                Sprite { size: small, art: CACTUS_SMALL_3 },
                Sprite { size: large, art: CACTUS_LARGE_1 },
                Sprite { size: large, art: CACTUS_LARGE_2 },
                Sprite { size: large, art: CACTUS_LARGE_3 },
            ],
            bird: [
                Sprite { size: bird, art: BIRD_1 },
                Sprite { size: bird, art: BIRD_2 },
            ],
            ground: Sprite {
                size: Vec2::new(crate::consts::SCREEN_W, 14.0),
                art: GROUND_ROW,
            },
        }
    }
}

impl AssetProvider for AsciiAssets {
    fn sprite(&self, id: SpriteId) -> &Sprite {
        match id {
            SpriteId::Character { state, frame } => match state {
                CharacterState::Idle => &self.char_idle,
                CharacterState::Running => &self.char_run[frame % 2],
                CharacterState::Ducking => &self.char_duck[frame % 2],
                CharacterState::Jumping => &self.char_jump,
                CharacterState::Dead => &self.char_dead,
            },
            SpriteId::Cactus { variant } => &self.cacti[variant as usize % self.cacti.len()],
            SpriteId::Bird { frame } => &self.bird[frame % 2],
            SpriteId::Ground => &self.ground,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprite_sizes_track_tuning_boxes() {
        let tuning = Tuning::default();
        let assets = AsciiAssets::new(&tuning);
        let run = assets.sprite(SpriteId::Character {
            state: CharacterState::Running,
            frame: 0,
        });
        assert_eq!(run.size, tuning.character_run_box);
        let duck = assets.sprite(SpriteId::Character {
            state: CharacterState::Ducking,
            frame: 1,
        });
        assert_eq!(duck.size, tuning.character_duck_box);
        let small = assets.sprite(SpriteId::Cactus { variant: 2 });
        let large = assets.sprite(SpriteId::Cactus { variant: 3 });
        assert_eq!(small.size, tuning.cactus_small_box);
        assert_eq!(large.size, tuning.cactus_large_box);
    }

    #[test]
    fn every_sprite_has_art() {
        let tuning = Tuning::default();
        let assets = AsciiAssets::new(&tuning);
        let ids = [
            SpriteId::Character { state: CharacterState::Idle, frame: 0 },
            SpriteId::Character { state: CharacterState::Dead, frame: 0 },
            SpriteId::Cactus { variant: 5 },
            SpriteId::Bird { frame: 1 },
            SpriteId::Ground,
        ];
        for id in ids {
            assert!(!assets.sprite(id).art.is_empty());
        }
    }
}
