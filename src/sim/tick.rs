//! Per-frame simulation step
//!
//! One call to [`tick`] advances the whole session by one frame's worth of
//! wall time. Ordering within a tick is fixed: input intents, difficulty
//! ramp, character physics, ground scroll, score, spawning, obstacle
//! advance/cull, collision check.

use super::collision::first_hit;
use super::state::{GamePhase, GameState};

/// Input intents for a single tick.
///
/// `jump` is edge-triggered (one press, one jump attempt); `duck` is the
/// current held state; `restart` is only honored while the game is over.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub jump: bool,
    pub duck: bool,
    pub restart: bool,
}

/// Advance the session by `dt` seconds of wall time.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        GamePhase::Over => {
            if input.restart {
                state.reset();
                return;
            }
            // World freezes but stays visible; birds keep flapping and
            // anything already past the cull line is still removed.
            advance_and_cull_obstacles(state, dt, 0.0);
        }
        GamePhase::Active => {
            state.time_secs += dt;
            state.speed = (state.speed + state.tuning.ramp_rate * dt).min(state.tuning.max_speed);

            if input.jump {
                state.character.jump(&state.tuning);
            }
            if input.duck {
                state.character.duck();
            } else {
                state.character.stand_up();
            }

            state.character.advance(dt, &state.tuning);
            state.ground.advance(dt, state.speed, &state.tuning);
            state.score.advance(dt, state.speed, &state.tuning);

            if let Some(obstacle) =
                state
                    .spawner
                    .tick(dt, state.speed, &mut state.rng, &state.tuning)
            {
                state.obstacles.push(obstacle);
            }

            let speed = state.speed;
            advance_and_cull_obstacles(state, dt, speed);
            check_collisions(state);
        }
    }
}

fn advance_and_cull_obstacles(state: &mut GameState, dt: f32, speed: f32) {
    let tuning = &state.tuning;
    for obstacle in &mut state.obstacles {
        obstacle.advance(dt, speed, tuning);
    }
    state.obstacles.retain(|o| !o.off_screen());
}

/// Kill the character on the first overlapping obstacle and end the run.
/// No-op once the character is dead.
fn check_collisions(state: &mut GameState) {
    if !state.character.is_alive() {
        return;
    }
    if first_hit(&state.character.collision_rect(), &state.obstacles).is_some() {
        state.character.die();
        state.phase = GamePhase::Over;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{BirdLevel, CharacterState, Obstacle};
    use crate::tuning::Tuning;

    const DT: f32 = 1.0 / 24.0;

    fn new_state(seed: u64) -> GameState {
        GameState::new(seed, Tuning::default())
    }

    /// Place an obstacle directly on top of the character.
    fn plant_collision(state: &mut GameState) {
        let rect = state.character.collision_rect();
        let mut obstacle = Obstacle::cactus(0, rect.x, &state.tuning);
        obstacle.x = rect.x;
        state.obstacles.push(obstacle);
    }

    #[test]
    fn one_second_of_idle_ticking_scores_ten() {
        let mut state = new_state(7);
        let input = TickInput::default();
        for _ in 0..24 {
            tick(&mut state, &input, DT);
        }
        // Score integrates 10 * speed over one second with speed ~1.0
        assert!((state.score.score - 10.0).abs() < 0.5, "score = {}", state.score.score);
        let expected_speed = 1.0 + state.tuning.ramp_rate;
        assert!((state.speed - expected_speed).abs() < 1e-3);
        // Earliest possible spawn is 1.4s out at these settings
        assert!(state.obstacles.is_empty());
        assert_eq!(state.phase, GamePhase::Active);
    }

    #[test]
    fn speed_clamped_at_max_and_reset_to_min() {
        let mut state = new_state(8);
        let input = TickInput::default();
        for _ in 0..(120 * 24) {
            tick(&mut state, &input, DT);
            assert!(state.speed <= state.tuning.max_speed + 1e-6);
            // Keep the field clear so nothing ends the run mid-ramp
            state.obstacles.clear();
        }
        assert!((state.speed - state.tuning.max_speed).abs() < 1e-4);

        state.phase = GamePhase::Over;
        let restart = TickInput { restart: true, ..Default::default() };
        tick(&mut state, &restart, DT);
        assert_eq!(state.speed, state.tuning.min_speed);
    }

    #[test]
    fn collision_kills_once_and_ends_run() {
        let mut state = new_state(9);
        plant_collision(&mut state);

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.character.state, CharacterState::Dead);

        // Further ticks are harmless no-ops for the character
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.character.state, CharacterState::Dead);
        assert_eq!(state.phase, GamePhase::Over);
    }

    #[test]
    fn restart_resets_everything_but_best() {
        let mut state = new_state(10);
        for _ in 0..48 {
            tick(&mut state, &TickInput::default(), DT);
        }
        let earned = state.score.score;
        assert!(earned > 0.0);

        plant_collision(&mut state);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::Over);

        tick(&mut state, &TickInput { restart: true, ..Default::default() }, DT);
        assert_eq!(state.phase, GamePhase::Active);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score.score, 0.0);
        assert!(state.score.best >= earned);
        assert_eq!(state.speed, state.tuning.min_speed);
        assert_eq!(state.time_secs, 0.0);
        assert_eq!(state.character.state, CharacterState::Idle);
        assert_eq!(state.spawner.timer(), 0.0);
    }

    #[test]
    fn world_freezes_while_over() {
        let mut state = new_state(11);
        state.obstacles.push(Obstacle::bird(BirdLevel::High, 400.0, &state.tuning));
        plant_collision(&mut state);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::Over);

        let positions: Vec<f32> = state.obstacles.iter().map(|o| o.x).collect();
        let score = state.score.score;
        for _ in 0..24 {
            tick(&mut state, &TickInput { jump: true, duck: true, ..Default::default() }, DT);
        }
        let after: Vec<f32> = state.obstacles.iter().map(|o| o.x).collect();
        assert_eq!(positions, after);
        assert_eq!(state.score.score, score);
        // Jump/duck intents are ignored while over
        assert_eq!(state.character.state, CharacterState::Dead);
    }

    #[test]
    fn no_spawns_while_over() {
        let mut state = new_state(12);
        plant_collision(&mut state);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::Over);

        let count = state.obstacles.len();
        // Far longer than any spawn interval
        for _ in 0..(10 * 24) {
            tick(&mut state, &TickInput::default(), DT);
        }
        assert_eq!(state.obstacles.len(), count);
    }

    #[test]
    fn obstacles_spawn_and_scroll_in_from_the_right() {
        let mut state = new_state(13);
        let input = TickInput { jump: true, ..Default::default() };
        let mut max_seen = 0;
        for _ in 0..(30 * 24) {
            tick(&mut state, &input, DT);
            max_seen = max_seen.max(state.obstacles.len());
            for o in &state.obstacles {
                assert!(o.x <= crate::consts::SCREEN_W);
                assert!(!o.off_screen());
            }
        }
        assert!(max_seen > 0, "nothing ever spawned");
    }

    #[test]
    fn same_seed_same_inputs_same_world() {
        let mut a = new_state(99);
        let mut b = new_state(99);
        for frame in 0..(20 * 24) {
            let input = TickInput { jump: frame % 37 == 0, duck: frame % 53 < 10, ..Default::default() };
            tick(&mut a, &input, DT);
            tick(&mut b, &input, DT);
        }
        assert_eq!(a.obstacles.len(), b.obstacles.len());
        for (oa, ob) in a.obstacles.iter().zip(&b.obstacles) {
            assert_eq!(oa.kind, ob.kind);
            assert_eq!(oa.x, ob.x);
        }
        assert_eq!(a.score.score, b.score.score);
        assert_eq!(a.phase, b.phase);
    }

    #[test]
    fn jump_intent_clears_a_small_cactus() {
        let mut state = new_state(14);
        // Cactus far enough out that a well-timed jump clears it
        state.obstacles.push(Obstacle::cactus(0, 320.0, &state.tuning));
        let mut jumped = false;
        for _ in 0..(5 * 24) {
            let near = state
                .obstacles
                .first()
                .map(|o| o.x < 200.0 && o.x > 150.0)
                .unwrap_or(false);
            let input = TickInput { jump: !jumped && near, ..Default::default() };
            if input.jump {
                jumped = true;
            }
            tick(&mut state, &input, DT);
            if state.obstacles.is_empty() {
                break;
            }
        }
        assert_eq!(state.phase, GamePhase::Active, "jump failed to clear the cactus");
        assert!(state.obstacles.is_empty(), "cactus never culled");
    }
}
