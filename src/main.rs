//! Dino Dash entry point
//!
//! Wires the terminal frontend to the deterministic simulation and runs the
//! cooperative frame loop.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use log::info;

use dino_dash::assets::AsciiAssets;
use dino_dash::consts::{MAX_FRAME_DT, TARGET_FPS};
use dino_dash::highscores::HighScores;
use dino_dash::platform::terminal::{TerminalInput, TerminalRenderer};
use dino_dash::platform::{Clock, FrameClock, InputEvent, InputSource};
use dino_dash::render::draw_scene;
use dino_dash::sim::{GamePhase, GameState, TickInput, tick};
use dino_dash::tuning::Tuning;

struct Args {
    seed: Option<u64>,
    tuning: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        seed: None,
        tuning: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().context("--seed requires a value")?;
                args.seed = Some(value.parse().context("--seed must be an integer")?);
            }
            "--tuning" => {
                let value = iter.next().context("--tuning requires a file path")?;
                args.tuning = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                println!("usage: dino-dash [--seed N] [--tuning balance.json]");
                println!("keys:  space/up jump, down duck, enter restart, q/esc quit");
                std::process::exit(0);
            }
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args()?;

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    info!("starting run with seed {seed}");

    let assets = AsciiAssets::new(&tuning);
    let mut highscores = HighScores::new();
    let mut renderer = TerminalRenderer::new().context("display init failed")?;
    let mut input = TerminalInput::new();
    let mut clock = FrameClock::new(TARGET_FPS);
    let mut state = GameState::new(seed, tuning);

    let mut events = Vec::new();
    let mut duck_held = false;

    'run: loop {
        let dt = clock.elapsed_since_last_tick().min(MAX_FRAME_DT);

        events.clear();
        input.poll(&mut events)?;
        let mut tick_input = TickInput {
            duck: duck_held,
            ..Default::default()
        };
        for event in &events {
            match event {
                InputEvent::QuitRequested => break 'run,
                InputEvent::JumpPressed => {
                    tick_input.jump = true;
                    // Space doubles as the restart key on the game-over screen
                    tick_input.restart = true;
                }
                InputEvent::ConfirmPressed => tick_input.restart = true,
                InputEvent::DuckPressed => {
                    duck_held = true;
                    tick_input.duck = true;
                }
                InputEvent::DuckReleased => {
                    duck_held = false;
                    tick_input.duck = false;
                }
            }
        }

        let was_active = state.phase == GamePhase::Active;
        tick(&mut state, &tick_input, dt);

        if was_active && state.phase == GamePhase::Over {
            let points = state.score.points();
            match highscores.add_score(points, state.time_secs, state.speed) {
                Some(rank) => info!("run ended: {points} points, rank {rank}"),
                None => info!("run ended: {points} points"),
            }
        }

        draw_scene(&mut renderer, &assets, &state)?;
    }

    if let Some(top) = highscores.top_score() {
        info!("best score this session: {top}");
    }
    Ok(())
}
