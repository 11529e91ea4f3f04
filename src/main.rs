//! Gravroids headless runner
//!
//! Drives the simulation with a scripted pilot, logs cues and frames, and
//! prints the final HUD as JSON. Useful for balance checks and replays:
//! the same seed and tuning always produce the same run.
//!
//! Usage: `gravroids [--seed N] [--ticks N] [--tuning FILE]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::process::ExitCode;

    use gravroids::audio::{AudioSink, Cue, dispatch};
    use gravroids::platform::TickInput;
    use gravroids::renderer::{Frame, Renderer, capture};
    use gravroids::sim::{GamePhase, GameState, tick};
    use gravroids::{Error, ShapeTable, Tuning};

    const DEFAULT_TICKS: u64 = 60 * 60;

    struct Options {
        seed: u64,
        ticks: u64,
        tuning: Option<String>,
    }

    fn parse_args() -> Result<Options, String> {
        let mut opts = Options {
            seed: 12345,
            ticks: DEFAULT_TICKS,
            tuning: None,
        };
        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            let mut value = || args.next().ok_or_else(|| format!("{arg} needs a value"));
            match arg.as_str() {
                "--seed" => opts.seed = value()?.parse().map_err(|e| format!("--seed: {e}"))?,
                "--ticks" => opts.ticks = value()?.parse().map_err(|e| format!("--ticks: {e}"))?,
                "--tuning" => opts.tuning = Some(value()?),
                other => return Err(format!("unknown argument: {other}")),
            }
        }
        Ok(opts)
    }

    fn load_tuning(path: Option<&str>) -> Result<Tuning, Error> {
        match path {
            Some(path) => Tuning::from_file(path),
            None => Ok(Tuning::default()),
        }
    }

    /// Logs cues instead of playing them
    #[derive(Default)]
    struct LogSink {
        played: u64,
    }

    impl AudioSink for LogSink {
        fn play(&mut self, cue: Cue) {
            self.played += 1;
            log::trace!("cue: {}", cue.name());
        }
    }

    /// Logs a frame summary every second of simulated time
    #[derive(Default)]
    struct LogRenderer {
        frames: u64,
    }

    impl Renderer for LogRenderer {
        fn render(&mut self, frame: &Frame<'_>) {
            self.frames += 1;
            if self.frames % 60 == 0 {
                log::debug!(
                    "frame {}: {} bodies, camera ({:.1}, {:.1}), hp {} ammo {} score {}",
                    self.frames,
                    frame.body_count(),
                    frame.camera.x,
                    frame.camera.y,
                    frame.hud.hp,
                    frame.hud.ammo,
                    frame.hud.score
                );
            }
        }
    }

    /// Scripted pilot: slow spin, steady fire, hover against gravity,
    /// respawn whenever wrecked
    fn autopilot(state: &GameState) -> TickInput {
        let t = state.time_ticks;
        TickInput {
            thrust: state.craft.body.vel.y > 0.5,
            rotate_right: t % 3 == 0,
            fire_primary: true,
            fire_secondary: t % 97 == 0,
            tow_beam: false,
            respawn: state.phase != GamePhase::Playing && t % 30 == 0,
            ..Default::default()
        }
    }

    pub fn run() -> ExitCode {
        env_logger::init();
        log::info!("Gravroids (headless) starting...");

        let opts = match parse_args() {
            Ok(opts) => opts,
            Err(msg) => {
                eprintln!("{msg}");
                eprintln!("usage: gravroids [--seed N] [--ticks N] [--tuning FILE]");
                return ExitCode::FAILURE;
            }
        };

        let state = load_tuning(opts.tuning.as_deref())
            .and_then(|tuning| GameState::with_config(opts.seed, tuning, ShapeTable::builtin()));
        let mut state = match state {
            Ok(state) => state,
            Err(e) => {
                log::error!("Cannot start session: {e}");
                return ExitCode::FAILURE;
            }
        };
        log::info!("Game initialized with seed: {}", opts.seed);

        let mut sink = LogSink::default();
        let mut renderer = LogRenderer::default();
        for _ in 0..opts.ticks {
            let input = autopilot(&state);
            tick(&mut state, &input);
            dispatch(state.drain_cues(), &mut sink);
            renderer.render(&capture(&state));
            if state.finished {
                break;
            }
        }

        log::info!(
            "Ran {} ticks, {} cues, {} frames",
            state.time_ticks,
            sink.played,
            renderer.frames
        );
        match serde_json::to_string_pretty(&capture(&state).hud) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log::error!("Failed to serialize HUD: {e}");
                return ExitCode::FAILURE;
            }
        }
        ExitCode::SUCCESS
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No host loop on wasm; embedders drive `gravroids::sim::tick` directly
}
