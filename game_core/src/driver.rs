//! Frame loop: input -> simulate -> draw, paced by a frame clock

use log::{debug, error, info};

use crate::engine::SimulationEngine;
use crate::error::RunError;
use crate::input::{InputState, KeyBindings};
use crate::present::{FrameClock, Presenter};
use crate::Score;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Stop after this many frames even without a quit request
    pub max_frames: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub elapsed: f32,
    pub score: Score,
    pub quit_requested: bool,
}

/// Drive `engine` until the presenter asks to quit.
///
/// A quit request ends the loop after the frame it arrived in has been
/// simulated and drawn. A presenter failure is logged and ends the session.
pub fn run<P, C>(
    engine: &mut SimulationEngine,
    presenter: &mut P,
    clock: &mut C,
    bindings: &KeyBindings,
    options: RunOptions,
) -> Result<RunSummary, RunError>
where
    P: Presenter,
    C: FrameClock,
{
    bindings.validate(engine.paddle_count())?;

    let target_fps = engine.config().target_fps;
    let mut input = InputState::new();
    let mut events = Vec::new();
    let mut frames = 0u64;
    let mut elapsed = 0.0f32;

    debug!("Engine running...");
    while !input.quit_requested() {
        if options.max_frames.is_some_and(|max| frames >= max) {
            break;
        }

        let dt = clock.tick(target_fps);
        elapsed += dt;
        engine.advance_time(dt);

        events.clear();
        if let Err(err) = presenter.poll_events(&mut events) {
            return Err(presenter_failure(frames, err));
        }
        for event in &events {
            input.handle(event, bindings);
        }
        input.apply(engine, bindings);

        engine.tick();

        if let Err(err) = presenter.draw(&engine.frame()) {
            return Err(presenter_failure(frames, err));
        }
        frames += 1;
    }
    debug!("Closing engine");

    let summary = RunSummary {
        frames,
        elapsed,
        score: engine.score(),
        quit_requested: input.quit_requested(),
    };
    info!(
        "session ended after {} frames, score {}-{}",
        summary.frames, summary.score.left, summary.score.right
    );
    Ok(summary)
}

fn presenter_failure<E>(frame: u64, err: E) -> RunError
where
    E: std::error::Error + Send + Sync + 'static,
{
    error!("presentation layer failed on frame {}: {}", frame, err);
    RunError::Presenter {
        frame,
        source: Box::new(err),
    }
}
