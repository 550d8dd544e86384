//! Simulation engine
//!
//! Owns the ball and paddles and advances them one frame per `tick`.
//! Alternates between active play and a single round-end frame that
//! tallies the point, notifies evaluators and re-serves.

use log::debug;

use crate::components::{Renderable, ScoreSide};
use crate::error::ConfigError;
use crate::map::Side;
use crate::present::{DrawRect, Frame};
use crate::systems::*;
use crate::{Ball, Config, Events, Paddle, Playfield, Score, Time};

/// Coarse engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    RoundEnd,
}

/// Index of a paddle in engine insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaddleId(pub usize);

impl PaddleId {
    pub const LEFT: PaddleId = PaddleId(0);
    pub const RIGHT: PaddleId = PaddleId(1);
}

/// Summary handed to evaluators once per finished round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundOutcome {
    pub round: u32,
    pub side: ScoreSide,
    pub score: Score,
    /// Playing ticks the round lasted
    pub ticks: u64,
}

/// Hook run during the round-end phase, e.g. to train or tune an agent
pub trait RoundEvaluator {
    fn round_ended(&mut self, outcome: &RoundOutcome);
}

impl<F: FnMut(&RoundOutcome)> RoundEvaluator for F {
    fn round_ended(&mut self, outcome: &RoundOutcome) {
        self(outcome)
    }
}

pub struct SimulationEngine {
    config: Config,
    field: Playfield,
    phase: Phase,
    ball: Ball,
    paddles: Vec<Paddle>,
    score: Score,
    events: Events,
    time: Time,
    serve: Serve,
    evaluators: Vec<Box<dyn RoundEvaluator>>,
    ticks: u64,
    round: u32,
    round_ticks: u64,
}

impl SimulationEngine {
    /// Build the two-paddle game described by `config`
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        debug!("Building engine...");
        config.validate()?;

        let field = Playfield::new(config.screen_width, config.screen_height);
        let ball = Ball::new(
            field.ball_spawn(),
            config.ball_half_extent,
            config.serve_direction,
            config.ball_speed,
            field,
        )
        .with_motion(config.ball_motion)
        .with_deflection(config.paddle_bounce);

        let mut engine = Self {
            field,
            phase: Phase::Playing,
            ball,
            paddles: Vec::with_capacity(2),
            score: Score::new(),
            events: Events::new(),
            time: Time::default(),
            serve: Serve::new(config.serve, config.serve_direction),
            evaluators: Vec::new(),
            ticks: 0,
            round: 1,
            round_ticks: 0,
            config,
        };
        for side in [Side::Left, Side::Right] {
            let center = engine.field.paddle_spawn(side);
            engine.add_paddle(center);
        }

        debug!(
            "Building successful! {}x{} @ {} fps",
            engine.field.width, engine.field.height, engine.config.target_fps
        );
        Ok(engine)
    }

    /// Add a paddle at `center`; it is drawn after existing paddles
    pub fn add_paddle(&mut self, center: glam::Vec2) -> PaddleId {
        let paddle = Paddle::new(
            center,
            self.config.paddle_half_extent,
            self.field.height,
            self.config.paddle_clamp,
        );
        self.paddles.push(paddle);
        PaddleId(self.paddles.len() - 1)
    }

    pub fn add_evaluator(&mut self, evaluator: impl RoundEvaluator + 'static) {
        self.evaluators.push(Box::new(evaluator));
    }

    /// Record the measured frame time
    pub fn advance_time(&mut self, dt: f32) {
        self.time.advance(dt);
    }

    /// Store a paddle's per-tick vertical velocity.
    ///
    /// # Panics
    ///
    /// If `id` does not name a paddle of this engine.
    pub fn set_paddle_velocity(&mut self, id: PaddleId, dy: f32) {
        let count = self.paddles.len();
        match self.paddles.get_mut(id.0) {
            Some(paddle) => paddle.set_vertical_velocity(dy),
            None => panic!("paddle {} does not exist ({} paddles)", id.0, count),
        }
    }

    /// Advance the simulation by one frame
    pub fn tick(&mut self) {
        self.events.clear();
        self.ticks += 1;

        match self.phase {
            Phase::Playing => self.play(),
            Phase::RoundEnd => {
                self.finish_round();
                self.phase = Phase::Playing;
            }
        }
    }

    fn play(&mut self) {
        assert!(
            self.ball.score().is_none(),
            "ball entered play with a recorded goal ({:?})",
            self.ball.score()
        );

        move_paddles(&mut self.paddles);
        self.ball.tick(&self.paddles, &mut self.events);
        self.round_ticks += 1;

        let side = self.ball.score();
        if !side.is_none() {
            tally_round(&mut self.score, side, &mut self.events);
            self.phase = Phase::RoundEnd;
        }
    }

    fn finish_round(&mut self) {
        let outcome = RoundOutcome {
            round: self.round,
            side: self.ball.score(),
            score: self.score,
            ticks: self.round_ticks,
        };
        for evaluator in self.evaluators.iter_mut() {
            evaluator.round_ended(&outcome);
        }

        let direction = self.serve.next_direction();
        reset_round(
            &mut self.ball,
            &mut self.paddles,
            &self.field,
            direction,
            self.config.ball_speed,
        );
        debug!("round {} served toward {:?}", self.round + 1, direction);

        self.round += 1;
        self.round_ticks = 0;
    }

    /// Paddles in insertion order, then the ball
    pub fn entities(&self) -> impl Iterator<Item = &dyn Renderable> + '_ {
        self.paddles
            .iter()
            .map(|paddle| paddle as &dyn Renderable)
            .chain(std::iter::once(&self.ball as &dyn Renderable))
    }

    /// Everything the presentation layer needs to draw this frame
    pub fn frame(&self) -> Frame {
        let color = self.config.entity_color;
        Frame {
            clear_color: self.config.clear_color,
            rects: self
                .entities()
                .map(|entity| DrawRect::from_aabb(&entity.rect(), color))
                .collect(),
            score: self.score,
            phase: self.phase,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddles(&self) -> &[Paddle] {
        &self.paddles
    }

    pub fn paddle(&self, id: PaddleId) -> Option<&Paddle> {
        self.paddles.get(id.0)
    }

    pub fn paddle_count(&self) -> usize {
        self.paddles.len()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// 0 = left, 1 = right, once either reaches the configured win score
    pub fn winner(&self) -> Option<u8> {
        self.score.has_winner(self.config.win_score)
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Current round number, starting at 1
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn playfield(&self) -> Playfield {
        self.field
    }
}
