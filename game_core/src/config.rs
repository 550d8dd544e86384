use glam::Vec2;

use crate::error::ConfigError;
use crate::params::Params;

/// How a paddle is held inside the vertical bounds after it moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddleClamp {
    /// Reference behaviour: the top edge is capped at the bound and the
    /// bottom edge is floored at zero, so a paddle may hang half outside.
    #[default]
    Legacy,
    /// Keeps the whole paddle inside: top >= 0, bottom <= bound.
    Contain,
}

/// How the ball commits its movement at the end of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BallMotion {
    /// Reference behaviour: border checks project `direction * speed` but
    /// the commit adds the bare `direction`.
    #[default]
    Legacy,
    /// Commit adds `direction * speed`, matching the projection.
    Scaled,
}

/// Direction the ball takes when a new round is served
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServePolicy {
    /// Always the configured serve direction
    #[default]
    Fixed,
    /// Configured direction, horizontal sign flipped every round
    Alternate,
    /// Horizontal and vertical signs picked by a seeded rng
    Random { seed: u64 },
}

/// Paddle reflection settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deflection {
    /// Added to `direction.y` per unit of off-centre impact (-1..=1)
    pub spin: f32,
    /// Speed multiplier applied on every paddle hit
    pub speed_increase: f32,
    pub speed_max: f32,
    /// Upper bound on `|direction.y| / |direction.x|` after a hit.
    /// With `speed_max` this bounds the vertical step per tick.
    pub max_slope: f32,
}

impl Default for Deflection {
    fn default() -> Self {
        Self {
            spin: Params::BOUNCE_SPIN,
            speed_increase: Params::BOUNCE_SPEED_INCREASE,
            speed_max: Params::BOUNCE_SPEED_MAX,
            max_slope: Params::BOUNCE_MAX_SLOPE,
        }
    }
}

/// Game configuration, fixed for the lifetime of an engine
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub target_fps: u32,
    pub window_title: String,
    pub paddle_half_extent: Vec2,
    pub paddle_speed: f32,
    pub ball_half_extent: Vec2,
    pub ball_speed: f32,
    pub serve_direction: Vec2,
    pub clear_color: [u8; 3],
    pub entity_color: [u8; 3],
    pub win_score: u8,
    pub paddle_clamp: PaddleClamp,
    pub ball_motion: BallMotion,
    pub paddle_bounce: Option<Deflection>,
    pub serve: ServePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            target_fps: Params::TARGET_FPS,
            window_title: Params::WINDOW_TITLE.to_string(),
            paddle_half_extent: Vec2::new(Params::PADDLE_HALF_WIDTH, Params::PADDLE_HALF_HEIGHT),
            paddle_speed: Params::PADDLE_SPEED,
            ball_half_extent: Vec2::splat(Params::BALL_HALF_SIZE),
            ball_speed: Params::BALL_SPEED,
            serve_direction: Vec2::new(Params::SERVE_X, Params::SERVE_Y),
            clear_color: Params::CLEAR_COLOR,
            entity_color: Params::ENTITY_COLOR,
            win_score: Params::WIN_SCORE,
            paddle_clamp: PaddleClamp::Legacy,
            ball_motion: BallMotion::Legacy,
            paddle_bounce: None,
            serve: ServePolicy::Fixed,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Playable variant: contained paddles, speed-scaled motion, paddle
    /// bounce and alternating serves.
    pub fn arcade() -> Self {
        Self {
            ball_speed: Params::ARCADE_BALL_SPEED,
            paddle_clamp: PaddleClamp::Contain,
            ball_motion: BallMotion::Scaled,
            paddle_bounce: Some(Deflection::default()),
            serve: ServePolicy::Alternate,
            ..Self::default()
        }
    }

    pub fn playfield_size(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Seconds per frame at the target rate
    pub fn frame_duration(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.screen_width, self.screen_height);
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::EmptyPlayfield { width, height });
        }
        if self.target_fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }

        for (entity, half) in [
            ("paddle", self.paddle_half_extent),
            ("ball", self.ball_half_extent),
        ] {
            if !(half.x > 0.0 && half.y > 0.0) {
                return Err(ConfigError::DegenerateEntity {
                    entity,
                    x: half.x,
                    y: half.y,
                });
            }
            if half.x * 2.0 > width || half.y * 2.0 > height {
                return Err(ConfigError::EntityTooLarge { entity });
            }
        }

        if !self.ball_speed.is_finite() || self.ball_speed < 0.0 {
            return Err(ConfigError::InvalidBallSpeed(self.ball_speed));
        }
        if !self.paddle_speed.is_finite() || self.paddle_speed < 0.0 {
            return Err(ConfigError::InvalidPaddleSpeed(self.paddle_speed));
        }
        if !self.serve_direction.is_finite() || self.serve_direction == Vec2::ZERO {
            return Err(ConfigError::InvalidServeDirection);
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        if let Some(deflection) = self.paddle_bounce {
            if !deflection.max_slope.is_finite() || deflection.max_slope < 0.0 {
                return Err(ConfigError::InvalidBounceSlope(deflection.max_slope));
            }
            if deflection.speed_max < self.ball_speed {
                return Err(ConfigError::BounceCapBelowSpeed {
                    max: deflection.speed_max,
                    speed: self.ball_speed,
                });
            }
        }
        Ok(())
    }
}
