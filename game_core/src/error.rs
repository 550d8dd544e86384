use thiserror::Error;

/// Rejected engine configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("playfield must be larger than zero, got {width}x{height}")]
    EmptyPlayfield { width: f32, height: f32 },

    #[error("target frame rate must be at least 1")]
    ZeroFrameRate,

    #[error("{entity} half extent must be positive, got ({x}, {y})")]
    DegenerateEntity { entity: &'static str, x: f32, y: f32 },

    #[error("{entity} does not fit inside the playfield")]
    EntityTooLarge { entity: &'static str },

    #[error("ball speed must be finite and non-negative, got {0}")]
    InvalidBallSpeed(f32),

    #[error("paddle speed must be finite and non-negative, got {0}")]
    InvalidPaddleSpeed(f32),

    #[error("win score must be at least 1")]
    ZeroWinScore,

    #[error("serve direction must be non-zero and finite")]
    InvalidServeDirection,

    #[error("key binding targets paddle {paddle} but only {count} paddles exist")]
    UnboundPaddle { paddle: usize, count: usize },

    #[error("bounce speed cap {max} is below the starting ball speed {speed}")]
    BounceCapBelowSpeed { max: f32, speed: f32 },

    #[error("bounce slope cap must be finite and non-negative, got {0}")]
    InvalidBounceSlope(f32),
}

/// Failure that ended a frame loop early
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("presentation layer failed on frame {frame}: {source}")]
    Presenter {
        frame: u64,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}
