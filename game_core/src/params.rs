/// Game tuning parameters for the reference game
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Window
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;
    pub const TARGET_FPS: u32 = 60;
    pub const WINDOW_TITLE: &'static str = "engine";

    // Paddle (20x100 box)
    pub const PADDLE_HALF_WIDTH: f32 = 10.0;
    pub const PADDLE_HALF_HEIGHT: f32 = 50.0;
    pub const PADDLE_SPEED: f32 = 8.0; // px per tick while a key is held

    // Ball (20x20 box)
    pub const BALL_HALF_SIZE: f32 = 10.0;
    pub const BALL_SPEED: f32 = 1.0;
    pub const SERVE_X: f32 = 1.0;
    pub const SERVE_Y: f32 = 4.0;

    // Paddle bounce (only used when enabled)
    pub const BOUNCE_SPIN: f32 = 3.0;
    pub const BOUNCE_SPEED_INCREASE: f32 = 1.05;
    pub const BOUNCE_SPEED_MAX: f32 = 4.0;
    pub const BOUNCE_MAX_SLOPE: f32 = 4.0; // same as the serve direction
    pub const ARCADE_BALL_SPEED: f32 = 2.0;

    // Colours
    pub const CLEAR_COLOR: [u8; 3] = [10, 100, 10];
    pub const ENTITY_COLOR: [u8; 3] = [0, 0, 0];

    // Score
    pub const WIN_SCORE: u8 = 5;
}
