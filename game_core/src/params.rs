/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (logical pixels, origin top-left, y grows downward)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 2.0; // pixels per unit of dt
    pub const PADDLE_INSET: f32 = 50.0; // gap between a wall and its paddle
    pub const PADDLE_START_Y: f32 = 150.0;

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED: f32 = 3.0; // per-axis magnitude

    // HUD
    pub const SCORE_TEXT_X: f32 = 10.0;
    pub const SCORE_TEXT_Y: f32 = 10.0;
    pub const FONT_SIZE: u16 = 24;

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0;
}
