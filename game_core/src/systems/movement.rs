use crate::{Ball, Config, Paddle, Time};
use hecs::World;

/// Apply paddle movement based on direction. Paddles may leave the field until clamped.
pub fn move_paddles(world: &mut World, time: &Time) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.update(time.dt);
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.update(time.dt);
    }
}

/// Pull paddles back inside the field
pub fn clamp_paddles(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.pos.y = config.clamp_paddle_y(paddle.pos.y);
    }
}
