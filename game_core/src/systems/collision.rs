use crate::{Aabb, Ball, Config, Events, Paddle};
use hecs::World;

/// Ball/paddle rectangle overlap; touching edges do not count
pub fn overlaps(ball: &Ball, paddle: &Paddle) -> bool {
    ball.bounds().overlaps(&paddle.bounds())
}

/// Reverse the ball's X velocity if it overlaps any paddle.
///
/// Only the sign of X flips, whichever edge was struck, so speed is conserved.
/// The ball is not pushed out, so a ball still inside a paddle on the next
/// step flips again.
pub fn check_collisions(world: &mut World, events: &mut Events) {
    // Collect paddle bounds without holding a borrow on the world
    let paddles: Vec<Aabb> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| paddle.bounds())
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let bounds = ball.bounds();
        if paddles.iter().any(|paddle| bounds.overlaps(paddle)) {
            ball.vel.x = -ball.vel.x;
            events.ball_hit_paddle = true;
            tracing::debug!(x = ball.pos.x, y = ball.pos.y, "ball hit paddle");
        }
    }
}

/// Reverse the ball's Y velocity if it is above or below the field.
/// Returns true if it bounced.
///
/// Only the ball's top edge is tested, against `0` and the full field height.
pub fn bounce_off_walls(world: &mut World, config: &Config, events: &mut Events) -> bool {
    let mut bounced = false;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y < 0.0 || ball.pos.y > config.field_height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
            bounced = true;
            tracing::debug!(x = ball.pos.x, y = ball.pos.y, "ball hit wall");
        }
    }
    bounced
}
