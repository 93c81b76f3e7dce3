pub mod aabb;
pub mod components;
pub mod config;
pub mod game;
pub mod input;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use aabb::*;
pub use components::*;
pub use config::*;
pub use game::*;
pub use input::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one deterministic Pong simulation step of `time.dt`
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of step
    events.clear();

    // 1. Integrate paddles, then ball
    move_paddles(world, time);
    move_ball(world, time);

    // 2. Ball vs paddles
    check_collisions(world, events);

    // 3. Top/bottom bounce, otherwise 4. round end. Never both in one step.
    if !bounce_off_walls(world, config, events) {
        check_scoring(world, config, time, events, rng);
    }

    // 5. Keep paddles on the field
    clamp_paddles(world, config);

    time.advance();
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(side, config),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}

/// Copy of the paddle defending `side`
pub fn paddle(world: &World, side: Side) -> Option<Paddle> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == side)
        .map(|(_e, p)| *p)
}

/// Copy of the ball in play
pub fn ball(world: &World) -> Option<Ball> {
    world.query::<&Ball>().iter().next().map(|(_e, b)| *b)
}

/// Current score, read from the paddles
pub fn score(world: &World) -> Score {
    let mut score = Score::new();
    for (_e, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Left => score.left = paddle.score,
            Side::Right => score.right = paddle.score,
        }
    }
    score
}
