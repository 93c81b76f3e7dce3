use crate::{Ball, Config, Events, GameRng, Paddle, Side, Time};
use hecs::World;

/// End the round if the ball left the field sideways.
///
/// The winner's score goes up by one and the ball is replaced by a fresh one
/// at the field center. Returns the side that scored.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    time: &Time,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    let (entity, winner) = world.query::<&Ball>().iter().find_map(|(entity, ball)| {
        let x = ball.pos.x;
        if x < 0.0 || x > config.field_width {
            let winner = if x >= config.field_width {
                Side::Left
            } else {
                Side::Right
            };
            Some((entity, winner))
        } else {
            None
        }
    })?;

    // A round's ball is never reused: replace it rather than reset it
    if world.despawn(entity).is_ok() {
        world.spawn((Ball::spawn(config, rng),));
    }

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == winner {
            paddle.score += 1;
        }
    }

    match winner {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }

    let score = crate::score(world);
    tracing::info!(
        ?winner,
        left = score.left,
        right = score.right,
        at = time.now,
        "round over"
    );

    Some(winner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ball, create_ball, create_paddle, score, Score};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Time, Events, GameRng) {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, Time::default(), Events::new(), rng)
    }

    fn ball_count(world: &World) -> usize {
        world.query::<&Ball>().iter().count()
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, time, mut events, mut rng) = setup_world();
        create_ball(
            &mut world,
            Ball::with_velocity(Vec2::new(-0.1, 300.0), Vec2::new(-3.0, 3.0), 20.0),
        );

        let winner = check_scoring(&mut world, &config, &time, &mut events, &mut rng);

        assert_eq!(winner, Some(Side::Right));
        assert_eq!(score(&world), Score { left: 0, right: 1 });
        assert!(events.right_scored, "Should trigger right_scored event");
        assert!(!events.left_scored);
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, time, mut events, mut rng) = setup_world();
        create_ball(
            &mut world,
            Ball::with_velocity(Vec2::new(800.5, 300.0), Vec2::new(3.0, 3.0), 20.0),
        );

        let winner = check_scoring(&mut world, &config, &time, &mut events, &mut rng);

        assert_eq!(winner, Some(Side::Left));
        assert_eq!(score(&world), Score { left: 1, right: 0 });
        assert!(events.left_scored, "Should trigger left_scored event");
    }

    #[test]
    fn test_ball_replaced_at_center_after_scoring() {
        let (mut world, config, time, mut events, mut rng) = setup_world();
        let old = create_ball(
            &mut world,
            Ball::with_velocity(Vec2::new(-5.0, 20.0), Vec2::new(-3.0, -3.0), 20.0),
        );

        check_scoring(&mut world, &config, &time, &mut events, &mut rng);

        assert!(!world.contains(old), "Old ball entity is despawned");
        assert_eq!(ball_count(&world), 1, "Exactly one ball remains");
        let ball = ball(&world).expect("ball");
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.vel.x.abs(), config.ball_speed);
        assert_eq!(ball.vel.y.abs(), config.ball_speed);
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, time, mut events, mut rng) = setup_world();
        let entity = create_ball(
            &mut world,
            Ball::with_velocity(Vec2::new(400.0, 300.0), Vec2::new(3.0, 3.0), 20.0),
        );

        let winner = check_scoring(&mut world, &config, &time, &mut events, &mut rng);

        assert_eq!(winner, None);
        assert_eq!(score(&world), Score::new());
        assert!(world.contains(entity), "Ball survives while in play");
        assert!(!events.left_scored && !events.right_scored);
    }

    #[test]
    fn test_field_edges_are_in_play() {
        let (mut world, config, time, mut events, mut rng) = setup_world();
        create_ball(
            &mut world,
            Ball::with_velocity(Vec2::new(800.0, 300.0), Vec2::new(3.0, 3.0), 20.0),
        );
        assert_eq!(check_scoring(&mut world, &config, &time, &mut events, &mut rng), None);

        world.clear();
        create_ball(
            &mut world,
            Ball::with_velocity(Vec2::new(0.0, 300.0), Vec2::new(-3.0, 3.0), 20.0),
        );
        assert_eq!(check_scoring(&mut world, &config, &time, &mut events, &mut rng), None);
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, time, mut events, mut rng) = setup_world();

        for _ in 0..2 {
            for (_e, ball) in world.query_mut::<&mut Ball>() {
                ball.pos.x = 812.0;
            }
            if ball_count(&world) == 0 {
                create_ball(
                    &mut world,
                    Ball::with_velocity(Vec2::new(812.0, 300.0), Vec2::new(3.0, 3.0), 20.0),
                );
            }
            check_scoring(&mut world, &config, &time, &mut events, &mut rng);
            events.clear();
        }

        assert_eq!(score(&world), Score { left: 2, right: 0 });
        assert_eq!(ball_count(&world), 1);
    }
}
