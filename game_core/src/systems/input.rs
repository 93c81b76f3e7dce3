use crate::{GameEvent, Paddle};
use hecs::World;

/// Offer an input event to every paddle; each one decides whether the key is its own
pub fn route_input(world: &mut World, event: &GameEvent) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.handle_input(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, paddle, Config, Direction, Scancode, Side};

    fn setup_world() -> World {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        world
    }

    fn direction(world: &World, side: Side) -> Option<Direction> {
        paddle(world, side).map(|p| p.direction)
    }

    #[test]
    fn test_key_reaches_only_bound_paddle() {
        let mut world = setup_world();

        route_input(&mut world, &GameEvent::KeyDown(Scancode::S));
        assert_eq!(direction(&world, Side::Left), Some(Direction::Down));
        assert_eq!(direction(&world, Side::Right), Some(Direction::None));

        route_input(&mut world, &GameEvent::KeyDown(Scancode::UP));
        assert_eq!(direction(&world, Side::Left), Some(Direction::Down));
        assert_eq!(direction(&world, Side::Right), Some(Direction::Up));
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut world = setup_world();

        route_input(&mut world, &GameEvent::KeyDown(Scancode(4)));

        assert_eq!(direction(&world, Side::Left), Some(Direction::None));
        assert_eq!(direction(&world, Side::Right), Some(Direction::None));
    }
}
