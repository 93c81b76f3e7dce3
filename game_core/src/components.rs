use glam::Vec2;
use rand::Rng;

use crate::{Aabb, Config, GameEvent, GameRng, KeyBindings};

/// Which half of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Vertical movement intent of a paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    #[default]
    None,
}

/// Paddle component - one player's paddle and score
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // top-left corner; x never changes after construction
    pub size: Vec2,
    pub direction: Direction,
    pub speed: f32,
    pub score: u32,
    pub keys: KeyBindings,
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            pos: config.paddle_spawn(side),
            size: Vec2::new(config.paddle_width, config.paddle_height),
            direction: Direction::None,
            speed: config.paddle_speed,
            score: 0,
            keys: config.keys(side),
        }
    }

    /// Apply a key press bound to this paddle. Returns true if the event was consumed.
    ///
    /// Releases are ignored: the last pressed direction sticks until another press.
    pub fn handle_input(&mut self, event: &GameEvent) -> bool {
        let GameEvent::KeyDown(key) = *event else {
            return false;
        };

        let direction = if key == self.keys.down {
            Direction::Down
        } else if key == self.keys.up {
            Direction::Up
        } else {
            return false;
        };

        if direction != self.direction {
            tracing::debug!(side = ?self.side, ?direction, "paddle direction changed");
        }
        self.direction = direction;
        true
    }

    /// Integrate motion; the caller clamps afterwards
    pub fn update(&mut self, dt: f32) {
        match self.direction {
            Direction::Up => self.pos.y -= self.speed * dt,
            Direction::Down => self.pos.y += self.speed * dt,
            Direction::None => {}
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // top-left corner
    pub vel: Vec2,
    pub size: Vec2,
}

impl Ball {
    /// New ball at `pos` moving diagonally at `speed` per axis, each sign picked at random
    pub fn new(pos: Vec2, speed: f32, size: f32, rng: &mut GameRng) -> Self {
        let vx = if rng.0.gen_bool(0.5) { speed } else { -speed };
        let vy = if rng.0.gen_bool(0.5) { speed } else { -speed };
        Self::with_velocity(pos, Vec2::new(vx, vy), size)
    }

    pub fn with_velocity(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self {
            pos,
            vel,
            size: Vec2::splat(size),
        }
    }

    /// Fresh ball at the field center, as spawned at match start and after each round
    pub fn spawn(config: &Config, rng: &mut GameRng) -> Self {
        Self::new(config.ball_spawn(), config.ball_speed, config.ball_size, rng)
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}
