//! Match state and the event loop driving it

use std::ops::ControlFlow;

use hecs::World;

use crate::{
    ball, create_ball, create_paddle, draw_frame, paddle, route_input, score, step, Ball, Config,
    EventSource, Events, GameEvent, GameRng, Paddle, RenderSurface, Score, Side, Time,
};

/// One running match: both paddles, the current ball, and the resources the systems share
pub struct GameState {
    world: World,
    time: Time,
    config: Config,
    events: Events,
    rng: GameRng,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self::with_config(Config::new(), seed)
    }

    pub fn with_config(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        create_ball(&mut world, Ball::spawn(&config, &mut rng));

        Self {
            world,
            time: Time::default(),
            config,
            events: Events::new(),
            rng,
        }
    }

    /// Advance the simulation by one step of `dt`
    pub fn update(&mut self, dt: f32) {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.events,
            &mut self.rng,
        );
    }

    /// Render the current state. Never mutates the simulation.
    pub fn draw<S: RenderSurface>(&self, surface: &mut S) -> Result<(), S::Error> {
        draw_frame(&self.world, &self.config, surface)
    }

    /// Process one event to completion.
    ///
    /// Input goes to both paddles; a tick runs one fixed-step update then one draw.
    pub fn handle_event<S: RenderSurface>(
        &mut self,
        event: GameEvent,
        surface: &mut S,
    ) -> Result<ControlFlow<()>, S::Error> {
        match event {
            GameEvent::Quit => return Ok(ControlFlow::Break(())),
            GameEvent::KeyDown(_) | GameEvent::KeyUp(_) => route_input(&mut self.world, &event),
            GameEvent::Tick => {
                self.update(self.config.fixed_dt);
                self.draw(surface)?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn time(&self) -> &Time {
        &self.time
    }

    /// What happened during the most recent update
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn score(&self) -> Score {
        score(&self.world)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        paddle(&self.world, side)
    }

    pub fn paddle_mut(&mut self, side: Side) -> Option<&mut Paddle> {
        self.world
            .query_mut::<&mut Paddle>()
            .into_iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p)
    }

    pub fn ball(&self) -> Option<Ball> {
        ball(&self.world)
    }

    pub fn ball_mut(&mut self) -> Option<&mut Ball> {
        self.world
            .query_mut::<&mut Ball>()
            .into_iter()
            .next()
            .map(|(_e, b)| b)
    }
}

/// Block on `source` and feed every event to `game` until quit or the source runs dry
pub fn run<E, S>(game: &mut GameState, source: &mut E, surface: &mut S) -> Result<(), S::Error>
where
    E: EventSource,
    S: RenderSurface,
{
    tracing::info!("game loop started");
    while let Some(event) = source.wait_event() {
        if game.handle_event(event, surface)?.is_break() {
            break;
        }
    }
    let score = game.score();
    tracing::info!(left = score.left, right = score.right, "game loop finished");
    Ok(())
}
