//! Fixed-tick scheduling and the boundary between game logic and I/O
//!
//! [`GameController`] owns the one [`GameState`] of a session. Ticks and key
//! presses both arrive through it, and every state change is pushed to the
//! [`Renderer`]. Callers drive it from a single task, so ticks and key
//! handling never interleave.

pub mod ticker;

use crossterm::event::KeyEvent;
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use crate::game::{CollisionType, GameConfig, GameState, StepResult};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;

pub use ticker::Ticker;

pub struct GameController<R: Renderer> {
    config: GameConfig,
    state: GameState,
    renderer: R,
    input_handler: InputHandler,
    rng: StdRng,
    ticker: Option<Ticker>,
}

impl<R: Renderer> GameController<R> {
    pub fn new(config: GameConfig, renderer: R) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = GameState::from_config(&config);

        Self {
            config,
            state,
            renderer,
            input_handler: InputHandler::new(),
            rng,
            ticker: None,
        }
    }

    /// Draw the opening board and begin ticking
    pub fn start(&mut self) {
        self.stop();
        self.redraw();
        self.announce("game started");
        self.schedule();
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Resolves on the next tick. Never resolves while stopped.
    pub async fn wait_for_tick(&mut self) {
        match self.ticker.as_mut() {
            Some(ticker) => ticker.tick().await,
            None => std::future::pending().await,
        }
    }

    /// Advance the game one step and redraw, or freeze the board on game over
    pub fn tick(&mut self) -> StepResult {
        let result = self.state.advance(&mut self.rng);

        if result.terminated {
            if let Some(collision) = result.info.collision_type {
                self.end_game(collision);
            }
            return result;
        }

        self.redraw();
        if result.info.ate_food {
            debug!("food moved to ({}, {})", self.state.food.x, self.state.food.y);
            self.announce("ate food!");
        }

        result
    }

    /// Throw the current game away and start over from the initial layout
    pub fn restart(&mut self) {
        self.stop();
        self.state.reset(&self.config);
        self.renderer.hide_game_over();
        self.redraw();
        self.announce("game restarted");
        self.schedule();
    }

    /// Apply a key press. Arrow keys turn the snake; everything else is left
    /// to the caller through the returned action.
    pub fn on_key(&mut self, key: KeyEvent) -> KeyAction {
        let action = self.input_handler.handle_key_event(key);

        if let KeyAction::Turn(direction) = action {
            self.state.set_direction(direction);
            self.announce(&format!("pressed: {}", direction.label()));
        }

        action
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn end_game(&mut self, collision: CollisionType) {
        self.stop();
        info!(
            "{} after {} steps, score {}",
            collision.reason(),
            self.state.steps,
            self.state.score
        );
        self.announce(collision.reason());
        self.renderer.show_game_over();
    }

    fn schedule(&mut self) {
        let ticker = Ticker::start(self.config.tick_interval());
        info!("ticking every {:?}", ticker.period());
        self.ticker = Some(ticker);
    }

    fn stop(&mut self) {
        if self.ticker.take().is_some() {
            debug!("tick timer stopped");
        }
    }

    fn redraw(&mut self) {
        self.renderer.render_grid(self.state.grid_size);
        self.renderer.render_snake(&self.state.snake);
        self.renderer.render_food(self.state.food);
        self.renderer.render_score(self.state.score);

        let head = self.state.snake.head();
        let status = format!(
            "direction: {}  head: {},{}",
            self.state.direction.label(),
            head.x,
            head.y
        );
        self.announce(&status);
    }

    fn announce(&mut self, message: &str) {
        debug!("{message}");
        self.renderer.render_debug(message);
    }
}
