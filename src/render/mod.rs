//! Drawing collaborators for the game controller
//!
//! The controller only ever talks to the [`Renderer`] trait. The terminal
//! implementation buffers those calls into a [`BoardView`] and draws it with
//! ratatui when the session loop presents a frame.

pub mod renderer;

use crate::game::{Position, Snake};

pub use renderer::{BoardView, Cell, TerminalRenderer};

/// Draw calls issued by the controller after every state change
pub trait Renderer {
    /// Clear the board to `grid_size` x `grid_size` empty cells
    fn render_grid(&mut self, grid_size: usize);

    /// Draw every segment, head distinguished from body
    fn render_snake(&mut self, snake: &Snake);

    fn render_food(&mut self, food: Position);

    fn render_score(&mut self, score: u32);

    fn render_debug(&mut self, message: &str);

    fn show_game_over(&mut self);

    fn hide_game_over(&mut self);
}
