//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Randomness comes in from the caller so the controller and tests decide the seed.

pub mod action;
pub mod config;
pub mod food;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{FoodPlacement, GRID_SIZE, GameConfig, MAX_GRID_SIZE, TICK_INTERVAL_MS};
pub use food::spawn_food;
pub use state::{CollisionType, GameState, Position, Snake, StepInfo, StepResult};
