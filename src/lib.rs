//! Grid Snake - a fixed-tick snake game for the terminal
//!
//! This library provides:
//! - Core game logic (game module)
//! - Tick scheduling and the input/render boundary (controller module)
//! - Key mapping (input module) and ratatui drawing (render module)
//! - The interactive terminal session (modes module)

pub mod controller;
pub mod game;
pub mod input;
pub mod modes;
pub mod render;
