use std::{fs, path::Path, time::Duration};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use super::{
    action::Direction,
    state::{Position, Snake},
};

/// Side length of the square board, in cells
pub const GRID_SIZE: usize = 15;
/// Largest board the terminal renderer can lay out
pub const MAX_GRID_SIZE: usize = 255;
/// Milliseconds between two game ticks
pub const TICK_INTERVAL_MS: u64 = 200;

/// How a new food position is chosen after the snake eats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FoodPlacement {
    /// Uniform over the whole grid, even cells under the snake
    #[default]
    Anywhere,
    /// Uniform over the cells not covered by the snake
    AvoidSnake,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width and height of the game grid
    pub grid_size: usize,
    /// Milliseconds between ticks
    pub tick_interval_ms: u64,
    /// Starting snake, head first
    pub initial_snake: Vec<Position>,
    /// Starting food position
    pub initial_food: Position,
    /// Starting direction of movement
    pub initial_direction: Direction,
    pub food_placement: FoodPlacement,
    /// Seed for food placement; entropy when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            tick_interval_ms: TICK_INTERVAL_MS,
            initial_snake: Snake::new(Position::new(7, 7), Direction::Right, 3).body,
            initial_food: Position::new(11, 11),
            initial_direction: Direction::Right,
            food_placement: FoodPlacement::Anywhere,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Check that the initial layout fits on the board
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            bail!("grid size must be at least 1");
        }
        if self.grid_size > MAX_GRID_SIZE {
            bail!(
                "grid size {} exceeds the maximum of {}",
                self.grid_size,
                MAX_GRID_SIZE
            );
        }
        if self.tick_interval_ms == 0 {
            bail!("tick interval must be at least 1 ms");
        }
        if self.initial_snake.is_empty() {
            bail!("initial snake must have at least one segment");
        }

        let in_bounds = |pos: &Position| {
            pos.x >= 0
                && pos.y >= 0
                && (pos.x as usize) < self.grid_size
                && (pos.y as usize) < self.grid_size
        };

        for (i, segment) in self.initial_snake.iter().enumerate() {
            if !in_bounds(segment) {
                bail!(
                    "initial snake segment ({}, {}) is outside the {}x{} grid",
                    segment.x,
                    segment.y,
                    self.grid_size,
                    self.grid_size
                );
            }
            if self.initial_snake[..i].contains(segment) {
                bail!(
                    "initial snake overlaps itself at ({}, {})",
                    segment.x,
                    segment.y
                );
            }
        }

        if !in_bounds(&self.initial_food) {
            bail!(
                "initial food ({}, {}) is outside the {}x{} grid",
                self.initial_food.x,
                self.initial_food.y,
                self.grid_size,
                self.grid_size
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 15);
        assert_eq!(config.tick_interval(), Duration::from_millis(200));
        assert_eq!(config.initial_snake.len(), 3);
        assert_eq!(
            config.initial_snake,
            vec![Position::new(7, 7), Position::new(6, 7), Position::new(5, 7)]
        );
        assert_eq!(config.initial_food, Position::new(11, 11));
        assert_eq!(config.initial_direction, Direction::Right);
        assert_eq!(config.food_placement, FoodPlacement::Anywhere);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "tick_interval_ms": 120, "food_placement": "avoid-snake" }"#)
                .unwrap();
        assert_eq!(config.tick_interval_ms, 120);
        assert_eq!(config.food_placement, FoodPlacement::AvoidSnake);
        assert_eq!(config.grid_size, GRID_SIZE);
        assert_eq!(config.initial_food, Position::new(11, 11));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("grid_snake_config_{}.json", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, r#"{{ "seed": 42, "initial_direction": "up" }}"#).unwrap();
        drop(file);

        let config = GameConfig::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.initial_direction, Direction::Up);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = GameConfig::from_file(Path::new("/nonexistent/grid_snake.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_out_of_bounds_layout() {
        let config = GameConfig {
            grid_size: 8,
            ..Default::default()
        };
        // food at (11, 11) no longer fits
        assert!(config.validate().is_err());

        let config = GameConfig {
            initial_snake: vec![Position::new(0, 0), Position::new(-1, 0)],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let config = GameConfig {
            grid_size: 40_000,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let largest = GameConfig {
            grid_size: MAX_GRID_SIZE,
            ..Default::default()
        };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn test_rejects_degenerate_config() {
        let empty_snake = GameConfig {
            initial_snake: Vec::new(),
            ..Default::default()
        };
        assert!(empty_snake.validate().is_err());

        let overlapping = GameConfig {
            initial_snake: vec![Position::new(3, 3), Position::new(3, 3)],
            ..Default::default()
        };
        assert!(overlapping.validate().is_err());

        let no_interval = GameConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert!(no_interval.validate().is_err());
    }
}
