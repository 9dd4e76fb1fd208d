use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use grid_snake::game::{FoodPlacement, GameConfig};
use grid_snake::modes::HumanMode;
use log::info;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Fixed-tick grid snake game")]
struct Cli {
    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Milliseconds between game ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Where new food may appear
    #[arg(long, value_enum)]
    food_placement: Option<Placement>,
}

#[derive(Clone, ValueEnum)]
enum Placement {
    /// Any cell, even under the snake
    Anywhere,
    /// Only cells the snake does not cover
    AvoidSnake,
}

impl From<Placement> for FoodPlacement {
    fn from(placement: Placement) -> Self {
        match placement {
            Placement::Anywhere => FoodPlacement::Anywhere,
            Placement::AvoidSnake => FoodPlacement::AvoidSnake,
        }
    }
}

impl Cli {
    fn into_config(self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(placement) = self.food_placement {
            config.food_placement = placement.into();
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();

    let config = Cli::parse().into_config()?;
    info!(
        "starting {}x{} board, {}ms ticks, food placement {:?}",
        config.grid_size, config.grid_size, config.tick_interval_ms, config.food_placement
    );

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
