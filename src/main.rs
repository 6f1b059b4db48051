use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::GameConfig;
use grid_snake::modes::HumanMode;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a grid, in your terminal")]
struct Cli {
    /// JSON file holding a game configuration; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Board width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Number of apples on the board
    #[arg(long)]
    apples: Option<usize>,

    /// Milliseconds per game tick
    #[arg(long, default_value = "100", value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    /// Seed for snake and apple placement
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the log; the terminal belongs to the game
    #[arg(long, default_value = "grid_snake.log")]
    log_file: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };
        if let Some(height) = self.height {
            config.board_height = height;
        }
        if let Some(width) = self.width {
            config.board_width = width;
        }
        if let Some(apples) = self.apples {
            config.n_apples = apples;
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    WriteLogger::init(
        cli.log_level,
        Config::default(),
        File::create(&cli.log_file)
            .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?,
    )
    .context("Failed to initialize logger")?;

    let config = cli.game_config()?;
    info!(
        "starting on a {}x{} board with {} apple(s)",
        config.board_height, config.board_width, config.n_apples
    );

    let mut human_mode = HumanMode::new(config, Duration::from_millis(cli.tick_ms), cli.seed)?;
    human_mode.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_ms_defaults_to_100() {
        let cli = Cli::try_parse_from(["grid_snake"]).unwrap();
        assert_eq!(cli.tick_ms, 100);
    }

    #[test]
    fn test_rejects_zero_tick_ms() {
        assert!(Cli::try_parse_from(["grid_snake", "--tick-ms", "0"]).is_err());
        assert!(Cli::try_parse_from(["grid_snake", "--tick-ms", "1"]).is_ok());
    }

    #[test]
    fn test_flags_override_board_size() {
        let cli = Cli::try_parse_from(["grid_snake", "--height", "12", "--apples", "2"]).unwrap();
        let config = cli.game_config().unwrap();
        assert_eq!(config.board_height, 12);
        assert_eq!(config.board_width, 30);
        assert_eq!(config.n_apples, 2);
    }
}
