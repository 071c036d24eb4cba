mod config;
mod input;
mod offline;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tictactoe_common::config::ConfigManager;
use tictactoe_common::games::tictactoe::{Difficulty, StartingPlayer};
use tictactoe_common::{log, logger};

use config::{get_config_manager, get_config_path};
use offline::run_tictactoe_game;

#[derive(Parser)]
#[command(name = "tictactoe_client")]
#[command(about = "Play tic-tac-toe against the computer")]
struct Args {
    /// normal (random moves) or impossible (minimax)
    #[arg(long)]
    difficulty: Option<Difficulty>,
    /// Who moves first and plays x: human or computer
    #[arg(long)]
    first: Option<StartingPlayer>,
    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,
    /// Config file, defaults to one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write the effective options back to the config file
    #[arg(long)]
    save_config: bool,
    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(get_config_path);
    let config_manager = match &args.config {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => get_config_manager(),
    };
    let mut config = config_manager
        .get_config()
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let prefix = if args.use_log_prefix {
        Some(config.log_prefix.clone().unwrap_or_else(|| "Client".to_string()))
    } else {
        None
    };
    logger::init_logger(prefix);

    if let Some(difficulty) = args.difficulty {
        config.game.difficulty = difficulty;
    }
    if let Some(first) = args.first {
        config.game.starting_player = first;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let last_settings = run_tictactoe_game(stdin.lock(), &mut stdout.lock(), config.game, config.seed)
        .context("Terminal I/O failed")?;

    if args.save_config {
        config.game = last_settings;
        config_manager
            .set_config(&config)
            .with_context(|| format!("Failed to save config to {}", config_path.display()))?;
        log!("Saved config to {}", config_path.display());
    }

    Ok(())
}
