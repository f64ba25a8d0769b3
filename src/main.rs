mod ui;

use clap::Parser;
use scramble::{
    config::{Config, ConfigStore, FileConfigStore, StoreKind},
    runtime::{LineCommandSource, Runner, StepResult},
    Game, RandomSwaps, DEFAULT_DICTIONARY,
};
use std::{
    error::Error,
    io::{self, Write},
    path::PathBuf,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// unscramble the word before you run out of strikes
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Guess the word behind each scramble. Three wrong guesses end the game, three passes let you skip hard words, and an unfinished game is picked up where you left it."
)]
pub struct Cli {
    /// where to keep the unfinished game
    #[clap(long, value_enum)]
    store: Option<StoreKind>,

    /// directory holding the saved game
    #[clap(long)]
    state_dir: Option<PathBuf>,

    /// config file to read instead of the default location
    #[clap(long)]
    config: Option<PathBuf>,

    /// seed for reproducible shuffles
    #[clap(long)]
    seed: Option<u64>,

    /// discard any saved game and start a new one
    #[clap(long)]
    fresh: bool,

    /// tracing filter directive, overridden by RUST_LOG
    #[clap(long)]
    log_filter: Option<String>,
}

impl Cli {
    /// Layers CLI flags over the config file
    fn apply(&self, mut cfg: Config) -> Config {
        if let Some(store) = self.store {
            cfg.store = store;
        }
        if let Some(dir) = &self.state_dir {
            cfg.state_dir = Some(dir.clone());
        }
        if let Some(filter) = &self.log_filter {
            cfg.log_filter = filter.clone();
        }
        cfg
    }

    fn load_config(&self) -> Config {
        let file_cfg = match &self.config {
            Some(path) => FileConfigStore::with_path(path).load(),
            None => FileConfigStore::new().load(),
        };
        self.apply(file_cfg)
    }
}

fn init_tracing(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let cfg = cli.load_config();
    init_tracing(&cfg.log_filter);

    let store = cfg.open_store()?;
    if cli.fresh {
        store.clear()?;
    }
    info!(store = %cfg.store, dir = %cfg.state_dir().display(), "opened store");

    let swaps = match cli.seed {
        Some(seed) => RandomSwaps::seeded(seed),
        None => RandomSwaps::from_entropy(),
    };
    let mut game = Game::load(store, swaps, DEFAULT_DICTIONARY)?;

    let stdin = io::stdin();
    let mut runner = Runner::new(LineCommandSource::new(stdin.lock()));
    let mut out = io::stdout().lock();

    writeln!(out, "{}", ui::HELP)?;
    ui::render(&mut out, game.session())?;

    loop {
        match runner.step(&mut game)? {
            StepResult::Quit | StepResult::Exhausted => break,
            StepResult::Moved(None) => {
                writeln!(out, "{}", ui::ignored_hint(game.session()))?;
                ui::render(&mut out, game.session())?;
            }
            StepResult::Moved(Some(_)) | StepResult::Restarted => {
                ui::render(&mut out, game.session())?;
            }
        }
    }

    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_config() {
        let cli = Cli::parse_from([
            "scramble",
            "--store",
            "sqlite",
            "--state-dir",
            "/tmp/scramble-test",
            "--log-filter",
            "debug",
        ]);
        let cfg = cli.apply(Config::default());
        assert_eq!(cfg.store, StoreKind::Sqlite);
        assert_eq!(cfg.state_dir, Some(PathBuf::from("/tmp/scramble-test")));
        assert_eq!(cfg.log_filter, "debug");
    }

    #[test]
    fn config_kept_without_flags() {
        let cli = Cli::parse_from(["scramble"]);
        let base = Config {
            store: StoreKind::Sqlite,
            ..Config::default()
        };
        assert_eq!(cli.apply(base.clone()), base);
    }
}
