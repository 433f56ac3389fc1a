use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clap::Parser;
use classic_snake::game::{Game, GameSettings};
use classic_snake::input::InputHandler;
use classic_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use classic_snake::ui::{Presentation, handle_input};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Longest time a single input poll may block.
const INPUT_POLL_WAIT: Duration = Duration::from_millis(10);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for fruit placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal itself is taken by the game).
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    install_panic_hook();
    run(&cli)
}

fn run(cli: &Cli) -> io::Result<()> {
    let settings = GameSettings::default();
    let mut game = match cli.seed {
        Some(seed) => Game::new_with_seed(settings, seed),
        None => Game::new(settings),
    };
    let mut view = Presentation::new();
    let mut input = InputHandler::new(INPUT_POLL_WAIT);
    let mut session = TerminalSession::enter()?;

    info!(seed = ?cli.seed, "snake started");

    loop {
        if view.take_redraw() {
            session.draw(&game, &view)?;
        }

        if let Some(intent) = input.poll_input()? {
            if !handle_input(&mut game, &mut view, intent, Instant::now()) {
                break;
            }
        }

        game.update(Instant::now(), &mut view);
    }

    info!("snake exited");
    Ok(())
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}
