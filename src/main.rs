//! Terminal runner (default binary).
//!
//! Hosts the driver loop on crossterm's event poll: wait for input until the
//! next tick is due, forward key presses, then let the driver decide whether
//! gravity runs. Configuration comes from `FERRIS_BLOCKS_*` environment
//! variables; logs go to `FERRIS_BLOCKS_LOG_PATH` when set, else stderr.

mod screen;

use std::fs::File;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ferris_blocks::core::GameSnapshot;
use ferris_blocks::driver::{Driver, DriverConfig, LoopControl};
use ferris_blocks::input::{handle_key_event, should_quit};

use screen::Screen;

fn main() -> Result<()> {
    init_tracing()?;

    let config = DriverConfig::from_env();
    info!(
        width = config.game.width,
        height = config.game.height,
        seed = config.game.seed,
        tick_ms = config.tick_interval.as_millis() as u64,
        "starting"
    );
    let mut driver = Driver::new(config).context("invalid game configuration")?;

    let mut screen = Screen::new();
    screen.enter().context("failed to set up the terminal")?;

    let result = run(&mut screen, &mut driver);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result?;

    let game = driver.game();
    println!(
        "score {}  lines {}  level {}",
        game.score(),
        game.lines(),
        game.level()
    );
    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false);

    match std::env::var("FERRIS_BLOCKS_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    {
        Some(path) => {
            let file =
                File::create(&path).with_context(|| format!("failed to open log file {path}"))?;
            builder.with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn run(screen: &mut Screen, driver: &mut Driver) -> Result<()> {
    let mut snapshot = GameSnapshot::default();
    driver.start(Instant::now());

    loop {
        // Render.
        driver.game().snapshot_into(&mut snapshot);
        screen.draw(&snapshot)?;

        // Input with timeout until next tick.
        let timeout = driver.time_until_tick(Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    driver.apply(action, Instant::now());
                }
            }
        }

        // Tick.
        if driver.frame(Instant::now()) == LoopControl::Stop {
            driver.game().snapshot_into(&mut snapshot);
            screen.draw(&snapshot)?;
            return Ok(());
        }
    }
}
