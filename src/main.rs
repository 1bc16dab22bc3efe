//! Terminal memory-match runner (default binary).
//!
//! Renders the card table with the framebuffer renderer and reads mouse
//! clicks through crossterm's mouse capture. The loop renders, waits for
//! input until the next fixed tick, then advances the reveal timer.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use memory_match::core::{ClickOutcome, GameSnapshot, GameState};
use memory_match::input::{handle_key_event, primary_press, should_quit};
use memory_match::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use memory_match::types::{GameAction, TICK_MS};

/// Match six pairs of cards by clicking them two at a time.
#[derive(Debug, Parser)]
#[command(name = "memory-match", version)]
struct Args {
    /// Seed for the card shuffle (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// File that receives log output (filter with RUST_LOG)
    #[arg(long, default_value = "memory-match.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_file)?;

    let seed = args.seed.unwrap_or_else(time_seed);
    info!(seed, "starting memory-match");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("session ended");
    result
}

/// Log to a file so output never lands on the alternate screen.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, seed: u64) -> Result<()> {
    let mut game = GameState::new(seed);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        game.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(pos) = primary_press(mouse) {
                        let point = view.table_point(viewport, pos.column, pos.row);
                        let outcome = game.apply_action(GameAction::Click(point));
                        if outcome != ClickOutcome::Ignored {
                            debug!(?outcome, x = point.x, y = point.y, "click");
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }
    }
}
