//! Terminal snake runner (default binary).
//!
//! Drives the fixed-timestep frame loop: drain key presses, run the simulation
//! half of the frame, rasterize into a pixel buffer, present it as half blocks
//! and sleep out the rest of the frame.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tui_snake::core::{EntropySource, FrameDriver, GameState, OsEntropy, SimpleRng};
use tui_snake::input::InputQueue;
use tui_snake::term::{
    Area, Cell, FrameBuffer, FramePacer, GameView, PixelBuffer, Rgb, TerminalRenderer, Viewport,
};
use tui_snake::AppConfig;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    if let Some(path) = config.log_path.as_deref() {
        init_tracing(path)?;
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = match config.seed {
        Some(seed) => run(&mut term, &config, SimpleRng::new(seed)),
        None => run(&mut term, &config, OsEntropy),
    };

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file; the terminal is in raw mode and owned by the renderer.
fn init_tracing(path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_env("SNAKE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

fn run<E: EntropySource>(term: &mut TerminalRenderer, config: &AppConfig, entropy: E) -> Result<()> {
    let mut driver = FrameDriver::new(GameState::new(config.game), entropy);
    let view = GameView::default();
    let pacer = FramePacer::new(config.frame_ms);
    let backdrop = Cell::solid(Rgb::from_packed(view.palette().backdrop));

    let mut input = InputQueue::new();
    let mut pixels = PixelBuffer::new(0, 0);
    let mut fb = FrameBuffer::new(0, 0);
    let mut fullscreen = driver.fullscreen();

    info!(
        grid_width = config.game.grid_width,
        grid_height = config.game.grid_height,
        frames_per_tick = config.game.frames_per_tick,
        seeded = config.seed.is_some(),
        "starting session"
    );

    while driver.is_running() {
        let started = Instant::now();

        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    input.push_key(key);
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }
        if input.dropped() > 0 {
            debug!(dropped = input.dropped(), "input queue overflow");
        }

        driver.run_frame(input.drain());
        if !driver.is_running() {
            break;
        }

        if driver.fullscreen() != fullscreen {
            fullscreen = driver.fullscreen();
            term.invalidate();
        }

        let (cols, rows) = terminal::size().unwrap_or((80, 24));
        let area = Area::window(cols, rows, fullscreen);
        let (width, height) = area.pixel_size();

        let (state, entropy) = driver.parts_mut();
        view.render_into(state, Viewport::new(width, height), &mut pixels, entropy);

        fb.resize(cols, rows);
        fb.clear(backdrop);
        fb.blit_pixels(&pixels, area.x, area.y);
        term.draw_swap(&mut fb)?;

        if let Some(pause) = pacer.sleep_for(started.elapsed()) {
            thread::sleep(pause);
        }
    }

    info!(score = driver.state().score(), "quit");
    Ok(())
}
