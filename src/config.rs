//! Host configuration read from the environment.

use std::path::PathBuf;

use crate::core::GameConfig;
use crate::types::{DEFAULT_FRAMES_PER_TICK, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, FRAME_MS};

/// Everything the terminal host needs to start a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub game: GameConfig,
    /// Minimum duration of one frame-loop iteration
    pub frame_ms: u64,
    /// Seed for the reproducible generator; `None` uses OS entropy.
    pub seed: Option<u32>,
    /// Log file; logging is off when unset.
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            frame_ms: FRAME_MS as u64,
            seed: None,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Create from `SNAKE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: std::str::FromStr>(raw: Option<String>) -> Option<T> {
            raw.and_then(|s| s.trim().parse().ok())
        }

        let grid_width = parsed(lookup("SNAKE_GRID_WIDTH")).unwrap_or(DEFAULT_GRID_WIDTH);
        let grid_height = parsed(lookup("SNAKE_GRID_HEIGHT")).unwrap_or(DEFAULT_GRID_HEIGHT);
        let frames_per_tick =
            parsed(lookup("SNAKE_FRAMES_PER_TICK")).unwrap_or(DEFAULT_FRAMES_PER_TICK);
        let screen_wrap = lookup("SNAKE_WRAP")
            .map(|v| is_truthy(&v))
            .unwrap_or(false);
        let frame_ms = parsed::<u64>(lookup("SNAKE_FRAME_MS"))
            .unwrap_or(FRAME_MS as u64)
            .max(1);
        let seed = parsed(lookup("SNAKE_SEED"));
        let log_path = lookup("SNAKE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            game: GameConfig::new(grid_width, grid_height, frames_per_tick, screen_wrap),
            frame_ms,
            seed,
            log_path,
        }
    }
}

fn is_truthy(v: &str) -> bool {
    let v = v.trim();
    v == "1" || v.eq_ignore_ascii_case("true")
}
