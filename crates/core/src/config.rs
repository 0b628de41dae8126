//! Session configuration.
//!
//! Invalid values are clamped rather than rejected: a cadence of zero becomes 1,
//! grid sides are held to `[MIN_GRID_SIDE, MAX_GRID_SIDE]`.

use crate::types::{
    DEFAULT_FRAMES_PER_TICK, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, MAX_GRID_SIDE,
    MIN_FRAMES_PER_TICK, MIN_GRID_SIDE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    /// Cadence restored on every reset
    pub frames_per_tick: u32,
    /// Initial wrap setting (the toggle survives resets)
    pub screen_wrap: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            frames_per_tick: DEFAULT_FRAMES_PER_TICK,
            screen_wrap: false,
        }
    }
}

impl GameConfig {
    pub fn new(grid_width: u16, grid_height: u16, frames_per_tick: u32, screen_wrap: bool) -> Self {
        Self {
            grid_width,
            grid_height,
            frames_per_tick,
            screen_wrap,
        }
        .clamped()
    }

    /// Copy with every field forced into its valid range
    pub fn clamped(self) -> Self {
        Self {
            grid_width: self.grid_width.clamp(MIN_GRID_SIDE, MAX_GRID_SIDE),
            grid_height: self.grid_height.clamp(MIN_GRID_SIDE, MAX_GRID_SIDE),
            frames_per_tick: self.frames_per_tick.max(MIN_FRAMES_PER_TICK),
            screen_wrap: self.screen_wrap,
        }
    }
}
