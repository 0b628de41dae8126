//! GameView: maps `core::GameState` into a pixel buffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{EntropySource, GameState};
use crate::font::{self, GlyphBox, DIGIT_COLS, DIGIT_ROWS};
use crate::pixels::PixelBuffer;
use crate::types::{colors, Tile, SCORE_DIGITS};

/// Output buffers narrower than this draw the score at 1px per font cell.
const SCORE_SCALE_DIVISOR: u32 = 400;

/// Output surface dimensions (in pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Where the logical grid lands inside a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Side of one tile in pixels
    pub tile: i32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub playfield_w: i32,
    pub playfield_h: i32,
}

impl Layout {
    /// Fit a `grid_w x grid_h` grid into a `buf_w x buf_h` buffer.
    ///
    /// The tile size follows the buffer height, or the width when the grid is
    /// wider than tall, floor-rounded. Leftover pixels go into the centering
    /// margins, which may be negative when the other axis does not fit.
    pub fn fit(grid_w: u16, grid_h: u16, buf_w: u32, buf_h: u32) -> Self {
        let tile = if grid_w > grid_h {
            buf_w / grid_w.max(1) as u32
        } else {
            buf_h / grid_h.max(1) as u32
        } as i32;

        let playfield_w = tile * grid_w as i32;
        let playfield_h = tile * grid_h as i32;

        Self {
            tile,
            offset_x: (buf_w as i32 - playfield_w) / 2,
            offset_y: (buf_h as i32 - playfield_h) / 2,
            playfield_w,
            playfield_h,
        }
    }

    /// Bottom-left pixel of a grid cell
    pub fn tile_origin(&self, x: u16, y: u16) -> (i32, i32) {
        (
            self.offset_x + x as i32 * self.tile,
            self.offset_y + y as i32 * self.tile,
        )
    }
}

/// Placement of the fixed-width score readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreLayout {
    pub glyph: GlyphBox,
    /// Left edge of the first digit
    pub x: i32,
    pub baseline: i32,
}

impl ScoreLayout {
    /// Right-align `SCORE_DIGITS` glyphs against the playfield's top-right
    /// corner, inset by one glyph height.
    pub fn anchor(layout: &Layout, buf_w: u32, buf_h: u32) -> Self {
        let scale = (buf_w / SCORE_SCALE_DIVISOR).max(1) as i32;
        let width = scale * DIGIT_COLS;
        let height = scale * DIGIT_ROWS;
        let padding = (width / 4).max(1);
        let margin = height;

        let x = buf_w as i32 - layout.offset_x - SCORE_DIGITS as i32 * (width + padding) + padding;
        let top = buf_h as i32 - layout.offset_y;

        Self {
            glyph: GlyphBox {
                width,
                height,
                padding,
            },
            x: x - margin,
            baseline: top - margin,
        }
    }
}

/// Packed colors for each layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub backdrop: u32,
    pub playfield: u32,
    pub snake: u32,
    pub fruit: u32,
    pub score: u32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            backdrop: colors::BACKDROP,
            playfield: colors::PLAYFIELD,
            snake: colors::SNAKE,
            fruit: colors::FRUIT,
            score: colors::SCORE,
        }
    }
}

/// Immediate-mode renderer for the snake game.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    palette: Palette,
}

impl GameView {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Render the current game state into an existing buffer.
    ///
    /// Callers can reuse a buffer across frames and only resize when the
    /// output size changes. `entropy` is only read in the cosmetic mode, where
    /// the playfield and every snake tile get a random color; a failed read
    /// keeps the palette color.
    pub fn render_into<E: EntropySource + ?Sized>(
        &self,
        state: &GameState,
        viewport: Viewport,
        buf: &mut PixelBuffer,
        entropy: &mut E,
    ) {
        buf.resize(viewport.width, viewport.height);
        buf.clear(self.palette.backdrop);

        let grid = state.grid();
        let layout = Layout::fit(grid.width(), grid.height(), viewport.width, viewport.height);
        let lsd = state.lsd_mode();

        let playfield = if lsd {
            random_color(entropy, self.palette.playfield)
        } else {
            self.palette.playfield
        };
        buf.fill_rect(
            layout.offset_x,
            layout.offset_y,
            layout.playfield_w,
            layout.playfield_h,
            playfield,
        );

        for (index, tile) in grid.occupied() {
            let color = match tile {
                Tile::Snake if lsd => random_color(entropy, self.palette.snake),
                Tile::Snake => self.palette.snake,
                _ => self.palette.fruit,
            };
            let (x, y) = grid.coords(index);
            let (px, py) = layout.tile_origin(x, y);
            buf.fill_rect(px, py, layout.tile, layout.tile, color);
        }

        let score = ScoreLayout::anchor(&layout, viewport.width, viewport.height);
        font::draw_number(
            buf,
            state.score(),
            SCORE_DIGITS,
            score.x,
            score.baseline,
            score.glyph,
            self.palette.score,
        );
    }

    /// Convenience helper that allocates a new buffer.
    pub fn render<E: EntropySource + ?Sized>(
        &self,
        state: &GameState,
        viewport: Viewport,
        entropy: &mut E,
    ) -> PixelBuffer {
        let mut buf = PixelBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut buf, entropy);
        buf
    }
}

fn random_color<E: EntropySource + ?Sized>(entropy: &mut E, fallback: u32) -> u32 {
    entropy
        .next_u32()
        .map(|c| c | 0xFF00_0000)
        .unwrap_or(fallback)
}
