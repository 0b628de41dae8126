//! Terminal rendering for the snake game.
//!
//! The game is drawn in two stages:
//! - [`GameView`] rasterizes a `GameState` into a bottom-up [`PixelBuffer`]
//!   using only filled rectangles and a 3x5 numeral font.
//! - [`FrameBuffer::blit_pixels`] folds pixel rows pairwise into half-block
//!   terminal cells, which [`TerminalRenderer`] flushes as a diff.
//!
//! Everything except `TerminalRenderer` is pure and unit-tested.

pub mod fb;
pub mod font;
pub mod game_view;
pub mod pacer;
pub mod pixels;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Area, Cell, FrameBuffer, Rgb, HALF_BLOCK};
pub use font::{draw_digit, draw_number, GlyphBox};
pub use game_view::{GameView, Layout, Palette, ScoreLayout, Viewport};
pub use pacer::FramePacer;
pub use pixels::PixelBuffer;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
