//! Rasterizer and presentation tests.

use tui_snake::core::{FailingEntropy, GameConfig, GameState, SimpleRng};
use tui_snake::term::font::{draw_number, GlyphBox};
use tui_snake::term::{Cell, FrameBuffer, GameView, PixelBuffer, Rgb, Viewport};
use tui_snake::types::{colors, GameAction};

fn placed_state() -> GameState {
    let mut gs = GameState::new(GameConfig::default());
    let fruit = gs.grid().index(2, 3);
    assert!(gs.place_fruit_at(fruit));
    gs
}

#[test]
fn test_tiles_land_on_their_grid_cells() {
    let gs = placed_state();
    let buf = GameView::default().render(&gs, Viewport::new(150, 150), &mut FailingEntropy);

    // Tile side 10, no margins.
    assert_eq!(buf.get(75, 75), Some(colors::SNAKE));
    assert_eq!(buf.get(70, 70), Some(colors::SNAKE));
    assert_eq!(buf.get(80, 75), Some(colors::PLAYFIELD));
    assert_eq!(buf.get(25, 35), Some(colors::FRUIT));
    assert_eq!(buf.get(0, 0), Some(colors::PLAYFIELD));
}

#[test]
fn test_playfield_is_centered_in_wide_buffers() {
    let gs = placed_state();
    let buf = GameView::default().render(&gs, Viewport::new(300, 150), &mut FailingEntropy);

    assert_eq!(buf.get(10, 10), Some(colors::BACKDROP));
    assert_eq!(buf.get(74, 10), Some(colors::BACKDROP));
    assert_eq!(buf.get(75, 10), Some(colors::PLAYFIELD));
    assert_eq!(buf.get(225, 10), Some(colors::BACKDROP));
    // Snake tile (7, 7) shifted by the 75px margin.
    assert_eq!(buf.get(150, 75), Some(colors::SNAKE));
}

#[test]
fn test_score_is_drawn_inside_the_top_right_margin() {
    let gs = placed_state();
    let buf = GameView::default().render(&gs, Viewport::new(150, 150), &mut FailingEntropy);

    // Scale 1: glyphs 3x5 with 1px padding; first digit at x = 150 - 24 + 1 - 5.
    // The top stroke of "0" sits on the row just below the baseline (145).
    for x in 122..125 {
        assert_eq!(buf.get(x, 144), Some(colors::SCORE), "x={x}");
    }
    // Last digit ends 5px (one glyph height) short of the right edge.
    assert_eq!(buf.get(144, 144), Some(colors::SCORE));
    assert_eq!(buf.get(145, 144), Some(colors::PLAYFIELD));
}

#[test]
fn test_score_overflow_drops_leading_digits() {
    let glyph = GlyphBox {
        width: 3,
        height: 5,
        padding: 1,
    };
    let mut wrapped = PixelBuffer::new(24, 5);
    let mut small = PixelBuffer::new(24, 5);
    draw_number(&mut wrapped, 999_999 + 10, 6, 0, 5, glyph, colors::SCORE);
    draw_number(&mut small, 9, 6, 0, 5, glyph, colors::SCORE);
    assert_eq!(wrapped, small);
}

#[test]
fn test_lsd_mode_recolors_playfield_and_snake() {
    let mut gs = placed_state();
    gs.apply_action(GameAction::ToggleLsd);

    let buf = GameView::default().render(&gs, Viewport::new(150, 150), &mut SimpleRng::new(5));
    let playfield = buf.get(0, 0).unwrap();
    let snake = buf.get(75, 75).unwrap();
    assert_ne!(playfield, colors::PLAYFIELD);
    assert_eq!(playfield >> 24, 0xFF);
    assert_eq!(snake >> 24, 0xFF);
    assert_eq!(buf.get(25, 35), Some(colors::FRUIT));
}

#[test]
fn test_lsd_mode_keeps_palette_when_entropy_fails() {
    let mut gs = placed_state();
    gs.apply_action(GameAction::ToggleLsd);

    let buf = GameView::default().render(&gs, Viewport::new(150, 150), &mut FailingEntropy);
    assert_eq!(buf.get(0, 0), Some(colors::PLAYFIELD));
    assert_eq!(buf.get(75, 75), Some(colors::SNAKE));
}

#[test]
fn test_degenerate_viewports_do_not_panic() {
    let gs = placed_state();
    let view = GameView::default();
    for (w, h) in [(0, 0), (1, 1), (3, 200), (200, 3), (14, 14)] {
        let buf = view.render(&gs, Viewport::new(w, h), &mut FailingEntropy);
        assert_eq!(buf.pixels().len(), (w * h) as usize);
    }
}

#[test]
fn test_half_block_presentation_of_a_snake_tile() {
    let gs = placed_state();
    // Tile side 2: the snake covers pixels x 14..16, y 14..16 (bottom-up).
    let buf = GameView::default().render(&gs, Viewport::new(30, 30), &mut FailingEntropy);

    let mut fb = FrameBuffer::new(30, 15);
    fb.blit_pixels(&buf, 0, 0);

    let snake = Rgb::from_packed(colors::SNAKE);
    assert_eq!(fb.get(14, 7), Some(Cell::solid(snake)));
    assert_eq!(fb.get(15, 7), Some(Cell::solid(snake)));
    assert_ne!(fb.get(14, 6), Some(Cell::solid(snake)));
    assert_ne!(fb.get(14, 8), Some(Cell::solid(snake)));
}
