//! 3x5 block numerals.
//!
//! Each digit is a 15-bit mask over a 3-column by 5-row grid: bit
//! `dx + dy * 3` set means the cell at column `dx`, row `dy` is drawn.
//! Mask row 0 is the top stroke of the glyph.

use crate::pixels::PixelBuffer;

pub const DIGIT_COLS: i32 = 3;
pub const DIGIT_ROWS: i32 = 5;

pub const DIGIT_MASKS: [u16; 10] = [
    0x7B6F, 0x4924, 0x73E7, 0x79E7, 0x49ED, 0x79CF, 0x7BC9, 0x4927, 0x7BEF, 0x49EF,
];

/// Draw one digit into a `width x height` box.
///
/// Each set cell becomes a `width/3 x height/5` rectangle. Row `dy` is placed
/// at `baseline - (dy + 1) * cell_h`: mask row 0 lies directly against the
/// baseline and later rows stack away from it. In the bottom-up buffer that
/// puts the glyph right side up on screen with `baseline` as its upper edge.
/// Values outside 0-9 draw nothing.
pub fn draw_digit(
    buf: &mut PixelBuffer,
    digit: u32,
    x: i32,
    baseline: i32,
    width: i32,
    height: i32,
    color: u32,
) {
    let Some(&mask) = DIGIT_MASKS.get(digit as usize) else {
        return;
    };
    let cell_w = width / DIGIT_COLS;
    let cell_h = height / DIGIT_ROWS;

    for dy in 0..DIGIT_ROWS {
        for dx in 0..DIGIT_COLS {
            if mask & (1 << (dx + dy * DIGIT_COLS)) == 0 {
                continue;
            }
            buf.fill_rect(
                x + dx * cell_w,
                baseline - dy * cell_h - cell_h,
                cell_w,
                cell_h,
                color,
            );
        }
    }
}

/// The digit shown at `place` (0 = leftmost) when `value` is rendered with a
/// fixed number of `digits`.
///
/// Leading positions show 0; a value wider than `digits` loses its leading
/// digits (`1_000_009` at six digits shows `000009`).
pub fn digit_at(value: u32, place: u32, digits: u32) -> u32 {
    let power = 10u64.saturating_pow(digits.saturating_sub(place + 1));
    ((value as u64 / power) % 10) as u32
}

/// Fixed-width glyph geometry for [`draw_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphBox {
    pub width: i32,
    pub height: i32,
    /// Gap between neighbouring glyphs
    pub padding: i32,
}

/// Draw `value` as exactly `digits` glyphs, left to right from `x`.
pub fn draw_number(
    buf: &mut PixelBuffer,
    value: u32,
    digits: u32,
    x: i32,
    baseline: i32,
    glyph: GlyphBox,
    color: u32,
) {
    let mut cx = x;
    for place in 0..digits {
        draw_digit(
            buf,
            digit_at(value, place, digits),
            cx,
            baseline,
            glyph.width,
            glyph.height,
            color,
        );
        cx += glyph.width + glyph.padding;
    }
}
