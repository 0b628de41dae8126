//! Terminal cell framebuffer: the presentation surface for a [`PixelBuffer`].
//!
//! Every terminal cell shows two vertically stacked pixels using the upper
//! half-block glyph (`▀`): the foreground paints the upper pixel, the
//! background the lower one.

use crate::pixels::PixelBuffer;

/// The glyph every cell is drawn with.
pub const HALF_BLOCK: char = '▀';

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a `0xAARRGGBB` pixel; alpha is ignored.
    pub const fn from_packed(argb: u32) -> Self {
        Self {
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }
}

/// A single terminal cell: two pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub upper: Rgb,
    pub lower: Rgb,
}

impl Cell {
    pub const fn solid(color: Rgb) -> Self {
        Self {
            upper: color,
            lower: color,
        }
    }
}

/// The cell rectangle the game is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Area {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Area {
    /// Whole terminal in fullscreen, otherwise a centered window at 3/4 size.
    pub fn window(cols: u16, rows: u16, fullscreen: bool) -> Self {
        if fullscreen {
            return Self {
                x: 0,
                y: 0,
                width: cols,
                height: rows,
            };
        }
        let width = (cols as u32 * 3 / 4) as u16;
        let height = (rows as u32 * 3 / 4) as u16;
        Self {
            x: (cols - width) / 2,
            y: (rows - height) / 2,
            width,
            height,
        }
    }

    /// Pixel size of the area: two pixel rows per cell.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32 * 2)
    }
}

/// 2D framebuffer of half-block cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Copy a bottom-up pixel buffer onto the cells, top-left corner at `(x, y)`.
    ///
    /// Terminal row `r` of the blit shows picture rows `2r` and `2r + 1`
    /// counted from the top. An odd final row leaves its lower pixel as it was.
    /// Cells falling outside the framebuffer are skipped.
    pub fn blit_pixels(&mut self, pixels: &PixelBuffer, x: u16, y: u16) {
        let pw = pixels.width();
        let ph = pixels.height();
        let rows = ph.div_ceil(2);

        for row in 0..rows {
            let Ok(ty) = u16::try_from(y as u32 + row) else {
                break;
            };
            if ty >= self.height {
                break;
            }
            let upper_y = ph - 1 - 2 * row;
            let lower_y = upper_y.checked_sub(1);

            for col in 0..pw {
                let Ok(tx) = u16::try_from(x as u32 + col) else {
                    break;
                };
                let Some(i) = self.idx(tx, ty) else {
                    break;
                };
                if let Some(p) = pixels.get(col, upper_y) {
                    self.cells[i].upper = Rgb::from_packed(p);
                }
                if let Some(p) = lower_y.and_then(|ly| pixels.get(col, ly)) {
                    self.cells[i].lower = Rgb::from_packed(p);
                }
            }
        }
    }
}
