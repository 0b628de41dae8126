//! Pixel buffer and the two drawing primitives everything else is built from.
//!
//! Pixels are packed 32-bit `0xAARRGGBB` values. Rows are stored bottom-up:
//! row 0 is the bottom of the picture, matching the grid's `+y = up` convention.

/// A caller-owned buffer of packed 32-bit pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resize the buffer.
    ///
    /// This preserves the underlying allocation when possible. Contents are
    /// unspecified afterwards; callers clear before drawing.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels.resize(width as usize * height as usize, 0);
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[inline(always)]
    fn idx(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    /// Overwrite every pixel.
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Fill `[x, x+w) x [y, y+h)`, clipped to the buffer.
    ///
    /// Each edge is clamped independently, so negative origins and oversized
    /// extents are cut off rather than wrapped. Empty results draw nothing.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32) {
        let clamp_x = |v: i64| v.clamp(0, self.width as i64) as usize;
        let clamp_y = |v: i64| v.clamp(0, self.height as i64) as usize;

        let min_x = clamp_x(x as i64);
        let max_x = clamp_x(x as i64 + w as i64);
        let min_y = clamp_y(y as i64);
        let max_y = clamp_y(y as i64 + h as i64);
        if min_x >= max_x || min_y >= max_y {
            return;
        }

        let stride = self.width as usize;
        for row in self.pixels[min_y * stride..max_y * stride].chunks_exact_mut(stride) {
            row[min_x..max_x].fill(color);
        }
    }
}
