//! Monochrome pixel buffer.

/// 2D buffer of on/off pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u16,
    height: u16,
    pixels: Vec<bool>,
}

impl PixelBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![false; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Pixel at `(x, y)`; anything off the panel reads as unlit.
    pub fn get(&self, x: u16, y: u16) -> bool {
        self.idx(x, y).map(|i| self.pixels[i]).unwrap_or(false)
    }

    pub fn set(&mut self, x: u16, y: u16, on: bool) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = on;
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(false);
    }

    /// Light a rectangle, clipped to the panel.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32) {
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + w as i64).min(self.width as i64);
        let y1 = (y as i64 + h as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let stride = self.width as usize;
        for py in y0 as usize..y1 as usize {
            let start = py * stride;
            self.pixels[start + x0 as usize..start + x1 as usize].fill(true);
        }
    }

    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    /// Render as text, `#` for lit and `.` for unlit, one line per pixel row.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(if self.get(x, y) { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rect_sets_exact_area() {
        let mut fb = PixelBuffer::new(8, 4);
        fb.fill_rect(2, 1, 3, 2);

        assert_eq!(fb.lit_count(), 6);
        assert!(fb.get(2, 1));
        assert!(fb.get(4, 2));
        assert!(!fb.get(5, 1));
        assert!(!fb.get(2, 3));
    }

    #[test]
    fn fill_rect_clips_to_panel() {
        let mut fb = PixelBuffer::new(4, 4);
        fb.fill_rect(-2, -2, 4, 4);
        assert_eq!(fb.lit_count(), 4);

        fb.clear();
        fb.fill_rect(3, 3, 10, 10);
        assert_eq!(fb.lit_count(), 1);

        fb.clear();
        fb.fill_rect(10, 0, 2, 2);
        fb.fill_rect(0, 0, 0, 3);
        assert_eq!(fb.lit_count(), 0);
    }

    #[test]
    fn ascii_dump() {
        let mut fb = PixelBuffer::new(3, 2);
        fb.set(1, 0, true);
        fb.set(7, 7, true);
        assert_eq!(fb.to_ascii(), ".#.\n...\n");
    }
}
