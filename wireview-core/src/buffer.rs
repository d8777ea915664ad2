/// CPU-side RGB float pixel buffer
use serde::Deserialize;

/// Linear RGB color with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Quantize to 8-bit channels, clamping out-of-range components
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

/// Flat width x height x 3 float buffer indexed by (x + y * width) * 3 + channel
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<f32>,
    writes: usize,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height * 3],
            writes: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Write one pixel; coordinates outside the buffer are dropped
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (x as usize + y as usize * self.width) * 3;
        self.data[idx] = color.r;
        self.data[idx + 1] = color.g;
        self.data[idx + 2] = color.b;
        self.writes += 1;
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (x + y * self.width) * 3;
        Some(Color::new(self.data[idx], self.data[idx + 1], self.data[idx + 2]))
    }

    /// Fill every pixel and reset the write counter
    pub fn clear(&mut self, color: Color) {
        for rgb in self.data.chunks_exact_mut(3) {
            rgb[0] = color.r;
            rgb[1] = color.g;
            rgb[2] = color.b;
        }
        self.writes = 0;
    }

    /// Reallocate for a new size; contents are cleared to `color`
    pub fn resize(&mut self, width: usize, height: usize, color: Color) {
        *self = Self::new(width, height);
        self.clear(color);
    }

    /// Number of in-bounds pixel writes since the last clear
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Coordinates of every pixel whose color differs from `background`
    pub fn pixels_not(&self, background: Color) -> Vec<(usize, usize)> {
        let mut lit = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.pixel(x, y) != Some(background) {
                    lit.push((x, y));
                }
            }
        }
        lit
    }
}
