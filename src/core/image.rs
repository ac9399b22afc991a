use super::color::Color;
use super::geometry::{is_on_canvas, rasterize, Point, Segment};

pub const CHANNELS: usize = 4;

/// Row-major RGBA8 pixel buffer backing the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Image {
    /// Opaque white image.
    pub fn blank(width: u32, height: u32) -> Self {
        let white = Color::white();
        Self {
            data: [white.r, white.g, white.b, white.a].repeat(width as usize * height as usize),
            width,
            height,
        }
    }

    /// Wrap canvas pixel data; trailing bytes that do not fill a row are dropped.
    pub fn from_rgba(mut data: Vec<u8>, width: u32) -> Self {
        let row = width as usize * CHANNELS;
        let height = if row == 0 { 0 } else { data.len() / row };
        data.truncate(row * height);
        Self {
            data,
            width,
            height: height as u32,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn offset(&self, point: Point) -> Option<usize> {
        is_on_canvas(point, self.width, self.height)
            .then(|| (point.y as usize * self.width as usize + point.x as usize) * CHANNELS)
    }

    pub fn pixel(&self, point: Point) -> Option<Color> {
        let i = self.offset(point)?;
        let px = &self.data[i..i + CHANNELS];
        Some(Color::new(px[0], px[1], px[2], px[3]))
    }

    /// Paint one pixel. Points off the image are ignored.
    pub fn set_pixel(&mut self, point: Point, color: &Color) {
        if let Some(i) = self.offset(point) {
            self.data[i..i + CHANNELS].copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    pub fn draw_segment(&mut self, segment: &Segment, color: &Color) {
        for point in rasterize(segment) {
            self.set_pixel(point, color);
        }
    }

    /// Copy the inclusive rectangle `from..=to` into `dest` starting at `dest_origin`.
    pub fn copy_region(&self, from: Point, to: Point, dest: &mut Image, dest_origin: Point) {
        for (dy, y) in (from.y..=to.y).enumerate() {
            for (dx, x) in (from.x..=to.x).enumerate() {
                if let Some(color) = self.pixel(Point::new(x, y)) {
                    dest.set_pixel(dest_origin + Point::new(dx as i32, dy as i32), &color);
                }
            }
        }
    }
}
