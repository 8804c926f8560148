//! CPU-side RGBA8 rasterizer

use neon_math::{Rect, Rgba, Vec2};

use crate::surface::{Canvas, CanvasError, Paint};

/// Backdrop the surface is reset to on [`Canvas::clear`]. Opaque near-black,
/// the page background the neon elements glow against.
pub const CLEAR_COLOR: [u8; 4] = [5, 8, 16, 255];

/// An owned RGBA8 pixel buffer implementing [`Canvas`] with src-over
/// (straight alpha) blending. Rows are stored top to bottom.
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a cleared framebuffer. Dimensions are clamped to at least 1.
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut fb = Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        };
        fb.reset();
        fb
    }

    /// Reallocate for new dimensions. Previous contents are discarded.
    pub fn resize(&mut self, width: u32, height: u32) {
        let width = width.max(1);
        let height = height.max(1);
        self.width = width;
        self.height = height;
        self.pixels = vec![0; (width * height * 4) as usize];
        self.reset();
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, row-major from the top, for GPU upload
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Read back one pixel (None when out of bounds)
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    fn reset(&mut self) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&CLEAR_COLOR);
        }
    }

    /// Blend a color over one pixel. Out-of-bounds coordinates are dropped.
    fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let alpha = color.a.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }

        let i = ((y as u32 * self.width + x as u32) * 4) as usize;
        let px = &mut self.pixels[i..i + 4];
        let src = [color.r, color.g, color.b];
        for (channel, s) in src.iter().enumerate() {
            let s = s.clamp(0.0, 1.0) * 255.0;
            let d = px[channel] as f32;
            px[channel] = (s * alpha + d * (1.0 - alpha)).round() as u8;
        }
        let dst_a = px[3] as f32 / 255.0;
        px[3] = ((alpha + dst_a * (1.0 - alpha)) * 255.0).round() as u8;
    }

    fn fill_span(&mut self, y: i32, x0: i32, x1: i32, color: Rgba) {
        for x in x0..x1 {
            self.blend_pixel(x, y, color);
        }
    }
}

impl Canvas for Framebuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) -> Result<(), CanvasError> {
        self.reset();
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) -> Result<(), CanvasError> {
        let x0 = rect.x.floor().max(0.0) as i32;
        let x1 = (rect.right().ceil() as i32).min(self.width as i32);
        let y0 = rect.y.floor().max(0.0) as i32;
        let y1 = (rect.bottom().ceil() as i32).min(self.height as i32);

        // Gradients span the full surface height, not the rect
        let surface_h = self.height as f32;
        for y in y0..y1 {
            let t = (y as f32 + 0.5) / surface_h;
            self.fill_span(y, x0, x1, paint.color_at(t));
        }
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) -> Result<(), CanvasError> {
        if radius <= 0.0 {
            return Ok(());
        }
        let r_sq = radius * radius;
        let y0 = (center.y - radius).floor() as i32;
        let y1 = (center.y + radius).ceil() as i32;
        let x0 = (center.x - radius).floor() as i32;
        let x1 = (center.x + radius).ceil() as i32;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let px_center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if (px_center - center).length_squared() <= r_sq {
                    self.blend_pixel(x, y, color);
                }
            }
        }
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    ) -> Result<(), CanvasError> {
        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs()).ceil() as i32;
        // Pixels beyond a hairline get stamped as a square brush
        let brush = ((width - 1.0) / 2.0).max(0.0).round() as i32;

        if steps == 0 {
            self.blend_pixel(from.x.round() as i32, from.y.round() as i32, color);
            return Ok(());
        }

        let mut last = (i32::MIN, i32::MIN);
        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            let p = from.lerp(to, t);
            let (x, y) = (p.x.round() as i32, p.y.round() as i32);
            if (x, y) == last {
                continue;
            }
            last = (x, y);
            if brush == 0 {
                self.blend_pixel(x, y, color);
            } else {
                for dy in -brush..=brush {
                    for dx in -brush..=brush {
                        self.blend_pixel(x + dx, y + dy, color);
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_cleared() {
        let fb = Framebuffer::new(4, 4);
        assert_eq!(fb.pixel(0, 0), Some(CLEAR_COLOR));
        assert_eq!(fb.pixel(3, 3), Some(CLEAR_COLOR));
    }

    #[test]
    fn test_zero_dimensions_clamped() {
        let fb = Framebuffer::new(0, 0);
        assert_eq!(fb.size(), (1, 1));
    }

    #[test]
    fn test_clear_resets_drawing() {
        let mut fb = Framebuffer::new(4, 4);
        fb.fill_rect(Rect::from_size(4.0, 4.0), &Paint::Solid(Rgba::WHITE))
            .unwrap();
        assert_ne!(fb.pixel(1, 1), Some(CLEAR_COLOR));
        fb.clear().unwrap();
        assert_eq!(fb.pixel(1, 1), Some(CLEAR_COLOR));
    }

    #[test]
    fn test_opaque_fill_overwrites() {
        let mut fb = Framebuffer::new(4, 4);
        fb.fill_rect(Rect::new(1.0, 1.0, 2.0, 2.0), &Paint::Solid(Rgba::WHITE))
            .unwrap();
        assert_eq!(fb.pixel(1, 1), Some([255, 255, 255, 255]));
        assert_eq!(fb.pixel(2, 2), Some([255, 255, 255, 255]));
        // Outside the rect untouched
        assert_eq!(fb.pixel(0, 0), Some(CLEAR_COLOR));
        assert_eq!(fb.pixel(3, 3), Some(CLEAR_COLOR));
    }

    #[test]
    fn test_blend_half_alpha() {
        let mut fb = Framebuffer::new(1, 1);
        fb.fill_rect(
            Rect::from_size(1.0, 1.0),
            &Paint::Solid(Rgba::new(1.0, 1.0, 1.0, 0.5)),
        )
        .unwrap();
        let px = fb.pixel(0, 0).unwrap();
        // 255 * 0.5 + backdrop * 0.5
        assert_eq!(px[0], (255.0 * 0.5 + 5.0 * 0.5_f32).round() as u8);
        assert_eq!(px[3], 255);
    }

    #[test]
    fn test_gradient_rows_follow_stops() {
        let mut fb = Framebuffer::new(2, 10);
        let paint = Paint::vertical(&[
            (0.0, Rgba::new(1.0, 0.0, 0.0, 1.0)),
            (1.0, Rgba::new(0.0, 0.0, 1.0, 1.0)),
        ]);
        fb.fill_rect(Rect::from_size(2.0, 10.0), &paint).unwrap();
        let top = fb.pixel(0, 0).unwrap();
        let bottom = fb.pixel(0, 9).unwrap();
        assert!(top[0] > top[2], "top row should be red-dominant");
        assert!(bottom[2] > bottom[0], "bottom row should be blue-dominant");
    }

    #[test]
    fn test_circle_coverage() {
        let mut fb = Framebuffer::new(9, 9);
        fb.fill_circle(Vec2::new(4.5, 4.5), 2.0, Rgba::WHITE).unwrap();
        assert_eq!(fb.pixel(4, 4), Some([255, 255, 255, 255]));
        // Corner of the bounding box stays untouched
        assert_eq!(fb.pixel(2, 2), Some(CLEAR_COLOR));
    }

    #[test]
    fn test_line_endpoints_painted() {
        let mut fb = Framebuffer::new(8, 8);
        fb.stroke_line(Vec2::new(0.0, 0.0), Vec2::new(3.0, 3.0), 1.0, Rgba::WHITE)
            .unwrap();
        assert_eq!(fb.pixel(0, 0).unwrap()[0], 255);
        assert_eq!(fb.pixel(3, 3).unwrap()[0], 255);
        assert_eq!(fb.pixel(1, 1).unwrap()[0], 255);
    }

    #[test]
    fn test_out_of_bounds_drawing_is_clipped() {
        let mut fb = Framebuffer::new(4, 4);
        fb.fill_circle(Vec2::new(-10.0, -10.0), 3.0, Rgba::WHITE).unwrap();
        fb.stroke_line(
            Vec2::new(-5.0, 2.0),
            Vec2::new(10.0, 2.0),
            1.0,
            Rgba::WHITE,
        )
        .unwrap();
        fb.fill_rect(Rect::new(3.0, 3.0, 100.0, 100.0), &Paint::Solid(Rgba::WHITE))
            .unwrap();
        // The in-bounds part of the line landed
        assert_eq!(fb.pixel(0, 2).unwrap()[0], 255);
    }

    #[test]
    fn test_resize_reallocates_and_clears() {
        let mut fb = Framebuffer::new(4, 4);
        fb.fill_rect(Rect::from_size(4.0, 4.0), &Paint::Solid(Rgba::WHITE))
            .unwrap();
        fb.resize(8, 2);
        assert_eq!(fb.size(), (8, 2));
        assert_eq!(fb.pixels().len(), 8 * 2 * 4);
        assert_eq!(fb.pixel(7, 1), Some(CLEAR_COLOR));
    }
}
