//! The drawing surface trait and paint types

use neon_math::{Rect, Rgba, Vec2};

/// A single color stop of a gradient, offset in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Fill paint for rectangles
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    /// Single solid color
    Solid(Rgba),
    /// Vertical linear gradient spanning the full surface height.
    /// Stops must be ordered by ascending offset.
    VerticalGradient { stops: Vec<GradientStop> },
}

impl Paint {
    /// Build a vertical gradient from (offset, color) pairs
    pub fn vertical(stops: &[(f32, Rgba)]) -> Self {
        Paint::VerticalGradient {
            stops: stops
                .iter()
                .map(|&(offset, color)| GradientStop { offset, color })
                .collect(),
        }
    }

    /// Evaluate the paint at a normalized vertical position in [0, 1]
    pub fn color_at(&self, t: f32) -> Rgba {
        match self {
            Paint::Solid(color) => *color,
            Paint::VerticalGradient { stops } => gradient_at(stops, t),
        }
    }
}

fn gradient_at(stops: &[GradientStop], t: f32) -> Rgba {
    let Some(first) = stops.first() else {
        return Rgba::TRANSPARENT;
    };
    if t <= first.offset {
        return first.color;
    }
    for pair in stops.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if t <= hi.offset {
            let span = hi.offset - lo.offset;
            // Coincident stops act as a hard edge
            if span <= f32::EPSILON {
                return hi.color;
            }
            return lo.color.lerp(hi.color, (t - lo.offset) / span);
        }
    }
    stops.last().map(|s| s.color).unwrap_or(Rgba::TRANSPARENT)
}

/// Failure of a single drawing operation
#[derive(Debug)]
pub enum CanvasError {
    /// The backing surface is gone; drawing can resume once it returns
    Detached,
}

impl std::fmt::Display for CanvasError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CanvasError::Detached => write!(f, "drawing surface detached"),
        }
    }
}

impl std::error::Error for CanvasError {}

/// An addressable 2D raster surface.
///
/// This is the only boundary the particle field draws through. Coordinates
/// are in pixels with the origin at the top-left corner.
pub trait Canvas {
    /// Current pixel dimensions (width, height)
    fn size(&self) -> (u32, u32);

    /// Reset the whole surface to its backdrop
    fn clear(&mut self) -> Result<(), CanvasError>;

    /// Fill a rectangle with solid or gradient paint
    fn fill_rect(&mut self, rect: Rect, paint: &Paint) -> Result<(), CanvasError>;

    /// Fill a circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) -> Result<(), CanvasError>;

    /// Stroke a line segment
    fn stroke_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    ) -> Result<(), CanvasError>;
}
