//! Draw-call recording canvas for tests

use neon_math::{Rect, Rgba, Vec2};

use crate::surface::{Canvas, CanvasError, Paint};

/// One recorded drawing operation
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    FillRect { rect: Rect, paint: Paint },
    FillCircle { center: Vec2, radius: f32, color: Rgba },
    StrokeLine { from: Vec2, to: Vec2, width: f32, color: Rgba },
}

/// A [`Canvas`] that records every call instead of rasterizing.
///
/// Optionally fails after a fixed number of calls to exercise the
/// transient-draw-failure path.
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    pub calls: Vec<DrawCall>,
    fail_after: Option<usize>,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
            fail_after: None,
        }
    }

    /// Accept `n` calls, then return [`CanvasError::Detached`] for the rest
    pub fn failing_after(width: u32, height: u32, n: usize) -> Self {
        Self {
            fail_after: Some(n),
            ..Self::new(width, height)
        }
    }

    /// Recorded line strokes, in order
    pub fn strokes(&self) -> impl Iterator<Item = (Vec2, Vec2, Rgba)> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::StrokeLine { from, to, color, .. } => Some((*from, *to, *color)),
            _ => None,
        })
    }

    /// Recorded circle fills, in order
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Rgba)> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::FillCircle { center, radius, color } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    fn record(&mut self, call: DrawCall) -> Result<(), CanvasError> {
        if let Some(limit) = self.fail_after {
            if self.calls.len() >= limit {
                return Err(CanvasError::Detached);
            }
        }
        self.calls.push(call);
        Ok(())
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) -> Result<(), CanvasError> {
        self.record(DrawCall::Clear)
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) -> Result<(), CanvasError> {
        self.record(DrawCall::FillRect {
            rect,
            paint: paint.clone(),
        })
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) -> Result<(), CanvasError> {
        self.record(DrawCall::FillCircle { center, radius, color })
    }

    fn stroke_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    ) -> Result<(), CanvasError> {
        self.record(DrawCall::StrokeLine { from, to, width, color })
    }
}
