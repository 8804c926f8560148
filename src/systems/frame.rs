//! Frame system
//!
//! Owns the software framebuffer and the field animator and runs one
//! simulation+raster pass per redraw. Presentation is left to the render
//! context; clock updates are surfaced for the window title.

use chrono::Timelike;
use neon_canvas::Framebuffer;
use neon_field::{Animator, Field};
use neon_page::ClockTicker;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Drives the decorative frame: field simulation into the framebuffer
pub struct FrameSystem {
    framebuffer: Framebuffer,
    animator: Animator,
    ticker: ClockTicker,
}

impl FrameSystem {
    /// Build the field at the given size. A seed pins the layout for
    /// reproducible sessions; otherwise every launch gets a fresh one.
    pub fn new(width: u32, height: u32, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let field = Field::new(width, height, &mut rng);

        Self {
            framebuffer: Framebuffer::new(width, height),
            animator: Animator::new(field),
            ticker: ClockTicker::new(),
        }
    }

    /// Track a viewport resize: framebuffer and field bounds together
    pub fn resize(&mut self, width: u32, height: u32) {
        self.framebuffer.resize(width, height);
        self.animator.resize(width, height);
    }

    /// Run one frame into the framebuffer. Returns whether a frame ran
    /// (false once the animator is stopped).
    pub fn render(&mut self) -> bool {
        self.animator.tick(&mut self.framebuffer)
    }

    /// New title text when the displayed minute changed
    pub fn title_update<T: Timelike>(&mut self, now: &T) -> Option<(String, &'static str)> {
        self.ticker.tick(now)
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut Animator {
        &mut self.animator
    }
}
