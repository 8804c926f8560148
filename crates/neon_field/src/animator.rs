//! Frame loop with an explicit cancellation handle

use neon_canvas::Canvas;

use crate::field::Field;
use crate::sweep::SweepClock;

/// Drives the field one frame per tick.
///
/// The embedding owns the scheduling: it calls [`Animator::tick`] from each
/// display-synchronized redraw callback and requests the next one while the
/// animator reports itself running. [`Animator::stop`] breaks that chain,
/// which is the teardown path the decorative loop otherwise lacks.
pub struct Animator {
    field: Field,
    clock: SweepClock,
    running: bool,
    frames: u64,
}

impl Animator {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            clock: SweepClock::new(),
            running: true,
            frames: 0,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    /// Frames attempted since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Re-arm a stopped animator
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop the loop: subsequent ticks are no-ops until [`Animator::start`]
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Forward a viewport resize to the field
    pub fn resize(&mut self, width: u32, height: u32) {
        self.field.resize(width, height);
    }

    /// Run one frame into the canvas. Returns whether a frame ran.
    ///
    /// A failed draw abandons the rest of the frame but leaves the animator
    /// running; the next tick tries again, so the loop self-heals once the
    /// surface is back.
    pub fn tick(&mut self, canvas: &mut dyn Canvas) -> bool {
        if !self.running {
            return false;
        }
        self.frames += 1;
        if let Err(e) = self.field.render_frame(canvas, self.clock.phase()) {
            log::debug!("frame {} abandoned: {}", self.frames, e);
        }
        true
    }

    /// Advance the simulation a bounded number of headless steps
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.field.step();
        }
    }
}
