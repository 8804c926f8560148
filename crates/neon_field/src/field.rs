//! The particle field: integration, reflection, and frame drawing

use neon_canvas::{Canvas, CanvasError, Paint};
use neon_math::{Rect, Rgba, Vec2};
use rand::Rng;

use crate::particle::Particle;

/// Number of particles in a field, fixed for the field's lifetime
pub const PARTICLE_COUNT: usize = 120;

/// Particles closer than this many pixels get a connecting link
pub const LINK_DISTANCE: f32 = 120.0;

/// Link alpha at zero distance; fades linearly to zero at [`LINK_DISTANCE`]
pub const LINK_ALPHA: f32 = 0.08;

/// The fixed draw color. Hue per particle exists but is not routed here.
fn glow(alpha: f32) -> Rgba {
    Rgba::new(0.0, 1.0, 246.0 / 255.0, alpha)
}

/// Top/bottom darkening overlay painted over the cleared surface each frame
fn vignette() -> Paint {
    Paint::vertical(&[
        (0.0, Rgba::new(0.0, 0.0, 0.0, 0.12)),
        (0.5, Rgba::new(0.0, 0.0, 0.0, 0.02)),
        (1.0, Rgba::new(0.0, 0.0, 0.0, 0.12)),
    ])
}

/// The simulated particle set plus the pixel bounds it moves within.
///
/// Bounds follow the drawing surface via [`Field::resize`]; the particle
/// set itself never grows or shrinks.
pub struct Field {
    width: u32,
    height: u32,
    particles: Vec<Particle>,
}

impl Field {
    /// Allocate a field of [`PARTICLE_COUNT`] particles spread uniformly
    /// over the given bounds. Dimensions are clamped to at least 1.
    pub fn new<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::spawn(width as f32, height as f32, rng))
            .collect();
        Self {
            width,
            height,
            particles,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable particle access, for embeddings that stage exact layouts
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Track a viewport resize. Only the bounds change: positions are not
    /// rescaled or clamped, so a particle may sit out of bounds until its
    /// own motion and reflection bring it back.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
    }

    /// Integrate one particle and reflect it off the bounds.
    ///
    /// Order matters: move first, then test the moved position, then flip
    /// the velocity sign. The particle keeps its overshot position for the
    /// rest of the frame.
    fn integrate(particle: &mut Particle, width: f32, height: f32) {
        particle.pos += particle.vel;
        if particle.pos.x < 0.0 || particle.pos.x > width {
            particle.vel.x = -particle.vel.x;
        }
        if particle.pos.y < 0.0 || particle.pos.y > height {
            particle.vel.y = -particle.vel.y;
        }
    }

    /// Advance every particle one step without drawing
    pub fn step(&mut self) {
        let (w, h) = (self.width as f32, self.height as f32);
        for particle in &mut self.particles {
            Self::integrate(particle, w, h);
        }
    }

    /// Run one full frame: clear, vignette, per-particle motion + drawing,
    /// pairwise links, sweep line.
    ///
    /// Particles are processed in sequence order, and each is moved before
    /// it is drawn or linked, so a link between `i` and `j > i` sees `i`
    /// already moved this frame and `j` not yet. Links connect every pair
    /// closer than [`LINK_DISTANCE`]; the pass is intentionally the exact
    /// O(n^2) scan.
    ///
    /// A drawing error abandons the rest of the frame and is returned; the
    /// simulation state keeps whatever progress was made.
    pub fn render_frame(
        &mut self,
        canvas: &mut dyn Canvas,
        sweep_phase: f32,
    ) -> Result<(), CanvasError> {
        let (w, h) = (self.width as f32, self.height as f32);

        canvas.clear()?;
        canvas.fill_rect(Rect::from_size(w, h), &vignette())?;

        for i in 0..self.particles.len() {
            Self::integrate(&mut self.particles[i], w, h);
            let Particle { pos, radius, .. } = self.particles[i];

            canvas.fill_circle(pos, radius, glow(0.08))?;

            for j in (i + 1)..self.particles.len() {
                let other = self.particles[j].pos;
                let d = pos.distance(other);
                if d < LINK_DISTANCE {
                    let alpha = LINK_ALPHA * (1.0 - d / LINK_DISTANCE);
                    canvas.stroke_line(pos, other, 1.0, glow(alpha))?;
                }
            }
        }

        let sweep_y = (sweep_phase.sin() + 1.0) / 2.0 * h;
        canvas.fill_rect(Rect::new(0.0, sweep_y, w, 2.0), &Paint::Solid(glow(0.02)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neon_canvas::RecordingCanvas;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn test_field(width: u32, height: u32) -> Field {
        let mut rng = SmallRng::seed_from_u64(7);
        Field::new(width, height, &mut rng)
    }

    /// Park every particle at one far-away point with zero velocity so a
    /// test can stage just the particles it cares about.
    fn parked_field(width: u32, height: u32) -> Field {
        let mut field = test_field(width, height);
        for p in field.particles_mut() {
            p.pos = Vec2::new(width as f32 * 0.9, height as f32 * 0.9);
            p.vel = Vec2::ZERO;
        }
        field
    }

    #[test]
    fn test_field_has_fixed_cardinality() {
        let mut field = test_field(800, 600);
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for _ in 0..50 {
            field.step();
        }
        field.resize(100, 100);
        field.resize(4000, 50);
        for _ in 0..50 {
            field.step();
        }
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_step_is_pure_translation() {
        let mut field = test_field(10_000, 10_000);
        for (i, p) in field.particles_mut().iter_mut().enumerate() {
            p.pos = Vec2::new(100.0 + i as f32 * 10.0, 200.0);
            p.vel = Vec2::new(0.25, -0.15);
        }
        let before: Vec<Vec2> = field.particles().iter().map(|p| p.pos).collect();

        field.step();

        for (p, prev) in field.particles().iter().zip(&before) {
            assert_eq!(p.pos, *prev + Vec2::new(0.25, -0.15));
        }
    }

    #[test]
    fn test_reflection_flips_sign_once_and_keeps_magnitude() {
        let mut field = parked_field(100, 100);
        {
            let p = &mut field.particles_mut()[0];
            p.pos = Vec2::new(99.9, 50.0);
            p.vel = Vec2::new(0.5, 0.0);
        }

        field.step();
        let p = field.particles()[0];
        assert!((p.pos.x - 100.4).abs() < 1e-4, "overshoots before turning");
        assert_eq!(p.vel.x, -0.5);

        // Next step brings it back in range with no second flip
        field.step();
        let p = field.particles()[0];
        assert!((p.pos.x - 99.9).abs() < 1e-4);
        assert_eq!(p.vel.x, -0.5);
    }

    #[test]
    fn test_reflection_lower_bound() {
        let mut field = parked_field(100, 100);
        {
            let p = &mut field.particles_mut()[0];
            p.pos = Vec2::new(50.0, 0.1);
            p.vel = Vec2::new(0.0, -0.3);
        }

        field.step();
        let p = field.particles()[0];
        assert!(p.pos.y < 0.0, "overshoots past the top edge");
        assert_eq!(p.vel.y, 0.3);
    }

    #[test]
    fn test_resize_does_not_touch_positions() {
        let mut field = test_field(800, 600);
        let before: Vec<Vec2> = field.particles().iter().map(|p| p.pos).collect();

        field.resize(400, 600);

        assert_eq!(field.width(), 400);
        for (p, prev) in field.particles().iter().zip(&before) {
            assert_eq!(p.pos, *prev);
        }
    }

    #[test]
    fn test_seeded_fields_are_identical() {
        let a = test_field(640, 480);
        let b = test_field(640, 480);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_link_alpha_fades_linearly() {
        // Pairs at distance 0, 60, and exactly 120
        let mut field = parked_field(1000, 1000);
        {
            let particles = field.particles_mut();
            particles[0].pos = Vec2::new(10.0, 10.0);
            particles[1].pos = Vec2::new(10.0, 10.0);
            particles[2].pos = Vec2::new(10.0, 70.0);
            particles[3].pos = Vec2::new(130.0, 10.0);
        }

        let mut canvas = RecordingCanvas::new(1000, 1000);
        field.render_frame(&mut canvas, 0.0).unwrap();

        let from_first: Vec<_> = canvas
            .strokes()
            .filter(|(from, _, _)| *from == Vec2::new(10.0, 10.0))
            .collect();

        // d = 0 link at full alpha
        let zero = from_first
            .iter()
            .find(|(_, to, _)| *to == Vec2::new(10.0, 10.0))
            .expect("coincident pair links");
        assert!((zero.2.a - 0.08).abs() < 1e-6);

        // d = 60 link at half alpha
        let sixty = from_first
            .iter()
            .find(|(_, to, _)| *to == Vec2::new(10.0, 70.0))
            .expect("pair at 60px links");
        assert!((sixty.2.a - 0.04).abs() < 1e-6);

        // d = 120 exactly draws nothing (strict inequality)
        assert!(
            !from_first
                .iter()
                .any(|(_, to, _)| *to == Vec2::new(130.0, 10.0)),
            "pair at exactly the link distance must not link"
        );
    }

    #[test]
    fn test_frame_draw_order() {
        let mut field = parked_field(200, 200);
        let mut canvas = RecordingCanvas::new(200, 200);
        field.render_frame(&mut canvas, 0.0).unwrap();

        use neon_canvas::DrawCall;
        assert_eq!(canvas.calls[0], DrawCall::Clear);
        assert!(
            matches!(
                &canvas.calls[1],
                DrawCall::FillRect { paint: Paint::VerticalGradient { .. }, .. }
            ),
            "vignette right after clear"
        );
        assert!(
            matches!(
                canvas.calls.last(),
                Some(DrawCall::FillRect { rect, paint: Paint::Solid(_) })
                    if rect.height == 2.0
            ),
            "sweep line drawn last"
        );
        assert_eq!(canvas.circles().count(), PARTICLE_COUNT);
    }

    #[test]
    fn test_sweep_line_position_follows_phase() {
        let mut field = parked_field(100, 100);
        let mut canvas = RecordingCanvas::new(100, 100);
        field
            .render_frame(&mut canvas, std::f32::consts::FRAC_PI_2)
            .unwrap();

        use neon_canvas::DrawCall;
        let Some(DrawCall::FillRect { rect, .. }) = canvas.calls.last() else {
            panic!("sweep line missing");
        };
        // sin(pi/2) = 1 puts the sweep at the bottom edge
        assert!((rect.y - 100.0).abs() < 1e-4);
        assert_eq!(rect.width, 100.0);
    }

    #[test]
    fn test_vignette_stops() {
        let Paint::VerticalGradient { stops } = vignette() else {
            panic!("vignette must be a gradient");
        };
        assert_eq!(stops.len(), 3);
        assert!((stops[0].color.a - 0.12).abs() < 1e-6);
        assert!((stops[1].color.a - 0.02).abs() < 1e-6);
        assert!((stops[2].color.a - 0.12).abs() < 1e-6);
        assert_eq!(stops[1].offset, 0.5);
    }

    #[test]
    fn test_draw_failure_abandons_frame() {
        let mut field = parked_field(100, 100);
        // Allow clear + vignette, fail on the first circle
        let mut canvas = RecordingCanvas::failing_after(100, 100, 2);
        let err = field.render_frame(&mut canvas, 0.0);
        assert!(err.is_err());
        assert_eq!(canvas.calls.len(), 2);
    }
}
