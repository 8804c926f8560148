//! Particle state

use neon_math::Vec2;
use rand::Rng;

/// A single point mass of the field.
///
/// Velocity is assigned once at spawn and only ever changes sign when the
/// particle reflects off a field boundary. `hue` is sampled at spawn but
/// not consumed anywhere: the renderer paints a fixed teal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub hue: f32,
}

impl Particle {
    /// Spawn a particle uniformly inside `[0, width] x [0, height]`
    /// with velocity in [-0.3, 0.3] per axis, radius in [0.5, 2.3],
    /// and hue in [180, 240].
    pub fn spawn<R: Rng + ?Sized>(width: f32, height: f32, rng: &mut R) -> Self {
        Self {
            pos: Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)),
            vel: Vec2::new(rng.gen_range(-0.3..0.3), rng.gen_range(-0.3..0.3)),
            radius: rng.gen_range(0.5..2.3),
            hue: rng.gen_range(180.0..240.0),
        }
    }
}
