//! The particle set: fixed-size point cloud falling through a wrapping column.

use rand::Rng;

use crate::consts::{FALL_STEP, HALF_SPREAD_XZ, Y_MAX, Y_MIN, Y_SPAN};

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

/// A point in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Particle {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Ordered, fixed-size set of particles. Created once, mutated every frame.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Scatter `count` particles uniformly: x, z ∈ [-5, 5), y ∈ [-10, 10).
    pub fn scatter(count: usize, rng: &mut impl Rng) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.random_range(-HALF_SPREAD_XZ..HALF_SPREAD_XZ),
                y: rng.random_range(Y_MIN..Y_MAX),
                z: rng.random_range(-HALF_SPREAD_XZ..HALF_SPREAD_XZ),
            })
            .collect();
        Self { particles }
    }

    /// Build a field from explicit positions.
    #[must_use]
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Advance one frame: every particle falls by [`FALL_STEP`].
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.y = fall(p.y);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}

/// One frame of fall for a single y coordinate.
///
/// Below [`Y_MIN`] the particle re-enters from the top of the column,
/// keeping its overshoot, so y stays on the `mod 20` track.
#[must_use]
pub fn fall(y: f64) -> f64 {
    let next = y - FALL_STEP;
    if next < Y_MIN { next + Y_SPAN } else { next }
}
