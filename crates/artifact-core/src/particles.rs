//! Cursor-trail particles.
//!
//! Particles live in screen space (CSS pixels of the overlay canvas), move by a
//! constant per-frame velocity and fade out linearly. The field is updated and
//! drawn in one pass; survivors are compacted in place so removing a particle
//! never skips its neighbour.

use crate::config::ParticleParams;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Drawing target for the particle pass (a 2D canvas on the web).
pub trait ParticleSurface {
    /// Wipe the whole surface to transparent.
    fn clear(&mut self);
    /// Fill a circle of `radius` centred at (`x`, `y`) with `rgb` at `alpha`.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, rgb: [u8; 3], alpha: f32);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub alpha: f32,
}

impl Particle {
    pub fn new<R: Rng + ?Sized>(x: f32, y: f32, params: &ParticleParams, rng: &mut R) -> Self {
        let (size_lo, size_hi) = params.size_range;
        let v = params.speed_max;
        Self {
            x,
            y,
            vx: rng.gen_range(-v..v),
            vy: rng.gen_range(-v..v),
            size: rng.gen_range(size_lo..size_hi),
            alpha: 1.0,
        }
    }

    /// Integrate one frame. Returns `false` once the particle has faded out.
    #[inline]
    pub fn update(&mut self, fade: f32) -> bool {
        self.x += self.vx;
        self.y += self.vy;
        self.alpha -= fade;
        self.alpha > 0.0
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    params: ParticleParams,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(params: ParticleParams) -> Self {
        Self::with_rng(params, StdRng::from_entropy())
    }

    pub fn with_rng(params: ParticleParams, rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            params,
            rng,
        }
    }

    /// Append `count` fresh particles at (`x`, `y`).
    pub fn spawn(&mut self, x: f32, y: f32, count: usize) {
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::new(x, y, &self.params, &mut self.rng);
            self.particles.push(p);
        }
        self.enforce_capacity();
    }

    /// Spawn the configured number of particles for a single pointer move.
    #[inline]
    pub fn spawn_trail(&mut self, x: f32, y: f32) {
        self.spawn(x, y, self.params.per_move);
    }

    /// Clear the surface, then step, draw and prune every particle.
    pub fn advance_and_render<S: ParticleSurface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();
        let fade = self.params.fade_per_frame;
        let rgb = self.params.rgb;
        self.particles.retain_mut(|p| {
            let alive = p.update(fade);
            if alive {
                surface.fill_circle(p.x, p.y, p.size, rgb, p.alpha);
            }
            alive
        });
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn params(&self) -> &ParticleParams {
        &self.params
    }

    fn enforce_capacity(&mut self) {
        if let Some(cap) = self.params.capacity {
            let len = self.particles.len();
            if len > cap {
                // oldest particles sit at the front
                self.particles.drain(..len - cap);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSurface {
        clears: usize,
        circles: Vec<(f32, f32, f32, f32)>,
    }

    impl ParticleSurface for CountingSurface {
        fn clear(&mut self) {
            self.clears += 1;
            self.circles.clear();
        }
        fn fill_circle(&mut self, x: f32, y: f32, radius: f32, _rgb: [u8; 3], alpha: f32) {
            self.circles.push((x, y, radius, alpha));
        }
    }

    fn field() -> ParticleField {
        ParticleField::with_rng(ParticleParams::default(), StdRng::seed_from_u64(7))
    }

    #[test]
    fn spawned_particles_respect_ranges() {
        let mut f = field();
        f.spawn(100.0, 50.0, 500);
        assert_eq!(f.len(), 500);
        for p in f.iter() {
            assert_eq!((p.x, p.y), (100.0, 50.0));
            assert!(p.size >= 1.0 && p.size < 3.0);
            assert!(p.vx >= -1.5 && p.vx < 1.5);
            assert!(p.vy >= -1.5 && p.vy < 1.5);
            assert_eq!(p.alpha, 1.0);
        }
    }

    #[test]
    fn update_moves_by_velocity_and_fades() {
        let mut p = Particle {
            x: 10.0,
            y: 20.0,
            vx: 1.0,
            vy: -0.5,
            size: 2.0,
            alpha: 1.0,
        };
        assert!(p.update(0.03));
        assert_eq!(p.x, 11.0);
        assert_eq!(p.y, 19.5);
        assert!((p.alpha - 0.97).abs() < 1e-6);
    }

    #[test]
    fn pass_clears_once_and_draws_every_survivor() {
        let mut f = field();
        f.spawn(0.0, 0.0, 12);
        let mut s = CountingSurface::default();
        f.advance_and_render(&mut s);
        assert_eq!(s.clears, 1);
        assert_eq!(s.circles.len(), 12);
    }

    #[test]
    fn adjacent_expired_particles_are_all_removed() {
        let mut f = field();
        f.spawn(0.0, 0.0, 6);
        // alternate nearly-dead and fresh particles, with a run of dead ones
        for (i, p) in f.particles.iter_mut().enumerate() {
            p.alpha = if i == 1 || i == 2 || i == 4 { 0.01 } else { 1.0 };
        }
        let mut s = CountingSurface::default();
        f.advance_and_render(&mut s);
        assert_eq!(f.len(), 3);
        assert!(f.iter().all(|p| p.alpha > 0.9));
        assert_eq!(s.circles.len(), 3);
    }

    #[test]
    fn capacity_drops_oldest_first() {
        let params = ParticleParams {
            capacity: Some(4),
            ..ParticleParams::default()
        };
        let mut f = ParticleField::with_rng(params, StdRng::seed_from_u64(1));
        f.spawn(1.0, 1.0, 3);
        f.spawn(2.0, 2.0, 3);
        assert_eq!(f.len(), 4);
        let xs: Vec<f32> = f.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 2.0, 2.0]);
    }
}
