//! A single fading-in background particle.

use rand::Rng;

use super::color::ColorTemplate;
use super::surface::Surface;

/// Uniform sample in `[0, max)`, or 0 for an empty range.
fn sample<R: Rng + ?Sized>(rng: &mut R, max: f64) -> f64 {
	if max > 0.0 { rng.gen_range(0.0..max) } else { 0.0 }
}

/// A point drifting at constant velocity while its alpha grows towards 1.
///
/// Particles are never destroyed: leaving the bounds respawns them in place
/// at a new random position with alpha reset, keeping velocity and radius.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	/// Fade-in progress in `[0, 1]`.
	pub alpha: f64,
	pub growth_rate: f64,
}

impl Particle {
	pub fn create<R: Rng + ?Sized>(
		rng: &mut R,
		width: f64,
		height: f64,
		speed_scale: f64,
		radius_scale: f64,
		growth_rate: f64,
	) -> Self {
		Self {
			x: sample(rng, width),
			y: sample(rng, height),
			vx: (rng.r#gen::<f64>() - 0.5) * speed_scale,
			vy: (rng.r#gen::<f64>() - 0.5) * speed_scale,
			radius: rng.r#gen::<f64>() * radius_scale,
			alpha: 0.0,
			growth_rate,
		}
	}

	pub fn in_bounds(&self, width: f64, height: f64) -> bool {
		self.x >= 0.0 && self.x < width && self.y >= 0.0 && self.y < height
	}

	/// Advance one frame. Returns `true` if the particle left the bounds and
	/// was respawned during this call.
	pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f64, height: f64) -> bool {
		self.x += self.vx;
		self.y += self.vy;
		self.alpha = (self.alpha + self.growth_rate).min(1.0);

		if self.in_bounds(width, height) {
			return false;
		}
		self.x = sample(rng, width);
		self.y = sample(rng, height);
		self.alpha = 0.0;
		true
	}

	pub fn render<S: Surface + ?Sized>(&self, surface: &S, template: &ColorTemplate) {
		surface.fill_circle(self.x, self.y, self.radius, &template.resolve(self.alpha));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::surface::testing::{DrawCall, RecordingSurface};
	use proptest::prelude::*;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	fn particle_at(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			x,
			y,
			vx,
			vy,
			radius: 1.0,
			alpha: 0.0,
			growth_rate: 0.003,
		}
	}

	#[test]
	fn test_create_samples_within_ranges() {
		let mut rng = SmallRng::seed_from_u64(7);
		for _ in 0..500 {
			let p = Particle::create(&mut rng, 800.0, 600.0, 0.5, 1.5, 0.003);
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!((-0.25..=0.25).contains(&p.vx));
			assert!((-0.25..=0.25).contains(&p.vy));
			assert!((0.0..1.5).contains(&p.radius));
			assert_eq!(p.alpha, 0.0);
			assert_eq!(p.growth_rate, 0.003);
		}
	}

	#[test]
	fn test_create_with_empty_bounds_does_not_panic() {
		let mut rng = SmallRng::seed_from_u64(1);
		let p = Particle::create(&mut rng, 0.0, 0.0, 1.0, 2.0, 0.005);
		assert_eq!((p.x, p.y), (0.0, 0.0));
	}

	#[test]
	fn test_right_edge_respawn() {
		let mut rng = SmallRng::seed_from_u64(3);
		let mut p = particle_at(799.9, 300.0, 0.5, 0.0);
		p.alpha = 0.6;

		assert!(p.advance(&mut rng, 800.0, 600.0));
		assert!((0.0..800.0).contains(&p.x));
		assert!((0.0..600.0).contains(&p.y));
		assert_eq!(p.alpha, 0.0);
		assert_eq!((p.vx, p.vy, p.radius), (0.5, 0.0, 1.0));
	}

	#[test]
	fn test_position_on_far_edge_is_out_of_bounds() {
		let mut rng = SmallRng::seed_from_u64(3);
		let mut p = particle_at(799.0, 10.0, 1.0, 0.0);
		assert!(p.advance(&mut rng, 800.0, 600.0));
	}

	#[test]
	fn test_alpha_converges_to_one() {
		let mut rng = SmallRng::seed_from_u64(5);
		let mut p = particle_at(400.0, 300.0, 0.0, 0.0);
		for _ in 0..400 {
			p.advance(&mut rng, 800.0, 600.0);
		}
		assert_eq!(p.alpha, 1.0);
		p.advance(&mut rng, 800.0, 600.0);
		assert_eq!(p.alpha, 1.0);
	}

	#[test]
	fn test_render_uses_current_alpha() {
		let surface = RecordingSurface::default();
		let mut p = particle_at(10.0, 20.0, 0.0, 0.0);
		p.alpha = 0.5;
		p.render(&surface, &ColorTemplate::WHITE);

		assert_eq!(
			surface.circles(),
			vec![DrawCall::Circle {
				x: 10.0,
				y: 20.0,
				radius: 1.0,
				fill: "rgba(255, 255, 255, 0.5)".to_string(),
			}]
		);
	}

	proptest! {
		#[test]
		fn prop_advance_keeps_alpha_in_unit_range(
			seed in any::<u64>(),
			x in 0.0f64..800.0,
			y in 0.0f64..600.0,
			vx in -1.0f64..1.0,
			vy in -1.0f64..1.0,
			alpha in 0.0f64..=1.0,
			growth in 0.0f64..0.1,
		) {
			let mut rng = SmallRng::seed_from_u64(seed);
			let mut p = Particle { x, y, vx, vy, radius: 1.0, alpha, growth_rate: growth };
			let respawned = p.advance(&mut rng, 800.0, 600.0);

			prop_assert!((0.0..=1.0).contains(&p.alpha));
			if respawned {
				prop_assert_eq!(p.alpha, 0.0);
			} else {
				prop_assert!(p.alpha >= alpha);
			}
			prop_assert!(p.in_bounds(800.0, 600.0));
		}

		#[test]
		fn prop_respawn_is_atomic(
			seed in any::<u64>(),
			x in 0.0f64..100.0,
			y in 0.0f64..100.0,
			vx in -3.0f64..3.0,
			vy in -3.0f64..3.0,
		) {
			let mut rng = SmallRng::seed_from_u64(seed);
			let mut p = particle_at(x, y, vx, vy);
			p.alpha = 0.8;
			let (nx, ny) = (x + vx, y + vy);
			let left = !(0.0..100.0).contains(&nx) || !(0.0..100.0).contains(&ny);

			prop_assert_eq!(p.advance(&mut rng, 100.0, 100.0), left);
			if left {
				prop_assert_eq!(p.alpha, 0.0);
				prop_assert!(p.in_bounds(100.0, 100.0));
			} else {
				prop_assert_eq!((p.x, p.y), (nx, ny));
			}
		}
	}
}
