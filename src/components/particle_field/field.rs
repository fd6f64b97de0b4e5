//! A population of particles sharing one surface.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::color::ColorTemplate;
use super::particle::Particle;
use super::surface::Surface;

/// Owns a flat collection of particles and advances them once per frame.
///
/// Spawn parameters from the last [`initialize`](Self::initialize) are kept so
/// that [`set_count`](Self::set_count) can grow the population later.
pub struct ParticleField {
	particles: Vec<Particle>,
	rng: SmallRng,
	growth_rate: f64,
	speed_scale: f64,
	radius_scale: f64,
	width: f64,
	height: f64,
}

impl ParticleField {
	pub fn new(growth_rate: f64, seed: u64) -> Self {
		Self {
			particles: Vec::new(),
			rng: SmallRng::seed_from_u64(seed),
			growth_rate,
			speed_scale: 0.0,
			radius_scale: 0.0,
			width: 0.0,
			height: 0.0,
		}
	}

	/// Replace the whole population with `count` fresh particles.
	pub fn initialize(
		&mut self,
		count: usize,
		width: f64,
		height: f64,
		speed_scale: f64,
		radius_scale: f64,
	) {
		self.speed_scale = speed_scale;
		self.radius_scale = radius_scale;
		self.width = width;
		self.height = height;
		self.particles.clear();
		self.particles.reserve(count);
		for _ in 0..count {
			let p = self.spawn();
			self.particles.push(p);
		}
	}

	fn spawn(&mut self) -> Particle {
		Particle::create(
			&mut self.rng,
			self.width,
			self.height,
			self.speed_scale,
			self.radius_scale,
			self.growth_rate,
		)
	}

	/// Grow or shrink the live population. Surviving particles are untouched;
	/// new ones start invisible at a random position.
	pub fn set_count(&mut self, count: usize) {
		if count <= self.particles.len() {
			self.particles.truncate(count);
			return;
		}
		let missing = count - self.particles.len();
		self.particles.reserve(missing);
		for _ in 0..missing {
			let p = self.spawn();
			self.particles.push(p);
		}
	}

	pub fn tick(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		for p in &mut self.particles {
			p.advance(&mut self.rng, width, height);
		}
	}

	pub fn draw<S: Surface + ?Sized>(&self, surface: &S, template: &ColorTemplate) {
		surface.clear(self.width, self.height);
		for p in &self.particles {
			p.render(surface, template);
		}
	}

	pub fn clear(&mut self) {
		self.particles.clear();
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn particles_mut(&mut self) -> &mut [Particle] {
		&mut self.particles
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}
