//! The live particle collection and the per-frame body that drives it.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::config::Settings;
use super::particle::Particle;
use super::pointer::PointerOffset;
use super::render::{self, Surface};
use super::simulation::{self, StepOutcome};

/// Particles plus the surface bounds they live in.
pub struct ParticleField {
	particles: Vec<Particle>,
	settings: Settings,
	width: f64,
	height: f64,
	rng: StdRng,
}

impl ParticleField {
	/// Empty field seeded from OS entropy.
	pub fn new(settings: Settings, width: f64, height: f64) -> Self {
		Self::with_rng(settings, width, height, StdRng::from_entropy())
	}

	pub fn with_rng(settings: Settings, width: f64, height: f64, rng: StdRng) -> Self {
		Self {
			particles: Vec::with_capacity(settings.quantity),
			settings,
			width,
			height,
			rng,
		}
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn dimensions(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Discards every particle and refills to `quantity` at the new size.
	///
	/// The new particles are drawn once (fully transparent) so the surface
	/// holds exactly the fresh collection.
	pub fn reset<S: Surface>(&mut self, width: f64, height: f64, surface: Option<&S>) {
		self.width = width;
		self.height = height;
		self.particles.clear();

		if let Some(surface) = surface {
			render::clear(surface, width, height);
		}

		for _ in 0..self.settings.quantity {
			let particle = self.spawn();
			if let Some(surface) = surface {
				render::draw_particle(surface, &particle, self.settings.color);
			}
			self.particles.push(particle);
		}
		debug!(
			"particles: reset {} particles at {}x{}",
			self.particles.len(),
			width,
			height
		);
	}

	/// One frame: clear, then step and draw every particle.
	///
	/// A particle that leaves the surface is replaced in its slot by a fresh
	/// one, drawn immediately and left unsimulated until the next frame.
	pub fn advance<S: Surface>(&mut self, mouse: PointerOffset, surface: Option<&S>) {
		if let Some(surface) = surface {
			render::clear(surface, self.width, self.height);
		}

		let (width, height) = (self.width, self.height);
		for i in 0..self.particles.len() {
			let outcome =
				simulation::step(&mut self.particles[i], &self.settings, width, height, mouse);
			if let Some(surface) = surface {
				render::draw_particle(surface, &self.particles[i], self.settings.color);
			}

			if outcome == StepOutcome::Expired {
				let replacement = self.spawn();
				if let Some(surface) = surface {
					render::draw_particle(surface, &replacement, self.settings.color);
				}
				self.particles[i] = replacement;
			}
		}
	}

	fn spawn(&mut self) -> Particle {
		Particle::spawn(&mut self.rng, self.width, self.height, &self.settings)
	}
}
