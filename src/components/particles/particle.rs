//! Particle record and its randomized factory.

use rand::Rng;

use super::config::Settings;

/// A single drifting, fading dot.
///
/// Only the position, translate offset and alpha evolve; `dx`, `dy`,
/// `magnetism` and `target_alpha` are fixed when the particle is spawned.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Base horizontal position.
	pub x: f64,
	/// Base vertical position.
	pub y: f64,
	/// Pointer-magnetism offset, applied at draw time.
	pub translate_x: f64,
	/// Vertical counterpart of `translate_x`.
	pub translate_y: f64,
	/// Radius in pixels.
	pub size: f64,
	/// Current opacity.
	pub alpha: f64,
	/// Opacity ceiling this particle fades toward.
	pub target_alpha: f64,
	/// Horizontal drift per frame, before `particle_speed`.
	pub dx: f64,
	/// Vertical drift per frame, before `particle_speed`.
	pub dy: f64,
	/// Strength of the pull toward the pointer.
	pub magnetism: f64,
}

impl Particle {
	/// Spawns a particle somewhere inside a `width` x `height` surface.
	///
	/// Positions are whole pixels; alpha starts at zero so every particle fades in.
	pub fn spawn<R: Rng + ?Sized>(
		rng: &mut R,
		width: f64,
		height: f64,
		settings: &Settings,
	) -> Self {
		let target_alpha = ((unit(rng) * 0.6 + 0.1) * 10.0).round() / 10.0;

		Self {
			x: (unit(rng) * width).floor(),
			y: (unit(rng) * height).floor(),
			translate_x: 0.0,
			translate_y: 0.0,
			size: (unit(rng) * 2.0).floor() + settings.size,
			alpha: 0.0,
			target_alpha,
			dx: (unit(rng) - 0.5) * 0.1,
			dy: (unit(rng) - 0.5) * 0.1,
			magnetism: 0.1 + unit(rng) * 4.0,
		}
	}

	/// Draw-time center, base position plus translate offset.
	pub fn center(&self) -> (f64, f64) {
		(self.x + self.translate_x, self.y + self.translate_y)
	}

	/// True once the base position has left the surface by more than the radius.
	pub fn is_outside(&self, width: f64, height: f64) -> bool {
		self.x < -self.size
			|| self.x > width + self.size
			|| self.y < -self.size
			|| self.y > height + self.size
	}
}

/// Uniform sample in `[0, 1)`.
fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
	rng.gen_range(0.0..1.0)
}
