//! Canvas rendering for the particle field.
//!
//! Drawing goes through the [`Surface`] trait so the simulation can run
//! against a real `CanvasRenderingContext2d` in the browser and a recording
//! surface in tests.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::color::Rgb;
use super::particle::Particle;

/// The handful of 2D drawing operations the particle field needs.
pub trait Surface {
	/// Erase a rectangle to transparent.
	fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64);
	/// Shift the current transform by `(x, y)`.
	fn translate(&self, x: f64, y: f64);
	/// Restore the identity transform.
	fn reset_transform(&self);
	/// Set the fill to a CSS color string.
	fn set_fill_style(&self, css: &str);
	/// Fill a full circle with the current fill style.
	fn fill_circle(&self, x: f64, y: f64, radius: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64) {
		CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
	}

	fn translate(&self, x: f64, y: f64) {
		let _ = CanvasRenderingContext2d::translate(self, x, y);
	}

	fn reset_transform(&self) {
		let _ = self.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
	}

	fn set_fill_style(&self, css: &str) {
		self.set_fill_style_str(css);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}
}

/// Wipes the whole surface.
pub fn clear(surface: &impl Surface, width: f64, height: f64) {
	surface.clear_rect(0.0, 0.0, width, height);
}

/// Paints one particle at its translated position with its current alpha.
///
/// The translation is undone before returning, so the surface transform is
/// always identity between particles.
pub fn draw_particle(surface: &impl Surface, particle: &Particle, color: Rgb) {
	surface.translate(particle.translate_x, particle.translate_y);
	surface.set_fill_style(&color.to_css_rgba(particle.alpha));
	surface.fill_circle(particle.x, particle.y, particle.size);
	surface.reset_transform();
}
