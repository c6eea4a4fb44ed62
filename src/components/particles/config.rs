//! Particle field configuration.
//!
//! [`ParticleConfig`] is the raw, host-facing option set (deserializable from
//! the page's JSON config). [`ParticleConfig::validate`] turns it into the
//! [`Settings`] the simulation reads every frame.

use serde::Deserialize;
use thiserror::Error;

use super::color::{ColorError, Rgb, hex_to_rgb};

/// Largest particle count a configuration may ask for.
pub const MAX_QUANTITY: usize = 10_000;

/// Errors raised when a configuration cannot drive the simulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
	/// A divisor (`ease`, `staticity`) was zero or negative.
	#[error("{field} must be greater than zero, got {value}")]
	NonPositive {
		/// Option name, as spelled in the JSON config.
		field: &'static str,
		/// Rejected value.
		value: f64,
	},
	/// NaN or infinite numeric option.
	#[error("{field} must be a finite number, got {value}")]
	NonFinite {
		/// Option name, as spelled in the JSON config.
		field: &'static str,
		/// Rejected value.
		value: f64,
	},
	/// Negative base radius.
	#[error("size must not be negative, got {0}")]
	NegativeSize(f64),
	/// `quantity` above [`MAX_QUANTITY`].
	#[error("quantity must be at most {max}, got {value}")]
	TooMany {
		/// Requested particle count.
		value: usize,
		/// Upper bound.
		max: usize,
	},
	/// `circleColor` is not a hex color.
	#[error("invalid circleColor: {0}")]
	Color(#[from] ColorError),
}

/// Host-supplied options, each defaulting independently.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticleConfig {
	/// Number of particles kept alive.
	pub quantity: usize,
	/// Base particle radius in pixels.
	pub size: f64,
	/// Fill color as 3- or 6-digit hex.
	pub circle_color: String,
	/// Divisor on magnetism; larger means less pull toward the pointer.
	pub staticity: f64,
	/// Divisor on the translate chase; larger means slower, smoother motion.
	pub ease: f64,
	/// Multiplier on drift.
	pub particle_speed: f64,
	/// Constant horizontal wind.
	pub vx: f64,
	/// Constant vertical wind.
	pub vy: f64,
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			quantity: 100,
			size: 0.4,
			circle_color: "#ffffff".to_string(),
			staticity: 50.0,
			ease: 50.0,
			particle_speed: 1.0,
			vx: 0.0,
			vy: 0.0,
		}
	}
}

impl ParticleConfig {
	/// Checks every option and parses the color.
	///
	/// `ease` and `staticity` are divisors in the magnetism easing, so zero or
	/// negative values are rejected here instead of producing non-finite offsets.
	pub fn validate(&self) -> Result<Settings, ConfigError> {
		for (field, value) in [
			("size", self.size),
			("staticity", self.staticity),
			("ease", self.ease),
			("particleSpeed", self.particle_speed),
			("vx", self.vx),
			("vy", self.vy),
		] {
			if !value.is_finite() {
				return Err(ConfigError::NonFinite { field, value });
			}
		}
		for (field, value) in [("staticity", self.staticity), ("ease", self.ease)] {
			if value <= 0.0 {
				return Err(ConfigError::NonPositive { field, value });
			}
		}
		if self.size < 0.0 {
			return Err(ConfigError::NegativeSize(self.size));
		}
		if self.quantity > MAX_QUANTITY {
			return Err(ConfigError::TooMany {
				value: self.quantity,
				max: MAX_QUANTITY,
			});
		}

		Ok(Settings {
			quantity: self.quantity,
			size: self.size,
			color: hex_to_rgb(&self.circle_color)?,
			staticity: self.staticity,
			ease: self.ease,
			particle_speed: self.particle_speed,
			vx: self.vx,
			vy: self.vy,
		})
	}
}

/// Validated, read-only settings used by the factory, step and renderer.
///
/// Fields mirror [`ParticleConfig`], with the color already parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
	/// Particles kept alive, at most [`MAX_QUANTITY`].
	pub quantity: usize,
	/// Base radius in pixels, never negative.
	pub size: f64,
	/// Parsed fill color.
	pub color: Rgb,
	/// Magnetism divisor, strictly positive.
	pub staticity: f64,
	/// Translate-chase divisor, strictly positive.
	pub ease: f64,
	/// Drift multiplier.
	pub particle_speed: f64,
	/// Horizontal wind.
	pub vx: f64,
	/// Vertical wind.
	pub vy: f64,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			quantity: 100,
			size: 0.4,
			color: Rgb::WHITE,
			staticity: 50.0,
			ease: 50.0,
			particle_speed: 1.0,
			vx: 0.0,
			vy: 0.0,
		}
	}
}
