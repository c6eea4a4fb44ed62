//! Per-frame particle update: edge fade, drift, pointer magnetism and
//! exit detection.

use super::config::Settings;
use super::particle::Particle;
use super::pointer::PointerOffset;

/// Distance (pixels) over which particles fade out near an edge.
const EDGE_FADE_DISTANCE: f64 = 20.0;

/// Alpha gained per frame while fading in away from edges.
const FADE_IN_STEP: f64 = 0.02;

/// Whether a particle survived its update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
	Alive,
	/// Left the surface; the caller must replace it.
	Expired,
}

/// Linearly maps `value` from `[start1, end1]` onto `[start2, end2]`.
///
/// Negative results clamp to zero; there is no upper clamp.
pub fn remap_value(value: f64, start1: f64, end1: f64, start2: f64, end2: f64) -> f64 {
	let remapped = (value - start1) * (end2 - start2) / (end1 - start1) + start2;
	if remapped > 0.0 { remapped } else { 0.0 }
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
	let factor = 10f64.powi(decimals);
	(value * factor).round() / factor
}

/// Distance from the particle's drawn disc to the nearest surface edge.
pub fn closest_edge(particle: &Particle, width: f64, height: f64) -> f64 {
	let (cx, cy) = particle.center();
	let edges = [
		cx - particle.size,
		width - cx - particle.size,
		cy - particle.size,
		height - cy - particle.size,
	];
	edges.into_iter().fold(f64::INFINITY, f64::min)
}

/// Edge distance remapped to `[0, 1+]`, rounded to two decimals.
pub fn edge_factor(particle: &Particle, width: f64, height: f64) -> f64 {
	let distance = closest_edge(particle, width, height);
	round_to(remap_value(distance, 0.0, EDGE_FADE_DISTANCE, 0.0, 1.0), 2)
}

/// Advances one particle by one frame.
///
/// Alpha never exceeds `target_alpha`, and `dx`, `dy`, `magnetism` and
/// `target_alpha` are left untouched.
pub fn step(
	particle: &mut Particle,
	settings: &Settings,
	width: f64,
	height: f64,
	mouse: PointerOffset,
) -> StepOutcome {
	let edge = edge_factor(particle, width, height);
	if edge > 1.0 {
		particle.alpha = (particle.alpha + FADE_IN_STEP).min(particle.target_alpha);
	} else {
		particle.alpha = particle.target_alpha * edge;
	}

	particle.x += (particle.dx + settings.vx) * settings.particle_speed;
	particle.y += (particle.dy + settings.vy) * settings.particle_speed;

	let pull = settings.staticity / particle.magnetism;
	particle.translate_x += (mouse.x / pull - particle.translate_x) / settings.ease;
	particle.translate_y += (mouse.y / pull - particle.translate_y) / settings.ease;

	if particle.is_outside(width, height) {
		StepOutcome::Expired
	} else {
		StepOutcome::Alive
	}
}
