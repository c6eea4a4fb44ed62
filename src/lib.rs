//! magnet-particles: ambient particle field with pointer magnetism.
//!
//! This crate provides a WASM-based canvas component that renders drifting,
//! fading particles which lean toward the pointer and pause while off-screen.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

#[cfg(target_arch = "wasm32")]
use getrandom as _;

pub mod components;

pub use components::particles::{ParticleConfig, Particles, ParticlesFromConfig};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("magnet-particles: logging initialized");
}

/// Parses the page-supplied particle options.
fn parse_particle_config(json_text: &str) -> Result<ParticleConfig, serde_json::Error> {
	serde_json::from_str::<ParticleConfig>(json_text)
}

/// Load particle options from a script element with id="particles-config".
/// Expected format: JSON object with any of the camelCase option keys.
fn load_particle_config() -> Option<ParticleConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particles-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match parse_particle_config(&json_text) {
		Ok(config) => {
			info!(
				"magnet-particles: loaded config ({} particles, color {})",
				config.quantity, config.circle_color
			);
			Some(config)
		}
		Err(e) => {
			warn!("magnet-particles: failed to parse particle config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads options from the DOM and renders a full-viewport particle field.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_particle_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Particles" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-particles" style="position: fixed; inset: 0;">
			<ParticlesFromConfig config=config />
		</div>
	}
}
