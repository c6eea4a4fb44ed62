//! Leptos component hosting the particle canvas.
//!
//! The component sizes a canvas to its wrapper, builds a [`ParticleEngine`]
//! over the canvas 2D context and `requestAnimationFrame`, and wires window
//! resize, visibility and pointer events into it. Everything attached here is
//! released when the component is cleaned up.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, MouseEvent};

use super::config::ParticleConfig;
use super::engine::ParticleEngine;
use super::subscription::Subscriptions;
use super::web::{
	FrameCallback, WebFrameScheduler, client_origin, fit_canvas, listen_window_resize,
	observe_visibility,
};

type WebEngine = ParticleEngine<CanvasRenderingContext2d, WebFrameScheduler>;

/// Everything a mounted canvas keeps alive. Dropping it tears the field down.
struct Mount {
	engine: Rc<RefCell<WebEngine>>,
	frame: FrameCallback,
	subscriptions: Subscriptions,
}

impl Drop for Mount {
	fn drop(&mut self) {
		self.engine.borrow_mut().teardown();
		self.subscriptions.release_all();
		// The frame closure holds the engine; dropping it breaks the cycle.
		self.frame.borrow_mut().take();
	}
}

/// Renders the ambient particle field inside a wrapper that fills its parent.
///
/// All options default to the values in [`ParticleConfig::default`]. An
/// invalid option (zero `ease`, malformed `circle_color`, ...) is logged and
/// leaves the canvas blank.
#[component]
pub fn Particles(
	#[prop(default = 100)] quantity: usize,
	#[prop(default = 0.4)] size: f64,
	#[prop(into, default = "#ffffff".to_string())] circle_color: String,
	#[prop(default = 50.0)] staticity: f64,
	#[prop(default = 50.0)] ease: f64,
	#[prop(default = 1.0)] particle_speed: f64,
	#[prop(default = 0.0)] vx: f64,
	#[prop(default = 0.0)] vy: f64,
) -> impl IntoView {
	let wrapper_ref = NodeRef::<leptos::html::Div>::new();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mount: Rc<RefCell<Option<Mount>>> = Rc::new(RefCell::new(None));
	let config = ParticleConfig {
		quantity,
		size,
		circle_color,
		staticity,
		ease,
		particle_speed,
		vx,
		vy,
	};

	let mount_init = mount.clone();
	Effect::new(move |_| {
		let (Some(canvas), Some(wrapper)) = (canvas_ref.get(), wrapper_ref.get()) else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let wrapper: Element = wrapper.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = fit_canvas(&canvas, &wrapper);
		let ctx = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
		if ctx.is_none() {
			warn!("particles: no 2d context, simulating without drawing");
		}

		let frame: FrameCallback = Rc::new(RefCell::new(None));
		let scheduler = WebFrameScheduler::new(window.clone(), frame.clone());
		let engine = match ParticleEngine::init(&config, ctx, scheduler, w, h) {
			Ok(engine) => Rc::new(RefCell::new(engine)),
			Err(e) => {
				error!("particles: invalid configuration: {}", e);
				return;
			}
		};

		let engine_frame = engine.clone();
		*frame.borrow_mut() = Some(Closure::new(move || {
			engine_frame.borrow_mut().on_frame();
		}));

		let mut subscriptions = Subscriptions::default();

		let (engine_resize, canvas_resize, wrapper_resize) =
			(engine.clone(), canvas.clone(), wrapper.clone());
		if let Some(sub) = listen_window_resize(&window, move || {
			let (nw, nh) = fit_canvas(&canvas_resize, &wrapper_resize);
			engine_resize.borrow_mut().on_resize(nw, nh);
		}) {
			subscriptions.push(sub);
		}

		let engine_visible = engine.clone();
		match observe_visibility(&canvas, move |visible| {
			engine_visible.borrow_mut().on_visibility_change(visible);
		}) {
			Some(sub) => subscriptions.push(sub),
			None => {
				warn!("particles: no visibility signal, assuming visible");
				engine.borrow_mut().on_visibility_change(true);
			}
		}

		// Replacing an earlier mount tears it down first.
		*mount_init.borrow_mut() = Some(Mount {
			engine,
			frame,
			subscriptions,
		});
	});

	let mount_cleanup = StoredValue::new_local(mount.clone());
	on_cleanup(move || {
		mount_cleanup.try_update_value(|slot| {
			slot.borrow_mut().take();
		});
	});

	let mount_mm = mount.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: Element = canvas.into();
		let origin = client_origin(&canvas);

		if let Some(ref m) = *mount_mm.borrow() {
			m.engine
				.borrow_mut()
				.on_pointer_move(ev.client_x() as f64, ev.client_y() as f64, origin);
		}
	};

	view! {
		<div
			node_ref=wrapper_ref
			class="particles-wrapper"
			on:mousemove=on_mousemove
			style="position: relative; width: 100%; height: 100%;"
		>
			<canvas node_ref=canvas_ref class="particles-canvas" style="display: block;" />
		</div>
	}
}

/// Mounts [`Particles`] from a whole [`ParticleConfig`].
#[component]
pub fn ParticlesFromConfig(#[prop(into)] config: ParticleConfig) -> impl IntoView {
	view! {
		<Particles
			quantity=config.quantity
			size=config.size
			circle_color=config.circle_color
			staticity=config.staticity
			ease=config.ease
			particle_speed=config.particle_speed
			vx=config.vx
			vy=config.vy
		/>
	}
}
