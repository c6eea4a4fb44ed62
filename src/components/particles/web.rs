//! Browser bindings for the engine's host seams.
//!
//! `requestAnimationFrame` scheduling, window resize, element visibility via
//! `IntersectionObserver`, and canvas sizing. Listeners are returned as
//! [`Subscription`]s that detach the exact closure they attached.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlCanvasElement, IntersectionObserver, IntersectionObserverEntry, Window};

use super::animation::{FrameHandle, FrameScheduler};
use super::pointer::SurfaceOrigin;
use super::subscription::Subscription;

/// Slot holding the frame closure. The scheduler passes it to
/// `requestAnimationFrame`; the component fills it once the engine exists.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// [`FrameScheduler`] over `window.requestAnimationFrame`.
pub struct WebFrameScheduler {
	window: Window,
	callback: FrameCallback,
}

impl WebFrameScheduler {
	pub fn new(window: Window, callback: FrameCallback) -> Self {
		Self { window, callback }
	}
}

impl FrameScheduler for WebFrameScheduler {
	fn request_frame(&mut self) -> Option<FrameHandle> {
		let slot = self.callback.borrow();
		let callback = slot.as_ref()?;
		match self
			.window
			.request_animation_frame(callback.as_ref().unchecked_ref())
		{
			Ok(id) => Some(FrameHandle(id)),
			Err(e) => {
				warn!("particles: requestAnimationFrame failed: {:?}", e);
				None
			}
		}
	}

	fn cancel_frame(&mut self, handle: FrameHandle) {
		if let Err(e) = self.window.cancel_animation_frame(handle.0) {
			warn!("particles: cancelAnimationFrame failed: {:?}", e);
		}
	}
}

/// Calls `handler` on every window resize until the subscription is released.
pub fn listen_window_resize(
	window: &Window,
	handler: impl FnMut() + 'static,
) -> Option<Subscription> {
	let callback = Closure::<dyn FnMut()>::new(handler);
	if let Err(e) =
		window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
	{
		warn!("particles: could not listen for resize: {:?}", e);
		return None;
	}

	let window = window.clone();
	Some(Subscription::new(move || {
		let _ = window
			.remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
	}))
}

/// Reports `element`'s intersection state to `handler` whenever it flips.
pub fn observe_visibility(
	element: &Element,
	mut handler: impl FnMut(bool) + 'static,
) -> Option<Subscription> {
	let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
		// Entries are queued oldest first; the last one is current.
		let latest = entries
			.iter()
			.filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
			.last();
		if let Some(entry) = latest {
			handler(entry.is_intersecting());
		}
	});

	let observer = match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
		Ok(observer) => observer,
		Err(e) => {
			warn!("particles: IntersectionObserver unavailable: {:?}", e);
			return None;
		}
	};
	observer.observe(element);

	Some(Subscription::new(move || {
		observer.disconnect();
		drop(callback);
	}))
}

/// Sizes the canvas backing store to `container`'s layout box and returns
/// the resulting pixel dimensions.
pub fn fit_canvas(canvas: &HtmlCanvasElement, container: &Element) -> (f64, f64) {
	let rect = container.get_bounding_client_rect();
	canvas.set_width(rect.width() as u32);
	canvas.set_height(rect.height() as u32);
	(canvas.width() as f64, canvas.height() as f64)
}

/// Top-left corner of `element` in client coordinates.
pub fn client_origin(element: &Element) -> SurfaceOrigin {
	let rect = element.get_bounding_client_rect();
	SurfaceOrigin {
		left: rect.left(),
		top: rect.top(),
	}
}
