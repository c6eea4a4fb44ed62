//! Test doubles for the host seams: a surface that records draw calls and a
//! scheduler that hands out handles without a display clock.

use std::cell::{Cell, RefCell};

use super::animation::{FrameHandle, FrameScheduler};
use super::render::Surface;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
	Clear(f64, f64),
	Translate(f64, f64),
	ResetTransform,
	FillStyle(String),
	Circle(f64, f64, f64),
}

#[derive(Default)]
pub struct RecordingSurface {
	ops: RefCell<Vec<DrawOp>>,
	translation: Cell<(f64, f64)>,
	centers: RefCell<Vec<(f64, f64)>>,
}

impl RecordingSurface {
	pub fn ops(&self) -> Vec<DrawOp> {
		self.ops.borrow().clone()
	}

	/// Current accumulated translation.
	pub fn translation(&self) -> (f64, f64) {
		self.translation.get()
	}

	/// Circle centers in surface space (translation applied).
	pub fn circle_centers(&self) -> Vec<(f64, f64)> {
		self.centers.borrow().clone()
	}

	pub fn circle_count(&self) -> usize {
		self.ops
			.borrow()
			.iter()
			.filter(|op| matches!(op, DrawOp::Circle(..)))
			.count()
	}
}

impl Surface for RecordingSurface {
	fn clear_rect(&self, _x: f64, _y: f64, width: f64, height: f64) {
		self.ops.borrow_mut().push(DrawOp::Clear(width, height));
	}

	fn translate(&self, x: f64, y: f64) {
		let (tx, ty) = self.translation.get();
		self.translation.set((tx + x, ty + y));
		self.ops.borrow_mut().push(DrawOp::Translate(x, y));
	}

	fn reset_transform(&self) {
		self.translation.set((0.0, 0.0));
		self.ops.borrow_mut().push(DrawOp::ResetTransform);
	}

	fn set_fill_style(&self, css: &str) {
		self.ops.borrow_mut().push(DrawOp::FillStyle(css.to_string()));
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64) {
		let (tx, ty) = self.translation.get();
		self.centers.borrow_mut().push((x + tx, y + ty));
		self.ops.borrow_mut().push(DrawOp::Circle(x, y, radius));
	}
}

/// Scheduler driven by hand from tests.
#[derive(Debug, Default)]
pub struct ManualScheduler {
	pub requests: usize,
	pub cancelled: Vec<FrameHandle>,
	/// Requests still to be refused before handles are granted.
	refusals: usize,
	next_id: i32,
}

impl ManualScheduler {
	/// A host that refuses every frame request.
	pub fn unavailable() -> Self {
		Self::refusing(usize::MAX)
	}

	/// A host that refuses the first `count` requests.
	pub fn refusing(count: usize) -> Self {
		Self {
			refusals: count,
			..Self::default()
		}
	}
}

impl FrameScheduler for ManualScheduler {
	fn request_frame(&mut self) -> Option<FrameHandle> {
		if self.refusals > 0 {
			self.refusals -= 1;
			return None;
		}
		self.requests += 1;
		self.next_id += 1;
		Some(FrameHandle(self.next_id))
	}

	fn cancel_frame(&mut self, handle: FrameHandle) {
		self.cancelled.push(handle);
	}
}
