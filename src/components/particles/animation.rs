//! Frame scheduling state machine.
//!
//! The loop is either `Idle` (nothing scheduled) or `Running` (a frame is
//! pending or executing). Frames are requested through a [`FrameScheduler`],
//! which is `requestAnimationFrame` in the browser and a hand-cranked
//! scheduler in tests.

use log::{debug, warn};

/// Opaque id of a scheduled frame, as returned by `requestAnimationFrame`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// Display-refresh scheduling primitive.
///
/// `request_frame` arranges for the owner's frame callback to run once;
/// it returns `None` when the host refused the request.
pub trait FrameScheduler {
	/// Schedules one run of the frame callback.
	fn request_frame(&mut self) -> Option<FrameHandle>;
	/// Cancels a frame that has not run yet.
	fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Whether the frame chain is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
	/// Nothing scheduled.
	#[default]
	Idle,
	/// A frame is pending or executing.
	Running,
}

/// Owns the scheduler and the pending frame handle.
pub struct AnimationLoop<F> {
	scheduler: F,
	state: LoopState,
	pending: Option<FrameHandle>,
}

impl<F: FrameScheduler> AnimationLoop<F> {
	pub fn new(scheduler: F) -> Self {
		Self {
			scheduler,
			state: LoopState::Idle,
			pending: None,
		}
	}

	pub fn state(&self) -> LoopState {
		self.state
	}

	pub fn is_running(&self) -> bool {
		self.state == LoopState::Running
	}

	pub fn pending(&self) -> Option<FrameHandle> {
		self.pending
	}

	pub fn scheduler(&self) -> &F {
		&self.scheduler
	}

	/// `Idle -> Running`. Does nothing if running or a frame is already pending.
	///
	/// Returns `true` if a new frame chain was started.
	pub fn start(&mut self) -> bool {
		if self.is_running() || self.pending.is_some() {
			return false;
		}
		self.schedule_next();
		self.is_running()
	}

	/// Called at the top of each scheduled frame; the pending handle is spent.
	///
	/// Returns `false` (and goes idle) when the surface is no longer in view,
	/// in which case the frame body must not run.
	pub fn begin_frame(&mut self, in_view: bool) -> bool {
		self.pending = None;
		if !in_view {
			if self.is_running() {
				debug!("particles: out of view, loop idle");
			}
			self.state = LoopState::Idle;
			return false;
		}
		self.state = LoopState::Running;
		true
	}

	/// Requests the next frame, dropping to `Idle` if the host refuses.
	pub fn schedule_next(&mut self) {
		match self.scheduler.request_frame() {
			Some(handle) => {
				self.pending = Some(handle);
				self.state = LoopState::Running;
			}
			None => {
				warn!("particles: frame request failed, loop idle");
				self.pending = None;
				self.state = LoopState::Idle;
			}
		}
	}

	/// Cancels any pending frame and goes idle.
	pub fn teardown(&mut self) {
		if let Some(handle) = self.pending.take() {
			self.scheduler.cancel_frame(handle);
		}
		self.state = LoopState::Idle;
	}
}
