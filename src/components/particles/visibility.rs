//! Visibility gate: pauses the animation loop while the surface is off-screen.

/// What a visibility report asks of the animation loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityChange {
	/// Hidden to visible; start the loop unless it is already running.
	BecameVisible,
	/// The surface is hidden; the next scheduled frame halts.
	Hidden,
	/// Still visible, nothing to do.
	Unchanged,
}

/// Tracks the "in view" flag checked by every scheduled frame.
///
/// Hiding never cancels a pending frame; that frame sees the cleared flag
/// and stops rescheduling.
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityGate {
	in_view: bool,
}

impl VisibilityGate {
	pub fn report(&mut self, visible: bool) -> VisibilityChange {
		match (visible, self.in_view) {
			(true, false) => {
				self.in_view = true;
				VisibilityChange::BecameVisible
			}
			(true, true) => VisibilityChange::Unchanged,
			(false, _) => {
				self.in_view = false;
				VisibilityChange::Hidden
			}
		}
	}

	pub fn in_view(&self) -> bool {
		self.in_view
	}

	/// Forces the gate closed, used on teardown.
	pub fn close(&mut self) {
		self.in_view = false;
	}
}
