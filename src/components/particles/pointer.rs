//! Pointer tracking for the magnetism effect.

/// Pointer offset relative to the surface center, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
	/// Positive to the right of center.
	pub x: f64,
	/// Positive below center.
	pub y: f64,
}

/// Top-left corner of the surface in client (viewport) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceOrigin {
	/// Distance from the viewport's left edge.
	pub left: f64,
	/// Distance from the viewport's top edge.
	pub top: f64,
}

/// Remembers the last raw pointer position and the last offset that landed
/// inside the surface.
///
/// Moves outside the surface leave the committed offset where it was, so
/// particles keep leaning toward the last in-bounds pointer position.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
	raw: (f64, f64),
	offset: PointerOffset,
}

impl PointerTracker {
	/// Records a pointer move at client coordinates `(client_x, client_y)`.
	///
	/// Returns `true` when the move committed a new offset.
	pub fn on_move(
		&mut self,
		client_x: f64,
		client_y: f64,
		origin: SurfaceOrigin,
		width: f64,
		height: f64,
	) -> bool {
		self.raw = (client_x, client_y);

		let (half_w, half_h) = (width / 2.0, height / 2.0);
		let x = client_x - origin.left - half_w;
		let y = client_y - origin.top - half_h;

		let inside = x > -half_w && x < half_w && y > -half_h && y < half_h;
		if inside {
			self.offset = PointerOffset { x, y };
		}
		inside
	}

	/// Offset read by the simulation step.
	pub fn offset(&self) -> PointerOffset {
		self.offset
	}

	/// Last raw client position, committed or not.
	pub fn raw(&self) -> (f64, f64) {
		self.raw
	}
}
