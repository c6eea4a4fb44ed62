//! Hex color parsing for the particle fill.

use thiserror::Error;

/// Errors produced while parsing a hex color string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
	/// The string had no digits after stripping `#`.
	#[error("color string is empty")]
	Empty,
	/// Only 3- and 6-digit forms are accepted.
	#[error("expected 3 or 6 hex digits, got {0}")]
	InvalidLength(usize),
	/// A character outside `[0-9a-fA-F]`.
	#[error("invalid hex digit {0:?}")]
	InvalidDigit(char),
}

/// An opaque 8-bit RGB triple.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
}

impl Rgb {
	/// `#ffffff`, the default fill.
	pub const WHITE: Rgb = Rgb::new(255, 255, 255);

	/// Builds a color from its channels.
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Channel triple as an array, in `[r, g, b]` order.
	pub fn channels(self) -> [u8; 3] {
		[self.r, self.g, self.b]
	}

	/// CSS `rgba()` fill string with the given alpha.
	pub fn to_css_rgba(self, alpha: f64) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
	}
}

/// Parses `#rgb`, `#rrggbb`, `rgb` or `rrggbb` into an [`Rgb`].
///
/// The 3-digit form duplicates each digit, so `#fa0` reads as `#ffaa00`.
/// At most one leading `#` is stripped.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
	let trimmed = hex.trim();
	let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
	if digits.is_empty() {
		return Err(ColorError::Empty);
	}
	if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
		return Err(ColorError::InvalidDigit(bad));
	}

	let expanded: String = match digits.len() {
		3 => digits.chars().flat_map(|c| [c, c]).collect(),
		6 => digits.to_string(),
		n => return Err(ColorError::InvalidLength(n)),
	};

	let value = u32::from_str_radix(&expanded, 16)
		.map_err(|_| ColorError::InvalidLength(expanded.len()))?;
	Ok(Rgb {
		r: ((value >> 16) & 0xff) as u8,
		g: ((value >> 8) & 0xff) as u8,
		b: (value & 0xff) as u8,
	})
}
