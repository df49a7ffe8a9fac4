//! Visual theming for the mind map canvas.

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// Parses a CSS color string. Supports hex (`#RRGGBB`) and
	/// `rgb()`/`rgba()` functional notation; anything else falls back to gray.
	pub fn parse(color_str: &str) -> Color {
		if color_str.starts_with('#') && color_str.len() == 7 {
			let r = u8::from_str_radix(&color_str[1..3], 16).unwrap_or(128);
			let g = u8::from_str_radix(&color_str[3..5], 16).unwrap_or(128);
			let b = u8::from_str_radix(&color_str[5..7], 16).unwrap_or(128);
			Color::rgb(r, g, b)
		} else if color_str.starts_with("rgb") {
			let nums: Vec<&str> = color_str
				.trim_start_matches("rgba(")
				.trim_start_matches("rgb(")
				.trim_end_matches(')')
				.split(',')
				.collect();
			let r = nums
				.first()
				.and_then(|s| s.trim().parse().ok())
				.unwrap_or(128);
			let g = nums
				.get(1)
				.and_then(|s| s.trim().parse().ok())
				.unwrap_or(128);
			let b = nums
				.get(2)
				.and_then(|s| s.trim().parse().ok())
				.unwrap_or(128);
			let a = nums
				.get(3)
				.and_then(|s| s.trim().parse().ok())
				.unwrap_or(1.0);
			Color::rgba(r, g, b, a)
		} else {
			Color::rgb(128, 128, 128)
		}
	}
}

/// Complete visual theme for the canvas and the SVG export.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Primary background color.
	pub background: Color,
	/// Secondary background color for the radial gradient.
	pub background_secondary: Color,
	/// Whether the background uses a radial gradient.
	pub use_gradient: bool,
	/// Link line and arrowhead color.
	pub link: Color,
	/// Fill for the root node box.
	pub root_fill: Color,
	/// Fill for non-root nodes without a stored color.
	pub node_fill: Color,
	/// Label color on the root node.
	pub root_text: Color,
	/// Label color on non-root nodes.
	pub node_text: Color,
	/// Ring color for the selected node.
	pub selection: Color,
	/// Corner radius of node boxes.
	pub corner_radius: f64,
	/// Label font for non-root nodes.
	pub label_font: &'static str,
	/// Label font for the root node.
	pub root_label_font: &'static str,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			background: Color::rgb(246, 248, 250),
			background_secondary: Color::rgb(255, 255, 255),
			use_gradient: true,
			link: Color::rgba(120, 135, 150, 0.6),
			root_fill: Color::rgb(0x0e, 0xa5, 0xe9),
			node_fill: Color::rgb(255, 255, 255),
			root_text: Color::rgb(255, 255, 255),
			node_text: Color::rgb(0x33, 0x33, 0x33),
			selection: Color::rgb(0x8b, 0x5c, 0xf6),
			corner_radius: 8.0,
			label_font: "13px sans-serif",
			root_label_font: "bold 14px sans-serif",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_hex_and_rgba() {
		let c = Color::parse("#0ea5e9");
		assert_eq!((c.r, c.g, c.b), (0x0e, 0xa5, 0xe9));

		let c = Color::parse("rgba(10, 20, 30, 0.5)");
		assert_eq!((c.r, c.g, c.b), (10, 20, 30));
		assert!((c.a - 0.5).abs() < 1e-9);

		let c = Color::parse("hotpink");
		assert_eq!((c.r, c.g, c.b), (128, 128, 128));
	}

	#[test]
	fn css_roundtrip_opaque() {
		assert_eq!(Color::rgb(14, 165, 233).to_css(), "#0ea5e9");
		assert_eq!(Color::rgba(1, 2, 3, 0.25).to_css(), "rgba(1, 2, 3, 0.25)");
	}
}
