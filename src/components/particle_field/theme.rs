//! Theme palettes for the particle field.
//!
//! Each named theme carries a fixed ordered palette of three colors.
//! Particles pick a random palette entry; the pointer trail always uses the
//! first entry.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
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

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Fixed ordered list of colors associated with a theme.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
	pub colors: [Color; 3],
}

impl Palette {
	/// Color at `index` modulo the palette length.
	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}

	/// First palette entry, used for the pointer trail.
	pub fn primary(&self) -> Color {
		self.colors[0]
	}
}

/// Named theme, mirroring the site's `data-theme` attribute values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeName {
	/// Blue and purple accents on a dark page (default and fallback).
	#[default]
	Dark,
	/// Slate and sky accents for the light page.
	Light,
	/// Orange and red accents for the warm page.
	Warm,
}

impl ThemeName {
	/// Parses a `data-theme` attribute value. Unknown names fall back to
	/// [`ThemeName::Dark`].
	pub fn from_attr(value: &str) -> Self {
		match value {
			"light" => Self::Light,
			"warm" => Self::Warm,
			_ => Self::Dark,
		}
	}

	/// The `data-theme` attribute value for this theme.
	pub fn as_attr(self) -> &'static str {
		match self {
			Self::Dark => "dark",
			Self::Light => "light",
			Self::Warm => "warm",
		}
	}

	/// The palette for this theme.
	pub fn palette(self) -> Palette {
		match self {
			// Blue, purple, cyan
			Self::Dark => Palette {
				colors: [
					Color::rgb(0x3b, 0x82, 0xf6),
					Color::rgb(0x8b, 0x5c, 0xf6),
					Color::rgb(0x06, 0xb6, 0xd4),
				],
			},
			// Slate, sky, blue
			Self::Light => Palette {
				colors: [
					Color::rgb(0x64, 0x74, 0x8b),
					Color::rgb(0x0e, 0xa5, 0xe9),
					Color::rgb(0x3b, 0x82, 0xf6),
				],
			},
			// Orange, coral, red
			Self::Warm => Palette {
				colors: [
					Color::rgb(0xf5, 0x9e, 0x0b),
					Color::rgb(0xf9, 0x73, 0x16),
					Color::rgb(0xef, 0x44, 0x44),
				],
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_attr_known_names() {
		assert_eq!(ThemeName::from_attr("dark"), ThemeName::Dark);
		assert_eq!(ThemeName::from_attr("light"), ThemeName::Light);
		assert_eq!(ThemeName::from_attr("warm"), ThemeName::Warm);
	}

	#[test]
	fn attr_round_trip() {
		for theme in [ThemeName::Dark, ThemeName::Light, ThemeName::Warm] {
			assert_eq!(ThemeName::from_attr(theme.as_attr()), theme);
		}
	}

	#[test]
	fn from_attr_unknown_falls_back_to_dark() {
		assert_eq!(ThemeName::from_attr(""), ThemeName::Dark);
		assert_eq!(ThemeName::from_attr("neon"), ThemeName::Dark);
	}

	#[test]
	fn palette_primary_is_first_entry() {
		for theme in [ThemeName::Dark, ThemeName::Light, ThemeName::Warm] {
			let palette = theme.palette();
			assert_eq!(palette.primary(), palette.colors[0]);
		}
	}

	#[test]
	fn palette_get_wraps() {
		let palette = ThemeName::Dark.palette();
		assert_eq!(palette.get(0), palette.get(3));
		assert_eq!(palette.get(2), palette.get(5));
	}

	#[test]
	fn to_css_hex_and_rgba() {
		assert_eq!(Color::rgb(0x3b, 0x82, 0xf6).to_css(), "#3b82f6");
		assert_eq!(
			Color::rgb(0x3b, 0x82, 0xf6).with_alpha(0.5).to_css(),
			"rgba(59, 130, 246, 0.5)"
		);
	}
}
