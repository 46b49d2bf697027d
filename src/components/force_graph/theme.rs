//! Visual theming for the force graph.
//!
//! Background, edge and node styles plus the palette nodes are auto-colored from.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha (0.0 = transparent, 1.0 = opaque).
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with a different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		let up = |c: u8| (c as f64 + (255.0 - c as f64) * f) as u8;
		Self {
			r: up(self.r),
			g: up(self.g),
			b: up(self.b),
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		let down = |c: u8| (c as f64 * f) as u8;
		Self {
			r: down(self.r),
			g: down(self.g),
			b: down(self.b),
			a: self.a,
		}
	}

	/// CSS string, hex when opaque and `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			self.to_css_rgb()
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// CSS hex string, ignoring alpha.
	pub fn to_css_rgb(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// Ordered colors, indexed by group.
#[derive(Clone, Debug)]
pub struct NodePalette {
	/// Palette entries.
	pub colors: Vec<Color>,
}

impl NodePalette {
	/// Warm root, amber categories, cool funders.
	pub fn slate() -> Self {
		Self {
			colors: vec![
				Color::rgb(214, 96, 77),   // Vermilion
				Color::rgb(221, 161, 94),  // Amber
				Color::rgb(108, 142, 173), // Air force blue
				Color::rgb(119, 158, 165), // Desaturated cyan
			],
		}
	}

	/// Cool teals and purples.
	pub fn aurora() -> Self {
		Self {
			colors: vec![
				Color::rgb(190, 110, 140), // Orchid
				Color::rgb(130, 120, 150), // Wisteria
				Color::rgb(100, 145, 135), // Eucalyptus
				Color::rgb(120, 130, 160), // Periwinkle
			],
		}
	}

	/// Entry at `index`, wrapping around.
	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Primary background color
	pub color: Color,
	/// Center color of the radial gradient
	pub color_secondary: Color,
	/// Whether to use radial gradient
	pub use_gradient: bool,
}

/// Edge visual style.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	/// Base edge color
	pub color: Color,
	/// Color of edges touching a hovered node
	pub highlight_color: Color,
}

/// Node visual style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Whether nodes are shaded as spheres
	pub use_gradient: bool,
	/// Alpha of nodes far from the camera (nearest nodes are opaque)
	pub fog: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Name used to select the theme
	pub name: &'static str,
	/// Background style
	pub background: BackgroundStyle,
	/// Edge style
	pub edge: EdgeStyle,
	/// Node style
	pub node: NodeStyle,
	/// Palette nodes are colored from
	pub palette: NodePalette,
}

impl Theme {
	/// Dark slate theme (default)
	pub fn default_theme() -> Self {
		Self {
			name: "default",
			background: BackgroundStyle {
				color: Color::rgb(12, 14, 20),
				color_secondary: Color::rgb(28, 32, 44),
				use_gradient: true,
			},
			edge: EdgeStyle {
				color: Color::rgba(180, 190, 205, 0.35),
				highlight_color: Color::rgba(235, 240, 250, 0.9),
			},
			node: NodeStyle {
				use_gradient: true,
				fog: 0.55,
			},
			palette: NodePalette::slate(),
		}
	}

	/// Flat, low-contrast theme
	pub fn midnight() -> Self {
		Self {
			name: "midnight",
			background: BackgroundStyle {
				color: Color::rgb(18, 20, 28),
				color_secondary: Color::rgb(18, 20, 28),
				use_gradient: false,
			},
			edge: EdgeStyle {
				color: Color::rgba(100, 120, 150, 0.45),
				highlight_color: Color::rgba(170, 190, 220, 0.9),
			},
			node: NodeStyle {
				use_gradient: false,
				fog: 0.7,
			},
			palette: NodePalette::aurora(),
		}
	}

	/// Looks up a built-in theme by name.
	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"default" => Some(Self::default_theme()),
			"midnight" => Some(Self::midnight()),
			_ => None,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_css_output() {
		assert_eq!(Color::rgb(255, 0, 16).to_css(), "#ff0010");
		assert_eq!(
			Color::rgba(1, 2, 3, 0.5).to_css(),
			"rgba(1, 2, 3, 0.5)"
		);
	}

	#[test]
	fn test_lighten_darken_bounds() {
		let c = Color::rgb(100, 100, 100);
		assert_eq!(c.lighten(1.0), Color::rgb(255, 255, 255));
		assert_eq!(c.darken(1.0), Color::rgb(0, 0, 0));
		assert_eq!(c.lighten(0.0), c);
	}

	#[test]
	fn test_theme_lookup() {
		assert_eq!(Theme::by_name("midnight").map(|t| t.name), Some("midnight"));
		assert!(Theme::by_name("neon").is_none());
	}
}
