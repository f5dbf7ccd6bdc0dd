//! Presentation tuning for star fields: colors, opacity and glow factors.

use crate::components::scroll::Section;

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

/// Tailwind blue-500.
const BLUE: Color = Color::rgb(59, 130, 246);
/// Tailwind purple-500.
const PURPLE: Color = Color::rgb(168, 85, 247);

/// How a section paints its stars and the cursor glow.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionStyle {
	/// Multiplier applied to star brightness to obtain fill opacity.
	pub opacity_factor: f64,
	/// Multiplier applied to star brightness to obtain glow intensity.
	pub glow_factor: f64,
	/// Star color (glow uses the same hue).
	pub star_color: Color,
	/// Radius of the decorative glow following the pointer.
	pub cursor_glow_radius: f64,
	/// Center color of the pointer glow, alpha included.
	pub cursor_glow_color: Color,
}

impl SectionStyle {
	/// Full-brightness stars with a strong blue cursor halo.
	pub fn hero() -> Self {
		Self {
			opacity_factor: 1.0,
			glow_factor: 0.5,
			star_color: Color::rgb(255, 255, 255),
			cursor_glow_radius: 64.0,
			cursor_glow_color: BLUE.with_alpha(0.1),
		}
	}

	/// Dimmed stars with a faint blue halo.
	pub fn standard() -> Self {
		Self {
			opacity_factor: 0.7,
			glow_factor: 0.3,
			star_color: Color::rgb(255, 255, 255),
			cursor_glow_radius: 48.0,
			cursor_glow_color: BLUE.with_alpha(0.05),
		}
	}

	pub fn for_section(section: Section) -> Self {
		match section {
			Section::Home => Self::hero(),
			Section::Skills => Self::skills(),
			Section::About | Section::Projects | Section::Contact => Self::standard(),
		}
	}

	/// Dimmest stars, with a purple halo.
	pub fn skills() -> Self {
		Self {
			opacity_factor: 0.6,
			glow_factor: 0.2,
			star_color: Color::rgb(255, 255, 255),
			cursor_glow_radius: 64.0,
			cursor_glow_color: PURPLE.with_alpha(0.1),
		}
	}
}

impl Default for SectionStyle {
	fn default() -> Self {
		Self::standard()
	}
}
