//! Per-field tuning parameters and their validation.

use crate::components::scroll::Section;
use crate::error::ConfigurationError;

/// Fraction of the remaining offset a displaced star recovers per pointer event.
pub const DEFAULT_RETURN_RATE: f64 = 0.02;

/// Physics and population parameters for one star field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
	/// Number of stars, fixed for the lifetime of the field.
	pub particle_count: usize,
	/// Star diameter bounds, `[min, max]`.
	pub size_range: [f64; 2],
	/// Star brightness bounds, `[min, max]` within `[0, 1]`.
	pub brightness_range: [f64; 2],
	/// Full width of the symmetric per-axis velocity interval.
	/// Each component is drawn from `[-spread / 2, spread / 2]`.
	pub velocity_spread: f64,
	/// Pointer distance below which a star is pushed away from its rest position.
	pub repulsion_radius: f64,
	/// Maximum displacement, reached when the pointer sits on the rest position.
	pub repulsion_strength: f64,
	/// Easing factor back toward rest when the pointer is out of range.
	pub return_rate: f64,
}

impl FieldConfig {
	/// Dense, bright field behind the landing section.
	pub fn hero() -> Self {
		Self {
			particle_count: 150,
			size_range: [1.0, 4.0],
			brightness_range: [0.2, 1.0],
			velocity_spread: 0.5,
			repulsion_radius: 120.0,
			repulsion_strength: 40.0,
			return_rate: DEFAULT_RETURN_RATE,
		}
	}

	/// Medium field used by the about and projects sections.
	pub fn standard() -> Self {
		Self {
			particle_count: 100,
			size_range: [0.5, 2.5],
			brightness_range: [0.2, 0.8],
			velocity_spread: 0.3,
			repulsion_radius: 100.0,
			repulsion_strength: 30.0,
			return_rate: DEFAULT_RETURN_RATE,
		}
	}

	/// Sparse, slow field behind the skills grid.
	pub fn sparse() -> Self {
		Self {
			particle_count: 80,
			size_range: [0.5, 2.5],
			brightness_range: [0.2, 0.7],
			velocity_spread: 0.2,
			repulsion_radius: 80.0,
			repulsion_strength: 25.0,
			return_rate: DEFAULT_RETURN_RATE,
		}
	}

	/// Sparse field with standard physics, used by the contact section.
	pub fn contact() -> Self {
		Self {
			particle_count: 80,
			..Self::standard()
		}
	}

	pub fn for_section(section: Section) -> Self {
		match section {
			Section::Home => Self::hero(),
			Section::About | Section::Projects => Self::standard(),
			Section::Skills => Self::sparse(),
			Section::Contact => Self::contact(),
		}
	}

	/// Rejects any parameter outside its domain. Nothing is clamped.
	pub fn validate(&self) -> Result<(), ConfigurationError> {
		check_range("size_range", self.size_range)?;
		check_at_least("size_range", self.size_range[0], 0.0, ">= 0")?;

		check_range("brightness_range", self.brightness_range)?;
		check_at_least("brightness_range", self.brightness_range[0], 0.0, ">= 0")?;
		if self.brightness_range[1] > 1.0 {
			return Err(ConfigurationError::OutOfBounds {
				field: "brightness_range",
				value: self.brightness_range[1],
				expected: "<= 1",
			});
		}

		check_at_least("velocity_spread", self.velocity_spread, 0.0, ">= 0")?;
		check_at_least("repulsion_strength", self.repulsion_strength, 0.0, ">= 0")?;

		if !self.repulsion_radius.is_finite() || self.repulsion_radius <= 0.0 {
			return Err(ConfigurationError::OutOfBounds {
				field: "repulsion_radius",
				value: self.repulsion_radius,
				expected: "> 0",
			});
		}

		if !(0.0..=1.0).contains(&self.return_rate) {
			return Err(ConfigurationError::OutOfBounds {
				field: "return_rate",
				value: self.return_rate,
				expected: "within [0, 1]",
			});
		}

		Ok(())
	}
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self::standard()
	}
}

fn check_range(field: &'static str, [min, max]: [f64; 2]) -> Result<(), ConfigurationError> {
	if !min.is_finite() || !max.is_finite() || min > max {
		return Err(ConfigurationError::InvalidRange { field, min, max });
	}
	Ok(())
}

fn check_at_least(
	field: &'static str,
	value: f64,
	floor: f64,
	expected: &'static str,
) -> Result<(), ConfigurationError> {
	if !value.is_finite() || value < floor {
		return Err(ConfigurationError::OutOfBounds {
			field,
			value,
			expected,
		});
	}
	Ok(())
}
