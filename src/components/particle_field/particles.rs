//! Star-field physics: seeding, drift with wraparound, and pointer repulsion.

use rand::Rng;

use super::config::FieldConfig;
use super::render::{DrawRecord, PointerGlow};
use super::theme::SectionStyle;
use crate::error::ConfigurationError;

/// A single star.
///
/// `size`, `brightness` and velocity are fixed at creation. The rest position
/// drifts with the velocity; the rendered position follows it, except while
/// the pointer pushes the star away.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	id: usize,
	pub x: f64,
	pub y: f64,
	pub rest_x: f64,
	pub rest_y: f64,
	size: f64,
	brightness: f64,
	vx: f64,
	vy: f64,
}

impl Particle {
	/// Creates a star resting at `(x, y)`.
	pub fn new(id: usize, x: f64, y: f64, size: f64, brightness: f64, vx: f64, vy: f64) -> Self {
		Self {
			id,
			x,
			y,
			rest_x: x,
			rest_y: y,
			size,
			brightness,
			vx,
			vy,
		}
	}

	pub fn id(&self) -> usize {
		self.id
	}

	pub fn size(&self) -> f64 {
		self.size
	}

	pub fn brightness(&self) -> f64 {
		self.brightness
	}

	pub fn velocity(&self) -> (f64, f64) {
		(self.vx, self.vy)
	}

	/// Distance between rendered and rest position.
	pub fn displacement(&self) -> f64 {
		(self.x - self.rest_x).hypot(self.y - self.rest_y)
	}
}

/// One star field bound to a page section.
///
/// Created once the section has a measurable size, then mutated by the frame
/// loop ([`advance_frame`](Self::advance_frame)) and by pointer moves
/// ([`on_pointer_move`](Self::on_pointer_move)). Both take `&mut self`, so each
/// call completes its read-modify-write of every star before the other runs.
#[derive(Clone, Debug)]
pub struct ParticleField {
	particles: Vec<Particle>,
	config: FieldConfig,
	pointer: Option<(f64, f64)>,
}

impl ParticleField {
	/// Seeds `config.particle_count` stars uniformly over `[0, width) × [0, height)`.
	pub fn initialize<R: Rng>(
		width: f64,
		height: f64,
		config: FieldConfig,
		rng: &mut R,
	) -> Result<Self, ConfigurationError> {
		config.validate()?;
		check_viewport(width, height)?;

		let half_spread = config.velocity_spread / 2.0;
		let particles = (0..config.particle_count)
			.map(|id| {
				let x = uniform(rng, 0.0, width);
				let y = uniform(rng, 0.0, height);
				let size = uniform(rng, config.size_range[0], config.size_range[1]);
				let brightness =
					uniform(rng, config.brightness_range[0], config.brightness_range[1]);
				let vx = uniform(rng, -half_spread, half_spread);
				let vy = uniform(rng, -half_spread, half_spread);
				Particle::new(id, x, y, size, brightness, vx, vy)
			})
			.collect();

		Ok(Self {
			particles,
			config,
			pointer: None,
		})
	}

	/// Builds a field from existing stars.
	pub fn from_particles(
		particles: Vec<Particle>,
		config: FieldConfig,
	) -> Result<Self, ConfigurationError> {
		config.validate()?;
		Ok(Self {
			particles,
			config,
			pointer: None,
		})
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Last pointer position seen by [`on_pointer_move`](Self::on_pointer_move).
	pub fn pointer(&self) -> Option<(f64, f64)> {
		self.pointer
	}

	/// Moves every star and its rest position one velocity step.
	///
	/// When the star or its rest position leaves the viewport on an axis, both
	/// snap to the opposite edge on that axis: past `width` resets to 0, below
	/// 0 resets to `width`. This is a jump, not a modulo wrap.
	pub fn advance_frame(&mut self, width: f64, height: f64) {
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;
			p.rest_x += p.vx;
			p.rest_y += p.vy;

			if p.x > width || p.rest_x > width {
				p.x = 0.0;
				p.rest_x = 0.0;
			} else if p.x < 0.0 || p.rest_x < 0.0 {
				p.x = width;
				p.rest_x = width;
			}

			if p.y > height || p.rest_y > height {
				p.y = 0.0;
				p.rest_y = 0.0;
			} else if p.y < 0.0 || p.rest_y < 0.0 {
				p.y = height;
				p.rest_y = height;
			}
		}
	}

	/// Pushes stars near the pointer away from it and eases the others back to rest.
	///
	/// Within `repulsion_radius` of its rest position a star is placed at
	/// `rest - dir * force * strength`, where `dir` points from rest to pointer
	/// and `force` falls linearly from 1 at the pointer to 0 at the radius.
	/// A pointer exactly on the rest position gives `atan2(0, 0) = 0`, pushing
	/// the star toward negative x. Rest positions are never modified here.
	pub fn on_pointer_move(&mut self, px: f64, py: f64) {
		self.pointer = Some((px, py));

		let FieldConfig {
			repulsion_radius: radius,
			repulsion_strength: strength,
			return_rate,
			..
		} = self.config;

		for p in &mut self.particles {
			let dx = px - p.rest_x;
			let dy = py - p.rest_y;
			let distance = (dx * dx + dy * dy).sqrt();

			if distance < radius {
				let force = (radius - distance) / radius;
				let angle = dy.atan2(dx);
				p.x = p.rest_x - angle.cos() * force * strength;
				p.y = p.rest_y - angle.sin() * force * strength;
			} else {
				p.x += (p.rest_x - p.x) * return_rate;
				p.y += (p.rest_y - p.y) * return_rate;
			}
		}
	}

	/// Draw data for every star, in creation order.
	pub fn draw_records(&self, style: &SectionStyle) -> Vec<DrawRecord> {
		self.particles
			.iter()
			.map(|p| DrawRecord::for_particle(p, style))
			.collect()
	}

	/// Decorative glow at the last pointer position, if the pointer has moved.
	pub fn pointer_glow(&self, style: &SectionStyle) -> Option<PointerGlow> {
		self.pointer.map(|(x, y)| PointerGlow {
			x,
			y,
			radius: style.cursor_glow_radius,
			color: style.cursor_glow_color,
		})
	}
}

/// Returns true when a canvas of this size can hold a field.
pub fn viewport_ready(width: f64, height: f64) -> bool {
	width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}

fn check_viewport(width: f64, height: f64) -> Result<(), ConfigurationError> {
	if !viewport_ready(width, height) {
		let value = if width.is_finite() && width > 0.0 { height } else { width };
		return Err(ConfigurationError::OutOfBounds {
			field: "viewport",
			value,
			expected: "> 0",
		});
	}
	Ok(())
}

/// Uniform sample in `[low, high)`, or `low` for an empty interval.
fn uniform<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
	if high > low {
		rng.gen_range(low..high)
	} else {
		low
	}
}
