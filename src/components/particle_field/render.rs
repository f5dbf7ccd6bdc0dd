//! Draw records for the star field and their canvas painter.
//!
//! The field itself never touches the canvas: it hands out [`DrawRecord`]s and
//! an optional [`PointerGlow`], and [`paint`] turns those into 2D-context calls.
//! Per frame:
//! 1. Clear the canvas
//! 2. Pointer glow (behind the stars)
//! 3. Star glows, then star discs

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::Particle;
use super::theme::{Color, SectionStyle};

/// Glow radius relative to star diameter.
const GLOW_RADIUS_FACTOR: f64 = 2.0;

/// Everything the view layer needs to draw one star.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawRecord {
	pub x: f64,
	pub y: f64,
	pub diameter: f64,
	/// Fill opacity, `brightness * opacity_factor`.
	pub opacity: f64,
	pub glow_radius: f64,
	/// Glow alpha at its center, `brightness * glow_factor`.
	pub glow_intensity: f64,
}

impl DrawRecord {
	pub fn for_particle(p: &Particle, style: &SectionStyle) -> Self {
		Self {
			x: p.x,
			y: p.y,
			diameter: p.size(),
			opacity: p.brightness() * style.opacity_factor,
			glow_radius: p.size() * GLOW_RADIUS_FACTOR,
			glow_intensity: p.brightness() * style.glow_factor,
		}
	}
}

/// Soft halo drawn at the last known pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerGlow {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub color: Color,
}

/// Paints one frame of a star field onto the canvas.
pub fn paint(
	ctx: &CanvasRenderingContext2d,
	width: f64,
	height: f64,
	records: &[DrawRecord],
	pointer_glow: Option<&PointerGlow>,
	star_color: Color,
) {
	ctx.clear_rect(0.0, 0.0, width, height);

	if let Some(glow) = pointer_glow {
		draw_pointer_glow(ctx, glow);
	}

	for record in records {
		draw_star_glow(ctx, record, star_color);
	}
	for record in records {
		draw_star(ctx, record, star_color);
	}
}

fn draw_pointer_glow(ctx: &CanvasRenderingContext2d, glow: &PointerGlow) {
	let Ok(gradient) =
		ctx.create_radial_gradient(glow.x, glow.y, 0.0, glow.x, glow.y, glow.radius)
	else {
		return;
	};
	let _ = gradient.add_color_stop(0.0, &glow.color.to_css());
	let _ = gradient.add_color_stop(1.0, &glow.color.with_alpha(0.0).to_css());

	ctx.begin_path();
	let _ = ctx.arc(glow.x, glow.y, glow.radius, 0.0, 2.0 * PI);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();
}

fn draw_star_glow(ctx: &CanvasRenderingContext2d, record: &DrawRecord, color: Color) {
	if record.glow_intensity < 0.01 || record.glow_radius <= 0.0 {
		return;
	}

	let Ok(gradient) = ctx.create_radial_gradient(
		record.x,
		record.y,
		0.0,
		record.x,
		record.y,
		record.glow_radius,
	) else {
		return;
	};
	let _ = gradient.add_color_stop(0.0, &color.with_alpha(record.glow_intensity).to_css());
	let _ = gradient.add_color_stop(1.0, &color.with_alpha(0.0).to_css());

	ctx.begin_path();
	let _ = ctx.arc(record.x, record.y, record.glow_radius, 0.0, 2.0 * PI);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();
}

fn draw_star(ctx: &CanvasRenderingContext2d, record: &DrawRecord, color: Color) {
	ctx.set_fill_style_str(&color.with_alpha(record.opacity).to_css());
	ctx.begin_path();
	let _ = ctx.arc(record.x, record.y, record.diameter / 2.0, 0.0, 2.0 * PI);
	ctx.fill();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn record_scales_with_section_style() {
		let p = Particle::new(3, 10.0, 20.0, 2.0, 0.5, 0.0, 0.0);
		let record = DrawRecord::for_particle(&p, &SectionStyle::standard());
		assert_eq!(record.x, 10.0);
		assert_eq!(record.y, 20.0);
		assert_eq!(record.diameter, 2.0);
		assert!((record.opacity - 0.35).abs() < 1e-12);
		assert_eq!(record.glow_radius, 4.0);
		assert!((record.glow_intensity - 0.15).abs() < 1e-12);
	}
}
