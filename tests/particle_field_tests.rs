// Host-side tests for the star-field physics through the public API.

#![allow(unused_crate_dependencies)]

use rand::SeedableRng;
use rand::rngs::StdRng;
use starfield_portfolio::components::particle_field::{
	FieldConfig, Particle, ParticleField, SectionStyle,
};
use starfield_portfolio::components::scroll::Section;

const EPS: f64 = 1e-9;

fn field_with(particles: Vec<Particle>, config: FieldConfig) -> ParticleField {
	ParticleField::from_particles(particles, config).expect("valid config")
}

fn assert_in_bounds(field: &ParticleField, width: f64, height: f64) {
	for p in field.particles() {
		assert!((0.0..=width).contains(&p.x), "x out of bounds: {}", p.x);
		assert!((0.0..=height).contains(&p.y), "y out of bounds: {}", p.y);
		assert!((0.0..=width).contains(&p.rest_x), "rest x out of bounds: {}", p.rest_x);
		assert!((0.0..=height).contains(&p.rest_y), "rest y out of bounds: {}", p.rest_y);
	}
}

#[test]
fn initialize_respects_every_section_range() {
	let mut rng = StdRng::seed_from_u64(42);
	let (width, height) = (1280.0, 720.0);

	for section in Section::ALL {
		let config = FieldConfig::for_section(section);
		let field = ParticleField::initialize(width, height, config.clone(), &mut rng).unwrap();
		assert_eq!(field.len(), config.particle_count);

		let half_spread = config.velocity_spread / 2.0;
		for p in field.particles() {
			assert!(p.x >= 0.0 && p.x < width);
			assert!(p.y >= 0.0 && p.y < height);
			assert_eq!((p.x, p.y), (p.rest_x, p.rest_y));
			assert!(p.size() >= config.size_range[0] && p.size() < config.size_range[1]);
			assert!(
				p.brightness() >= config.brightness_range[0]
					&& p.brightness() < config.brightness_range[1]
			);
			let (vx, vy) = p.velocity();
			assert!(vx.abs() <= half_spread && vy.abs() <= half_spread);
		}
	}
}

#[test]
fn section_populations_match_presets() {
	let counts: Vec<usize> = Section::ALL
		.into_iter()
		.map(|s| FieldConfig::for_section(s).particle_count)
		.collect();
	assert_eq!(counts, vec![150, 100, 80, 100, 80]);
}

#[test]
fn empty_field_is_a_no_op() {
	let config = FieldConfig {
		particle_count: 0,
		..FieldConfig::default()
	};
	let mut rng = StdRng::seed_from_u64(3);
	let mut field = ParticleField::initialize(800.0, 600.0, config, &mut rng).unwrap();
	field.advance_frame(800.0, 600.0);
	field.on_pointer_move(10.0, 10.0);
	assert!(field.is_empty());
	assert!(field.draw_records(&SectionStyle::default()).is_empty());
}

#[test]
fn zero_viewport_defers_initialization() {
	let mut rng = StdRng::seed_from_u64(3);
	assert!(ParticleField::initialize(0.0, 0.0, FieldConfig::hero(), &mut rng).is_err());
}

#[test]
fn invalid_config_fails_before_seeding() {
	let config = FieldConfig {
		repulsion_radius: -5.0,
		..FieldConfig::hero()
	};
	let mut rng = StdRng::seed_from_u64(3);
	assert!(ParticleField::initialize(800.0, 600.0, config, &mut rng).is_err());
}

#[test]
fn right_edge_overflow_resets_to_zero() {
	let config = FieldConfig {
		particle_count: 1,
		..FieldConfig::standard()
	};
	let mut field = field_with(vec![Particle::new(0, 799.0, 300.0, 1.0, 0.5, 5.0, 0.0)], config);

	field.advance_frame(800.0, 600.0);

	let p = &field.particles()[0];
	assert_eq!(p.x, 0.0);
	assert_eq!(p.rest_x, 0.0);
	assert_eq!(p.y, 300.0);
	assert_eq!(p.rest_y, 300.0);
}

#[test]
fn top_edge_underflow_resets_to_height() {
	let config = FieldConfig::standard();
	let mut field = field_with(vec![Particle::new(0, 400.0, 0.1, 1.0, 0.5, 0.0, -0.15)], config);

	field.advance_frame(800.0, 600.0);

	let p = &field.particles()[0];
	assert_eq!(p.y, 600.0);
	assert_eq!(p.rest_y, 600.0);
	assert_eq!((p.x, p.rest_x), (400.0, 400.0));
}

#[test]
fn repelled_star_wraps_when_only_rest_leaves_the_top() {
	let config = FieldConfig::standard();
	let mut field = field_with(vec![Particle::new(0, 400.0, 0.1, 1.0, 0.5, 0.0, -0.15)], config);
	// Pointer above the rest point pushes the star down, inside the viewport.
	field.on_pointer_move(400.0, -20.0);
	assert!(field.particles()[0].y > 0.0);

	field.advance_frame(800.0, 600.0);

	let p = &field.particles()[0];
	assert_eq!((p.y, p.rest_y), (600.0, 600.0));
}

#[test]
fn drift_moves_position_and_rest_together() {
	let config = FieldConfig::standard();
	let mut field = field_with(vec![Particle::new(0, 100.0, 100.0, 1.0, 0.5, 0.1, -0.2)], config);
	for _ in 0..10 {
		field.advance_frame(800.0, 600.0);
	}
	let p = &field.particles()[0];
	assert!((p.x - 101.0).abs() < EPS);
	assert!((p.y - 98.0).abs() < EPS);
	assert!((p.rest_x - p.x).abs() < EPS);
	assert!((p.rest_y - p.y).abs() < EPS);
}

#[test]
fn stars_stay_in_bounds_under_drift_and_pointer() {
	let mut rng = StdRng::seed_from_u64(99);
	let (width, height) = (400.0, 300.0);
	let mut field = ParticleField::initialize(width, height, FieldConfig::hero(), &mut rng).unwrap();

	for frame in 0..5_000 {
		if frame % 3 == 0 {
			// Sweep the pointer along the edges, pushing stars outward.
			let t = (frame % 400) as f64;
			field.on_pointer_move(t, (frame % 300) as f64);
		}
		field.advance_frame(width, height);
		assert_in_bounds(&field, width, height);
	}
}

#[test]
fn shrinking_viewport_pulls_stars_back_inside() {
	let mut rng = StdRng::seed_from_u64(5);
	let mut field = ParticleField::initialize(1600.0, 1200.0, FieldConfig::hero(), &mut rng).unwrap();
	field.advance_frame(800.0, 600.0);
	assert_in_bounds(&field, 800.0, 600.0);
}

#[test]
fn repulsion_displacement_follows_linear_falloff() {
	let config = FieldConfig::standard();
	let (radius, strength) = (config.repulsion_radius, config.repulsion_strength);
	let mut previous = f64::INFINITY;

	for d in [0.0, 10.0, 25.0, 50.0, 75.0, 99.0, 100.0] {
		let mut field = field_with(vec![Particle::new(0, 200.0, 200.0, 1.0, 0.5, 0.0, 0.0)], config.clone());
		field.on_pointer_move(200.0 + d, 200.0);

		let p = &field.particles()[0];
		let expected = if d < radius {
			(radius - d) / radius * strength
		} else {
			0.0
		};
		assert!(
			(p.displacement() - expected).abs() < EPS,
			"d = {d}: got {}, expected {expected}",
			p.displacement()
		);
		// Pointer on the +x side pushes the star toward -x.
		assert!(p.x <= 200.0);
		assert!(p.displacement() <= previous);
		previous = p.displacement();
	}
	assert_eq!(previous, 0.0);
}

#[test]
fn repulsion_points_away_from_pointer_diagonally() {
	let config = FieldConfig::standard();
	let mut field = field_with(vec![Particle::new(0, 300.0, 300.0, 1.0, 0.5, 0.0, 0.0)], config);
	field.on_pointer_move(330.0, 340.0);

	let p = &field.particles()[0];
	// Distance 50 from rest: half force, 15 units along (-0.6, -0.8).
	assert!((p.x - (300.0 - 9.0)).abs() < EPS);
	assert!((p.y - (300.0 - 12.0)).abs() < EPS);
	assert_eq!((p.rest_x, p.rest_y), (300.0, 300.0));
}

#[test]
fn pointer_on_rest_position_pushes_toward_negative_x() {
	let config = FieldConfig {
		particle_count: 1,
		repulsion_radius: 100.0,
		repulsion_strength: 30.0,
		..FieldConfig::standard()
	};
	let mut field = field_with(vec![Particle::new(0, 50.0, 50.0, 1.0, 0.5, 0.0, 0.0)], config);
	field.on_pointer_move(50.0, 50.0);

	let p = &field.particles()[0];
	assert_eq!(p.x, 20.0);
	assert_eq!(p.y, 50.0);
	assert!((p.displacement() - 30.0).abs() < EPS);
}

#[test]
fn far_pointer_eases_back_geometrically() {
	let config = FieldConfig::standard();
	let rate = config.return_rate;
	let mut field = field_with(vec![Particle::new(0, 100.0, 100.0, 1.0, 0.5, 0.0, 0.0)], config);

	field.on_pointer_move(110.0, 100.0);
	let mut gap = field.particles()[0].displacement();
	assert!(gap > 0.0);

	for _ in 0..200 {
		field.on_pointer_move(700.0, 500.0);
		let next = field.particles()[0].displacement();
		assert!(next < gap);
		assert!((next - gap * (1.0 - rate)).abs() < EPS);
		gap = next;
	}
	assert!(gap > 0.0);
}

#[test]
fn pointer_moves_and_frames_interleave_on_one_field() {
	let config = FieldConfig::standard();
	let mut field = field_with(vec![Particle::new(0, 100.0, 100.0, 1.0, 0.5, 1.0, 0.0)], config);

	field.on_pointer_move(110.0, 100.0);
	let pushed_x = field.particles()[0].x;
	field.advance_frame(800.0, 600.0);

	let p = &field.particles()[0];
	assert!((p.x - (pushed_x + 1.0)).abs() < EPS);
	assert!((p.rest_x - 101.0).abs() < EPS);
}

#[test]
fn draw_records_follow_star_state() {
	let style = SectionStyle::hero();
	let config = FieldConfig::hero();
	let mut field = field_with(
		vec![
			Particle::new(0, 10.0, 10.0, 2.0, 0.8, 0.0, 0.0),
			Particle::new(1, 500.0, 400.0, 3.0, 0.4, 0.0, 0.0),
		],
		config,
	);
	field.on_pointer_move(700.0, 10.0);

	let records = field.draw_records(&style);
	assert_eq!(records.len(), 2);
	assert!((records[0].opacity - 0.8).abs() < EPS);
	assert!((records[0].glow_intensity - 0.4).abs() < EPS);
	assert_eq!(records[1].diameter, 3.0);
	assert_eq!(records[1].glow_radius, 6.0);

	let glow = field.pointer_glow(&style).expect("pointer has moved");
	assert_eq!((glow.x, glow.y), (700.0, 10.0));
	assert_eq!(glow.radius, style.cursor_glow_radius);
}
