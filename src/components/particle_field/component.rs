//! Leptos component wrapping a page section and its star-field canvas.
//!
//! The section element receives mouse moves and forwards them, in canvas-local
//! coordinates, to the field's repulsion step. A `requestAnimationFrame` loop
//! advances the field and repaints it every frame until the section unmounts.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use leptos::prelude::*;
use log::{debug, error, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::config::FieldConfig;
use super::particles::{ParticleField, viewport_ready};
use super::render;
use super::theme::SectionStyle;
use crate::components::scroll::Section;

/// Field state shared by the frame loop and the pointer handler.
struct FieldState {
	field: Option<ParticleField>,
	config: FieldConfig,
	style: SectionStyle,
	width: f64,
	height: f64,
	/// Set when the config was rejected; the field then stays empty.
	failed: bool,
	name: &'static str,
}

impl FieldState {
	fn new(name: &'static str, config: FieldConfig, style: SectionStyle) -> Self {
		Self {
			field: None,
			config,
			style,
			width: 0.0,
			height: 0.0,
			failed: false,
			name,
		}
	}

	/// Tracks the parent size, seeds the field once it is measurable, then
	/// advances and paints it.
	fn frame(&mut self, canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d) {
		let (w, h) = measure(canvas);
		if w != self.width || h != self.height {
			canvas.set_width(w as u32);
			canvas.set_height(h as u32);
			self.width = w;
			self.height = h;
		}

		if !viewport_ready(w, h) {
			return;
		}

		if self.field.is_none() && !self.failed {
			match ParticleField::initialize(w, h, self.config.clone(), &mut rand::thread_rng()) {
				Ok(field) => {
					debug!(
						"starfield: {} seeded {} stars in {}x{}",
						self.name,
						field.len(),
						w,
						h
					);
					self.field = Some(field);
				}
				Err(e) => {
					error!("starfield: {} has an invalid configuration: {}", self.name, e);
					self.failed = true;
				}
			}
		}

		if let Some(ref mut field) = self.field {
			field.advance_frame(w, h);
			render::paint(
				ctx,
				w,
				h,
				&field.draw_records(&self.style),
				field.pointer_glow(&self.style).as_ref(),
				self.style.star_color,
			);
		}
	}

	fn pointer_moved(&mut self, x: f64, y: f64) {
		if let Some(ref mut field) = self.field {
			field.on_pointer_move(x, y);
		}
	}
}

/// Size of the element the canvas fills, or zero before layout.
fn measure(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.unwrap_or((0.0, 0.0))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Renders a page section with an animated star field behind its content.
///
/// The field uses the section's preset unless `config`/`style` override it.
/// Stars are seeded on the first frame the section has a non-zero size, drift
/// every frame, and scatter away from the mouse while it moves over the section.
#[component]
pub fn StarFieldSection(
	section: Section,
	#[prop(optional)] config: Option<FieldConfig>,
	#[prop(optional)] style: Option<SectionStyle>,
	#[prop(default = "")] class: &'static str,
	children: Children,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state = Rc::new(RefCell::new(FieldState::new(
		section.id(),
		config.unwrap_or_else(|| FieldConfig::for_section(section)),
		style.unwrap_or_else(|| SectionStyle::for_section(section)),
	)));
	// Holds the frame closure; taking it out on cleanup frees the closure and
	// everything it captures.
	let animate = StoredValue::new_local(None::<Closure<dyn FnMut()>>);
	let running = Arc::new(AtomicBool::new(true));
	let pending_frame = Arc::new(AtomicI32::new(0));
	let (state_init, running_init, pending_init) =
		(state.clone(), running.clone(), pending_frame.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if animate.with_value(Option::is_some) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(ctx) = context_2d(&canvas) else {
			warn!("starfield: 2d canvas context unavailable");
			return;
		};
		let Some(window) = web_sys::window() else {
			return;
		};

		let (state_anim, running_anim, pending_anim) =
			(state_init.clone(), running_init.clone(), pending_init.clone());
		let frame: Closure<dyn FnMut()> = Closure::new(move || {
			if !running_anim.load(Ordering::Relaxed) {
				return;
			}
			state_anim.borrow_mut().frame(&canvas, &ctx);
			let Some(win) = web_sys::window() else {
				return;
			};
			animate.with_value(|cb| {
				if let Some(cb) = cb {
					if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
						pending_anim.store(id, Ordering::Relaxed);
					}
				}
			});
		});
		if let Ok(id) = window.request_animation_frame(frame.as_ref().unchecked_ref()) {
			pending_init.store(id, Ordering::Relaxed);
		}
		animate.set_value(Some(frame));
	});

	on_cleanup(move || {
		running.store(false, Ordering::Relaxed);
		if let Some(win) = web_sys::window() {
			let _ = win.cancel_animation_frame(pending_frame.load(Ordering::Relaxed));
		}
		let _ = animate.try_update_value(|slot| slot.take());
	});

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		state_mm.borrow_mut().pointer_moved(x, y);
	};

	view! {
		<section
			id=section.id()
			class=format!("star-section {class}")
			style="position: relative; overflow: hidden;"
			on:mousemove=on_mousemove
		>
			<canvas
				node_ref=canvas_ref
				class="star-field-canvas"
				style="position: absolute; inset: 0; pointer-events: none;"
			/>
			<div class="section-content" style="position: relative; z-index: 10;">
				{children()}
			</div>
		</section>
	}
}
