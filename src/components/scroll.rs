//! Scroll position and active-section tracking.
//!
//! A [`ScrollContext`] is created once by the root component and handed to the
//! navigation bar and hero through Leptos context. Star fields never read it.

use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use log::warn;

/// Vertical line, in viewport pixels, used to decide which section is active.
pub const ACTIVE_PROBE_Y: f64 = 100.0;
/// Quiet period after the last scroll event before `is_scrolling` clears.
pub const SCROLL_SETTLE: Duration = Duration::from_millis(150);
/// Scroll offset under which the navigation bar always shows.
const NAV_ALWAYS_VISIBLE_Y: f64 = 100.0;
/// Scroll offset past which the navigation bar gets an opaque background.
const NAV_SOLID_Y: f64 = 50.0;

/// The page sections, in document order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
	#[default]
	Home,
	About,
	Skills,
	Projects,
	Contact,
}

impl Section {
	pub const ALL: [Section; 5] = [
		Section::Home,
		Section::About,
		Section::Skills,
		Section::Projects,
		Section::Contact,
	];

	/// DOM id of the section element.
	pub fn id(self) -> &'static str {
		match self {
			Section::Home => "home",
			Section::About => "about",
			Section::Skills => "skills",
			Section::Projects => "projects",
			Section::Contact => "contact",
		}
	}

	/// Navigation label.
	pub fn label(self) -> &'static str {
		match self {
			Section::Home => "Home",
			Section::About => "About",
			Section::Skills => "Skills",
			Section::Projects => "Projects",
			Section::Contact => "Contact",
		}
	}

	pub fn from_id(id: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|s| s.id() == id)
	}
}

/// Vertical extent of a section relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
	pub section: Section,
	pub top: f64,
	pub bottom: f64,
}

/// The last section (in document order) spanning the probe line, or `Home`.
pub fn active_section(bounds: &[SectionBounds], probe_y: f64) -> Section {
	bounds
		.iter()
		.rev()
		.find(|b| b.top <= probe_y && b.bottom >= probe_y)
		.map(|b| b.section)
		.unwrap_or_default()
}

/// Page scroll progress in percent, `0` for pages that don't scroll.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
	let scrollable = document_height - viewport_height;
	if scrollable <= 0.0 {
		return 0.0;
	}
	(scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// The navigation bar hides while scrolling down, except near the top.
pub fn nav_visible(current_y: f64, last_y: f64) -> bool {
	current_y < last_y || current_y < NAV_ALWAYS_VISIBLE_Y
}

pub fn nav_solid(scroll_y: f64) -> bool {
	scroll_y > NAV_SOLID_Y
}

/// Scroll-driven float offset: `sin((scroll_y + phase) * frequency) * amplitude`.
pub fn parallax_offset(scroll_y: f64, phase: f64, frequency: f64, amplitude: f64) -> f64 {
	((scroll_y + phase) * frequency).sin() * amplitude
}

/// Reactive scroll state shared with the navigation bar and hero.
#[derive(Clone, Copy, Debug)]
pub struct ScrollContext {
	pub scroll_y: RwSignal<f64>,
	pub active_section: RwSignal<Section>,
	pub is_scrolling: RwSignal<bool>,
}

impl ScrollContext {
	fn new() -> Self {
		Self {
			scroll_y: RwSignal::new(0.0),
			active_section: RwSignal::new(Section::Home),
			is_scrolling: RwSignal::new(false),
		}
	}
}

fn measure_sections(document: &web_sys::Document) -> Vec<SectionBounds> {
	Section::ALL
		.into_iter()
		.filter_map(|section| {
			let rect = document
				.get_element_by_id(section.id())?
				.get_bounding_client_rect();
			Some(SectionBounds {
				section,
				top: rect.top(),
				bottom: rect.bottom(),
			})
		})
		.collect()
}

/// Creates the scroll context, provides it to descendants and starts the
/// window scroll listener. The listener and its settle timer are removed when
/// the owning component is cleaned up.
pub fn provide_scroll_context() -> ScrollContext {
	let scroll = ScrollContext::new();
	provide_context(scroll);

	let settle_timer = StoredValue::new(None::<TimeoutHandle>);
	let handle = window_event_listener(ev::scroll, move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		scroll.scroll_y.set(window.scroll_y().unwrap_or(0.0));
		if let Some(document) = window.document() {
			let bounds = measure_sections(&document);
			scroll
				.active_section
				.set(active_section(&bounds, ACTIVE_PROBE_Y));
		}

		scroll.is_scrolling.set(true);
		if let Some(previous) = settle_timer.get_value() {
			previous.clear();
		}
		match set_timeout_with_handle(move || scroll.is_scrolling.set(false), SCROLL_SETTLE) {
			Ok(timer) => settle_timer.set_value(Some(timer)),
			Err(e) => warn!("starfield: failed to arm scroll settle timer: {:?}", e),
		}
	});

	on_cleanup(move || {
		handle.remove();
		if let Some(timer) = settle_timer.get_value() {
			timer.clear();
		}
	});

	scroll
}

/// The context installed by [`provide_scroll_context`].
pub fn use_scroll_context() -> ScrollContext {
	expect_context::<ScrollContext>()
}

/// Smoothly scrolls the element with the section's id into view.
pub fn scroll_to(section: Section) {
	let Some(element) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(section.id()))
	else {
		return;
	};
	let options = web_sys::ScrollIntoViewOptions::new();
	options.set_behavior(web_sys::ScrollBehavior::Smooth);
	element.scroll_into_view_with_scroll_into_view_options(&options);
}
