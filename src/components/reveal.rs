//! Reveal-on-scroll for section content.
//!
//! [`use_in_view`] tracks whether an element intersects the viewport through an
//! `IntersectionObserver`; content then swaps between a hidden, offset class
//! and its resting class. Visibility follows the observer both ways, so content
//! fades out again once it leaves the viewport.

use js_sys::Array;
use leptos::html::Div;
use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Visible fraction for the about, skills and contact sections.
pub const SECTION_THRESHOLD: f64 = 0.3;
/// Visible fraction for the projects carousel.
pub const PROJECTS_THRESHOLD: f64 = 0.2;

/// Direction content slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
	/// Rises 2.5rem.
	#[default]
	Up,
	/// Rises 1.25rem.
	UpSmall,
	/// Slides in from the left.
	FromLeft,
	/// Slides in from the right.
	FromRight,
}

impl Reveal {
	/// CSS classes for the current visibility.
	pub fn class(self, in_view: bool) -> &'static str {
		if in_view {
			return "reveal reveal-shown";
		}
		match self {
			Reveal::Up => "reveal reveal-up",
			Reveal::UpSmall => "reveal reveal-up-small",
			Reveal::FromLeft => "reveal reveal-left",
			Reveal::FromRight => "reveal reveal-right",
		}
	}
}

/// Visibility after one observer callback.
///
/// The first entry decides; a callback without entries keeps the current state.
pub fn next_in_view(current: bool, intersecting: &[bool]) -> bool {
	intersecting.first().copied().unwrap_or(current)
}

/// `transition-delay` style for staggered reveals.
pub fn delay_style(delay_ms: u32) -> String {
	format!("transition-delay: {delay_ms}ms;")
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Whether the element behind `target` currently intersects the viewport by at
/// least `threshold` of its area. Starts `false`; the observer is
/// disconnected when the owning component is cleaned up.
pub fn use_in_view(target: NodeRef<Div>, threshold: f64) -> Signal<bool> {
	let in_view = RwSignal::new(false);
	let observer = StoredValue::new_local(None::<(IntersectionObserver, ObserverCallback)>);

	Effect::new(move |_| {
		let Some(element) = target.get() else {
			return;
		};
		if observer.with_value(Option::is_some) {
			return;
		}

		let callback: ObserverCallback =
			Closure::new(move |entries: Array, _observer: IntersectionObserver| {
				let intersecting: Vec<bool> = entries
					.iter()
					.map(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting())
					.collect();
				in_view.set(next_in_view(in_view.get_untracked(), &intersecting));
			});

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(threshold));
		options.set_root_margin("0px");

		match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
			Ok(obs) => {
				obs.observe(&element);
				observer.set_value(Some((obs, callback)));
			}
			Err(e) => warn!("starfield: intersection observer unavailable: {:?}", e),
		}
	});

	on_cleanup(move || {
		let _ = observer.try_update_value(|slot| {
			if let Some((obs, _callback)) = slot.take() {
				obs.disconnect();
			}
		});
	});

	in_view.into()
}
