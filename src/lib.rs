//! starfield-portfolio: single-page portfolio with interactive star fields.
//!
//! Every page section renders over its own animated star field whose stars
//! drift, wrap at the edges and scatter away from the mouse. The crate also
//! carries the contact-form mail handler used by the site's backend.

use getrandom as _;
#[cfg(feature = "mailer")]
use env_logger as _;
use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;
pub mod contact;
pub mod content;
pub mod error;

pub use components::particle_field::{FieldConfig, ParticleField, SectionStyle, StarFieldSection};
pub use components::scroll::{ScrollContext, Section};
pub use error::{ConfigurationError, MailError};

use components::scroll::provide_scroll_context;
use components::sections::{About, Contact, Hero, Navigation, Projects, ScrollProgressBar, Skills};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("starfield: logging initialized");
}

/// Main application component.
/// Installs the scroll context and lays out the five sections.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	provide_scroll_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Saurav's Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta name="theme-color" content="#3B82F6" />

		<div class="portfolio">
			<Navigation />
			<Hero />
			<About />
			<Skills />
			<Projects />
			<Contact />
			<ScrollProgressBar />
		</div>
	}
}
