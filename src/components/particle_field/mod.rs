//! Interactive star-field backgrounds for page sections.
//!
//! Each section owns one independent field:
//! - Stars seeded at random with per-section size, brightness and drift ranges
//! - Constant drift every animation frame, with hard-reset edge wraparound
//! - Local repulsion away from the mouse, easing back to rest once it leaves
//! - Draw records handed to a canvas painter, plus a glow under the pointer
//!
//! # Example
//!
//! ```ignore
//! use starfield_portfolio::components::particle_field::StarFieldSection;
//! use starfield_portfolio::components::scroll::Section;
//!
//! view! {
//!     <StarFieldSection section=Section::About>
//!         <h2>"About Me"</h2>
//!     </StarFieldSection>
//! }
//! ```

mod component;
pub mod config;
mod particles;
pub mod render;
pub mod theme;

pub use component::StarFieldSection;
pub use config::FieldConfig;
pub use particles::{Particle, ParticleField, viewport_ready};
pub use render::{DrawRecord, PointerGlow};
pub use theme::{Color, SectionStyle};
