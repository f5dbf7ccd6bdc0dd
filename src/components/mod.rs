//! UI components: star-field sections, scroll tracking, reveal animations and
//! page layout.

pub mod particle_field;
pub mod reveal;
pub mod scroll;
pub mod sections;
