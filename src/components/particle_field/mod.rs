//! Theme-aware particle field background.
//!
//! Renders an animated decorative particle effect on an HTML canvas with:
//! - Drifting particles that bounce off the viewport edges
//! - Pointer repulsion with relaxation back to each particle's rest position
//! - A fading pointer trail
//! - Palettes synced to the site's `dark`/`light`/`warm` themes
//!
//! # Example
//!
//! ```ignore
//! use particle_field::{ParticleFieldCanvas, ThemeName};
//!
//! let theme = RwSignal::new(ThemeName::Dark);
//!
//! view! { <ParticleFieldCanvas theme=theme /> }
//! ```

mod component;
mod particles;
mod render;
mod state;
pub mod theme;
mod trail;

pub use component::ParticleFieldCanvas;
pub use theme::ThemeName;
