//! particle-field: theme-aware animated particle background.
//!
//! This crate provides a WASM-based canvas background for a static site:
//! drifting particles that react to the pointer, a fading cursor trail, and
//! color palettes synced to the site's `data-theme` attribute.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;

pub use components::particle_field::{ParticleFieldCanvas, ThemeName};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-field: logging initialized");
}

/// Read the theme the page was served with from the document root's
/// `data-theme` attribute. Missing or unknown values fall back to dark.
fn initial_theme() -> ThemeName {
	let attr = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
		.and_then(|e| e.get_attribute("data-theme"));

	match attr {
		Some(value) => ThemeName::from_attr(&value),
		None => ThemeName::Dark,
	}
}

/// Main application component.
/// Owns the theme signal and renders the particle canvas behind a minimal
/// overlay with theme switch buttons.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let theme = RwSignal::new(initial_theme());
	info!(
		"particle-field: starting with {:?} theme",
		theme.get_untracked()
	);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme=move || theme.get().as_attr() />
		<Title text="Particle Field" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="particle-field-page">
			<ParticleFieldCanvas theme=theme />
			<div class="theme-switcher">
				{[ThemeName::Dark, ThemeName::Light, ThemeName::Warm]
					.into_iter()
					.map(|t| {
						view! {
							<button
								class="theme-btn"
								class:active=move || theme.get() == t
								on:click=move |_| theme.set(t)
							>
								{t.as_attr()}
							</button>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}
