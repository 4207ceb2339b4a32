//! Field driver state.
//!
//! [`FieldState`] owns everything the frame loop touches: the particle set,
//! the pointer trail, the current pointer position, the active theme, and
//! the canvas dimensions. Created once when the component mounts, then
//! mutated each frame and by event callbacks; the host event loop is
//! single-threaded so no synchronization is involved.

use super::particles::Particle;
use super::theme::ThemeName;
use super::trail::Trail;

/// Canvas area per particle; count is `floor(width * height / AREA_PER_PARTICLE)`.
const AREA_PER_PARTICLE: f64 = 15000.0;

/// Pointer interaction radius in pixels.
pub const POINTER_RADIUS: f64 = 150.0;

/// Shared state the frame loop advances and renders.
pub struct FieldState {
	pub particles: Vec<Particle>,
	pub trail: Trail,
	/// Absent while the pointer is off the surface.
	pub pointer: Option<(f64, f64)>,
	pub pointer_radius: f64,
	pub theme: ThemeName,
	pub width: f64,
	pub height: f64,
}

impl FieldState {
	/// Builds the field at the given canvas size and theme, spawning
	/// `floor(width * height / 15000)` particles.
	pub fn new(width: f64, height: f64, theme: ThemeName, rng: &mut impl FnMut() -> f64) -> Self {
		Self {
			particles: spawn_batch(width, height, theme, rng),
			trail: Trail::new(),
			pointer: None,
			pointer_radius: POINTER_RADIUS,
			theme,
			width,
			height,
		}
	}

	/// Full particle reset at the new dimensions. Prior particle state does
	/// not survive a resize; the trail does.
	pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl FnMut() -> f64) {
		self.width = width;
		self.height = height;
		self.particles = spawn_batch(width, height, self.theme, rng);
	}

	/// Propagates a theme change into every live particle. Particles are
	/// preserved, only their colors re-roll; an unchanged theme is a no-op.
	pub fn set_theme(&mut self, theme: ThemeName, rng: &mut impl FnMut() -> f64) {
		if theme == self.theme {
			return;
		}
		self.theme = theme;
		for particle in &mut self.particles {
			particle.set_theme(theme, rng);
		}
	}

	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = Some((x, y));
	}

	pub fn clear_pointer(&mut self) {
		self.pointer = None;
	}

	/// The count the current dimensions call for.
	pub fn target_count(width: f64, height: f64) -> usize {
		(width * height / AREA_PER_PARTICLE) as usize
	}
}

fn spawn_batch(
	width: f64,
	height: f64,
	theme: ThemeName,
	rng: &mut impl FnMut() -> f64,
) -> Vec<Particle> {
	let count = FieldState::target_count(width, height);
	let mut particles = Vec::with_capacity(count);
	for _ in 0..count {
		particles.push(Particle::spawn(width, height, theme, rng));
	}
	particles
}
