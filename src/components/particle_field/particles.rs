//! Particle entity and kinematics.
//!
//! Each particle drifts with a small constant velocity, bounces off the
//! canvas edges, and is pushed away from the pointer while inside the
//! interaction radius. Outside pointer influence it relaxes back toward its
//! fixed rest position.
//!
//! Randomness is injected as an `FnMut() -> f64` yielding values in
//! `[0, 1)`, so the kinematics stay testable off the wasm target.

use super::theme::{Color, ThemeName};

/// Fraction of the remaining offset to base recovered per frame.
const RELAX_DIVISOR: f64 = 50.0;

/// Below this pointer distance the repulsion direction is undefined, so the
/// displacement is skipped for the frame.
const MIN_POINTER_DISTANCE: f64 = 1e-4;

/// A single particle with its own kinematic state.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub base_x: f64,
	pub base_y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	/// Scales pointer displacement; acts as inverse mass.
	pub density: f64,
	pub color: Color,
}

impl Particle {
	/// Spawns a particle at a uniformly random canvas position with
	/// randomized size, density, drift velocity, and palette color.
	pub fn spawn(width: f64, height: f64, theme: ThemeName, rng: &mut impl FnMut() -> f64) -> Self {
		let x = rng() * width;
		let y = rng() * height;
		Self {
			x,
			y,
			base_x: x,
			base_y: y,
			vx: (rng() - 0.5) * 0.5,
			vy: (rng() - 0.5) * 0.5,
			size: rng() * 2.0 + 1.0,
			density: rng() * 40.0 + 5.0,
			color: random_color(theme, rng),
		}
	}

	/// Re-rolls the color from the new theme's palette. Position, velocity,
	/// and size are untouched.
	pub fn set_theme(&mut self, theme: ThemeName, rng: &mut impl FnMut() -> f64) {
		self.color = random_color(theme, rng);
	}

	/// Advances one frame: drift, bounce, then pointer repulsion or
	/// relaxation toward the rest position.
	pub fn advance(
		&mut self,
		pointer: Option<(f64, f64)>,
		pointer_radius: f64,
		width: f64,
		height: f64,
	) {
		self.x += self.vx;
		self.y += self.vy;

		// Reflect only while moving outward, so a crossing flips the
		// velocity exactly once even if the particle sits outside the
		// bounds for several frames.
		if (self.x < 0.0 && self.vx < 0.0) || (self.x > width && self.vx > 0.0) {
			self.vx = -self.vx;
		}
		if (self.y < 0.0 && self.vy < 0.0) || (self.y > height && self.vy > 0.0) {
			self.vy = -self.vy;
		}

		if let Some((px, py)) = pointer {
			let dx = px - self.x;
			let dy = py - self.y;
			let distance = (dx * dx + dy * dy).sqrt();
			if distance < pointer_radius {
				// Direct positional displacement away from the pointer,
				// linear falloff from the center to the radius. Recomputed
				// fresh each frame; never accumulated into velocity.
				if distance >= MIN_POINTER_DISTANCE {
					let force = (pointer_radius - distance) / pointer_radius;
					self.x -= dx / distance * force * self.density;
					self.y -= dy / distance * force * self.density;
				}
				return;
			}
		}

		// Exponential relaxation toward the rest position.
		self.x -= (self.x - self.base_x) / RELAX_DIVISOR;
		self.y -= (self.y - self.base_y) / RELAX_DIVISOR;
	}
}

fn random_color(theme: ThemeName, rng: &mut impl FnMut() -> f64) -> Color {
	let palette = theme.palette();
	let index = (rng() * palette.colors.len() as f64) as usize;
	palette.get(index)
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Deterministic stand-in for `Math::random`.
	fn lcg(seed: u64) -> impl FnMut() -> f64 {
		let mut state = seed;
		move || {
			state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
			(state >> 11) as f64 / (1u64 << 53) as f64
		}
	}

	fn spawn_one(seed: u64) -> Particle {
		Particle::spawn(800.0, 600.0, ThemeName::Dark, &mut lcg(seed))
	}

	#[test]
	fn spawn_ranges() {
		let mut rng = lcg(7);
		for _ in 0..200 {
			let p = Particle::spawn(800.0, 600.0, ThemeName::Dark, &mut rng);
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert_eq!((p.base_x, p.base_y), (p.x, p.y));
			assert!((-0.25..0.25).contains(&p.vx));
			assert!((-0.25..0.25).contains(&p.vy));
			assert!((1.0..3.0).contains(&p.size));
			assert!((5.0..45.0).contains(&p.density));
			assert!(ThemeName::Dark.palette().colors.contains(&p.color));
		}
	}

	#[test]
	fn relaxation_converges_monotonically() {
		let mut p = spawn_one(1);
		p.x = p.base_x + 120.0;
		p.y = p.base_y - 80.0;
		p.vx = 0.0;
		p.vy = 0.0;

		let mut prev = (p.x - p.base_x).hypot(p.y - p.base_y);
		for _ in 0..500 {
			p.advance(None, 150.0, 800.0, 600.0);
			let dist = (p.x - p.base_x).hypot(p.y - p.base_y);
			assert!(dist <= prev, "distance to base increased");
			// Never overshoots past the base on either axis.
			assert!(p.x >= p.base_x);
			assert!(p.y <= p.base_y);
			prev = dist;
		}
		assert!(prev < 1e-2);
	}

	#[test]
	fn bounce_flips_velocity_once_per_crossing() {
		let mut p = spawn_one(2);
		p.x = 799.9;
		p.y = 300.0;
		p.base_x = 799.9;
		p.base_y = 300.0;
		p.vx = 0.2;
		p.vy = 0.0;

		// First frame exits to the right and flips.
		p.advance(None, 150.0, 800.0, 600.0);
		assert!(p.vx < 0.0);

		// Relaxation may keep the particle outside for a few frames; the
		// inward velocity must not flip again while it is out there.
		for _ in 0..10 {
			p.advance(None, 150.0, 800.0, 600.0);
			assert!(p.vx < 0.0);
		}
	}

	#[test]
	fn pointer_within_radius_repels_away() {
		let mut p = spawn_one(3);
		p.x = 400.0;
		p.y = 300.0;
		p.vx = 0.0;
		p.vy = 0.0;

		// Pointer just to the right of the particle, well within radius.
		p.advance(Some((410.0, 300.0)), 150.0, 800.0, 600.0);
		assert!(p.x < 400.0, "particle moved toward the pointer");
		assert_eq!(p.y, 300.0);

		// Near-maximal force at near-zero distance: displacement magnitude
		// approaches density.
		let moved = 400.0 - p.x;
		let expected = (150.0 - 10.0) / 150.0 * p.density;
		assert!((moved - expected).abs() < 1e-9);
	}

	#[test]
	fn zero_pointer_distance_is_held_without_nan() {
		let mut p = spawn_one(4);
		p.x = 400.0;
		p.y = 300.0;
		p.vx = 0.0;
		p.vy = 0.0;

		p.advance(Some((400.0, 300.0)), 150.0, 800.0, 600.0);
		assert!(p.x.is_finite() && p.y.is_finite());
		assert_eq!((p.x, p.y), (400.0, 300.0));
	}

	#[test]
	fn pointer_outside_radius_relaxes() {
		let mut p = spawn_one(5);
		p.x = p.base_x + 50.0;
		p.vx = 0.0;
		p.vy = 0.0;
		let before = p.x - p.base_x;

		p.advance(Some((p.x + 500.0, p.y)), 150.0, 2000.0, 600.0);
		assert!(p.x - p.base_x < before);
	}

	#[test]
	fn set_theme_rerolls_color_only() {
		let mut p = spawn_one(6);
		let (x, y, vx, vy, size) = (p.x, p.y, p.vx, p.vy, p.size);

		p.set_theme(ThemeName::Warm, &mut lcg(8));
		assert!(ThemeName::Warm.palette().colors.contains(&p.color));
		assert_eq!((p.x, p.y, p.vx, p.vy, p.size), (x, y, vx, vy, size));
	}
}
