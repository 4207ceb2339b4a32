//! Canvas rendering for the particle field.
//!
//! One [`frame`] call per animation tick: clear, trail, then particles.
//! Trail strokes and particle fills each carry their own glow, so every
//! element draws inside a `save()`/`restore()` scope to keep shadow state
//! from leaking into the next one.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::Particle;
use super::state::FieldState;
use super::theme::ThemeName;
use super::trail::Trail;

const TRAIL_LINE_WIDTH: f64 = 2.0;
const TRAIL_GLOW_BLUR: f64 = 15.0;
const PARTICLE_GLOW_BLUR: f64 = 10.0;

/// Renders one complete frame: clears the canvas, advances and draws the
/// trail, then advances and draws each particle in turn. Each particle is
/// fully processed before the next.
pub fn frame(field: &mut FieldState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, field.width, field.height);

	field.trail.sample(field.pointer);
	draw_trail(&field.trail, field.theme, ctx);

	let pointer = field.pointer;
	for particle in &mut field.particles {
		particle.advance(pointer, field.pointer_radius, field.width, field.height);
		draw_particle(particle, ctx);
	}
}

/// Draws the trail as connected segments between consecutive samples, each
/// stroked at its older sample's current opacity in the theme's first
/// palette color.
fn draw_trail(trail: &Trail, theme: ThemeName, ctx: &CanvasRenderingContext2d) {
	let points = trail.points();
	if points.len() < 2 {
		return;
	}

	let color = theme.palette().primary();

	ctx.save();
	ctx.set_line_cap("round");
	ctx.set_line_width(TRAIL_LINE_WIDTH);
	ctx.set_shadow_blur(TRAIL_GLOW_BLUR);
	ctx.set_shadow_color(&color.to_css());

	for pair in points.windows(2) {
		let (p1, p2) = (pair[0], pair[1]);
		if p1.opacity <= 0.0 {
			continue;
		}

		ctx.set_stroke_style_str(&color.with_alpha(p1.opacity.min(1.0)).to_css());
		ctx.begin_path();
		ctx.move_to(p1.x, p1.y);
		ctx.line_to(p2.x, p2.y);
		ctx.stroke();
	}

	ctx.restore();
}

/// Draws a particle as a filled circle with a soft glow in its own color.
fn draw_particle(particle: &Particle, ctx: &CanvasRenderingContext2d) {
	let css = particle.color.to_css();

	ctx.save();
	ctx.set_shadow_blur(PARTICLE_GLOW_BLUR);
	ctx.set_shadow_color(&css);
	ctx.set_fill_style_str(&css);

	ctx.begin_path();
	let _ = ctx.arc(particle.x, particle.y, particle.size, 0.0, PI * 2.0);
	ctx.close_path();
	ctx.fill();

	ctx.restore();
}
