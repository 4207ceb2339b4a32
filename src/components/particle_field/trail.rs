//! Fading pointer trail buffer.
//!
//! A bounded FIFO of recent pointer positions. A sample is appended every
//! tick the pointer has a position; every sample's opacity decays each tick
//! whether or not one was appended, so the trail fades while the pointer is
//! stationary and vanishes within [`TRAIL_CAP`] ticks of the pointer
//! leaving.

/// Maximum number of samples kept; the oldest is dropped past this.
pub const TRAIL_CAP: usize = 20;

/// A single trail sample.
#[derive(Clone, Copy, Debug)]
pub struct TrailPoint {
	pub x: f64,
	pub y: f64,
	pub opacity: f64,
}

/// Ordered trail samples, oldest first.
#[derive(Clone, Debug, Default)]
pub struct Trail {
	points: Vec<TrailPoint>,
}

impl Trail {
	pub fn new() -> Self {
		Self {
			points: Vec::with_capacity(TRAIL_CAP),
		}
	}

	/// One tick of trail bookkeeping: append a fresh sample if the pointer
	/// is present, trim to capacity from the front, then decay every
	/// sample's opacity by `1 / TRAIL_CAP`.
	pub fn sample(&mut self, pointer: Option<(f64, f64)>) {
		if let Some((x, y)) = pointer {
			self.points.push(TrailPoint { x, y, opacity: 1.0 });
			if self.points.len() > TRAIL_CAP {
				self.points.remove(0);
			}
		}

		let decay = 1.0 / TRAIL_CAP as f64;
		for point in &mut self.points {
			point.opacity -= decay;
		}
	}

	/// Samples oldest-first, for drawing as connected segments.
	pub fn points(&self) -> &[TrailPoint] {
		&self.points
	}

	/// Number of live samples.
	pub fn len(&self) -> usize {
		self.points.len()
	}

	/// True when no samples are held.
	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn length_never_exceeds_cap() {
		let mut trail = Trail::new();
		for i in 0..100 {
			trail.sample(Some((i as f64, 0.0)));
			assert!(trail.len() <= TRAIL_CAP);
		}
		assert_eq!(trail.len(), TRAIL_CAP);
	}

	#[test]
	fn overflow_drops_oldest_first() {
		let mut trail = Trail::new();
		for i in 0..(TRAIL_CAP + 5) {
			trail.sample(Some((i as f64, 0.0)));
		}
		// The first five samples are gone; the oldest survivor is x = 5.
		assert_eq!(trail.points()[0].x, 5.0);
		assert_eq!(trail.points()[TRAIL_CAP - 1].x, (TRAIL_CAP + 4) as f64);
	}

	#[test]
	fn opacity_decays_every_tick_even_without_pointer() {
		let mut trail = Trail::new();
		trail.sample(Some((10.0, 10.0)));
		let after_one = trail.points()[0].opacity;
		assert!((after_one - (1.0 - 1.0 / TRAIL_CAP as f64)).abs() < 1e-12);

		trail.sample(None);
		assert!(trail.points()[0].opacity < after_one);
	}

	#[test]
	fn fully_faded_within_cap_ticks_of_pointer_absence() {
		let mut trail = Trail::new();
		for i in 0..TRAIL_CAP {
			trail.sample(Some((i as f64, 0.0)));
		}
		for _ in 0..TRAIL_CAP {
			trail.sample(None);
		}
		assert!(trail.points().iter().all(|p| p.opacity <= 0.0));
	}

	#[test]
	fn no_samples_appended_while_pointer_absent() {
		let mut trail = Trail::new();
		trail.sample(None);
		assert!(trail.is_empty());
	}
}
