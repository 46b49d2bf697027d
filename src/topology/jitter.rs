//! Seed-position jitter for member nodes.
//!
//! Members start near their category so the simulation has something to
//! declump. The offset source is a trait so tests can pin it down.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Position;

/// Half-widths of the box a member may be offset into, per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JitterExtent {
	/// Horizontal half-width.
	pub x: f64,
	/// Vertical half-width.
	pub y: f64,
	/// Depth half-width.
	pub z: f64,
}

/// Produces the offset of a member seed from its category seed.
///
/// Implementations must stay inside `[-extent, extent]` on every axis.
pub trait Jitter {
	/// Offset for the next member.
	fn offset(&mut self, extent: JitterExtent) -> Position;
}

/// No offset: members sit exactly on their category.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoJitter;

impl Jitter for NoJitter {
	fn offset(&mut self, _extent: JitterExtent) -> Position {
		Position::ORIGIN
	}
}

/// Uniform draw from the extent box on each axis.
#[derive(Clone, Debug)]
pub struct UniformJitter<R = StdRng> {
	rng: R,
}

impl UniformJitter<StdRng> {
	/// Reproducible jitter from a fixed seed.
	pub fn seeded(seed: u64) -> Self {
		Self {
			rng: StdRng::seed_from_u64(seed),
		}
	}
}

impl<R: Rng> UniformJitter<R> {
	fn draw(&mut self, half: f64) -> f64 {
		if half > 0.0 {
			self.rng.gen_range(-half..=half)
		} else {
			0.0
		}
	}
}

impl<R: Rng> Jitter for UniformJitter<R> {
	fn offset(&mut self, extent: JitterExtent) -> Position {
		Position {
			x: self.draw(extent.x),
			y: self.draw(extent.y),
			z: self.draw(extent.z),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const EXTENT: JitterExtent = JitterExtent {
		x: 20.0,
		y: 20.0,
		z: 5.0,
	};

	#[test]
	fn test_no_jitter_is_zero() {
		assert_eq!(NoJitter.offset(EXTENT), Position::ORIGIN);
	}

	#[test]
	fn test_uniform_stays_in_box() {
		let mut jitter = UniformJitter::seeded(7);
		for _ in 0..1000 {
			let p = jitter.offset(EXTENT);
			assert!(p.x.abs() <= 20.0);
			assert!(p.y.abs() <= 20.0);
			assert!(p.z.abs() <= 5.0);
		}
	}

	#[test]
	fn test_same_seed_same_offsets() {
		let mut a = UniformJitter::seeded(42);
		let mut b = UniformJitter::seeded(42);
		for _ in 0..16 {
			assert_eq!(a.offset(EXTENT), b.offset(EXTENT));
		}
	}

	#[test]
	fn test_zero_extent_axis_is_pinned() {
		let mut jitter = UniformJitter::seeded(1);
		let p = jitter.offset(JitterExtent {
			x: 3.0,
			y: 0.0,
			z: 0.0,
		});
		assert_eq!(p.y, 0.0);
		assert_eq!(p.z, 0.0);
	}
}
