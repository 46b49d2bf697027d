//! Orbit camera with perspective projection.
//!
//! Graph space is right-handed with the root at the origin. The camera orbits
//! the origin: `yaw` turns around the vertical axis, `pitch` tilts toward it.
//! Screen y grows downward, so graph y is flipped on projection.

/// Closest depth (graph units in front of the camera) that is still drawn.
const NEAR_PLANE: f64 = 1.0;

/// Pitch is kept short of straight up/down so the orbit never flips.
const MAX_PITCH: f64 = 1.4;

/// A point mapped to the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
	/// Canvas x in pixels.
	pub x: f64,
	/// Canvas y in pixels.
	pub y: f64,
	/// Screen pixels per graph unit at this point (perspective times zoom).
	pub scale: f64,
	/// Distance in front of the camera; larger is farther.
	pub depth: f64,
}

/// Orbit camera looking at the origin.
#[derive(Clone, Debug)]
pub struct Camera {
	/// Rotation around the vertical axis, in radians.
	pub yaw: f64,
	/// Tilt toward the vertical axis, in radians.
	pub pitch: f64,
	/// Zoom factor (1.0 = 100%, clamped to 0.1..10.0).
	pub zoom: f64,
	/// Distance from the camera to the origin.
	pub distance: f64,
	/// Screen position of the origin (x).
	pub center_x: f64,
	/// Screen position of the origin (y).
	pub center_y: f64,
}

impl Camera {
	/// Camera centered on a canvas of the given size.
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			yaw: 0.0,
			pitch: 0.0,
			zoom: 1.0,
			distance: 350.0,
			center_x: width / 2.0,
			center_y: height / 2.0,
		}
	}

	/// Maps a graph-space point to the canvas, or `None` if it is behind the camera.
	pub fn project(&self, x: f64, y: f64, z: f64) -> Option<Projected> {
		let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
		let (sin_pitch, cos_pitch) = self.pitch.sin_cos();

		let xr = x * cos_yaw + z * sin_yaw;
		let zr = -x * sin_yaw + z * cos_yaw;
		let yr = y * cos_pitch - zr * sin_pitch;
		let zr = y * sin_pitch + zr * cos_pitch;

		let depth = self.distance + zr;
		if depth < NEAR_PLANE {
			return None;
		}
		let scale = self.distance / depth * self.zoom;
		Some(Projected {
			x: self.center_x + xr * scale,
			y: self.center_y - yr * scale,
			scale,
			depth,
		})
	}

	/// Rotate the orbit by a screen-space drag delta.
	pub fn orbit(&mut self, dx: f64, dy: f64) {
		const RADIANS_PER_PIXEL: f64 = 0.008;
		self.yaw += dx * RADIANS_PER_PIXEL;
		self.pitch = (self.pitch + dy * RADIANS_PER_PIXEL).clamp(-MAX_PITCH, MAX_PITCH);
	}

	/// Multiplies the zoom, keeping it within 0.1..10.0.
	pub fn zoom_by(&mut self, factor: f64) {
		self.zoom = (self.zoom * factor).clamp(0.1, 10.0);
	}

	/// Re-centers the origin after a canvas resize.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.center_x = width / 2.0;
		self.center_y = height / 2.0;
	}
}
