//! Perspective-dependent sizing for graph visuals.
//!
//! Every drawn size starts in graph units and is converted to screen pixels
//! with the projected scale of the point it is drawn at (perspective times
//! zoom). A [`ScaleBehavior`] decides how much of that scale a size follows.

/// Defines how a visual property follows the projected scale.
#[derive(Clone, Debug)]
#[allow(
	dead_code,
	reason = "Screen variant completes the API for users customizing ScaleConfig"
)]
pub enum ScaleBehavior {
	/// Graph-space size. Grows as the point nears the camera.
	World,
	/// Constant pixel size.
	Screen,
	/// Graph-space size, clamped to min/max pixel bounds.
	/// Use `f64::INFINITY` for an unbounded maximum.
	Clamped {
		/// Smallest size in pixels.
		min_screen: f64,
		/// Largest size in pixels.
		max_screen: f64,
	},
}

impl ScaleBehavior {
	/// Pixel size of `base` drawn at projected scale `scale`.
	pub fn apply(&self, base: f64, scale: f64) -> f64 {
		match self {
			ScaleBehavior::World => base * scale,
			ScaleBehavior::Screen => base,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => (base * scale).clamp(*min_screen, *max_screen),
		}
	}
}

/// Configuration for node sizing and picking.
#[derive(Clone, Debug)]
pub struct NodeScaleConfig {
	/// Base node radius in graph units.
	pub radius: f64,
	/// How the node radius follows perspective.
	pub radius_behavior: ScaleBehavior,
	/// Extra pick distance beyond the drawn radius, in pixels.
	pub hit_slop: f64,
}

/// Configuration for edge sizing.
#[derive(Clone, Debug)]
pub struct EdgeScaleConfig {
	/// How the link width (graph units) follows perspective.
	pub width_behavior: ScaleBehavior,
}

/// Configuration for label sizing.
#[derive(Clone, Debug)]
pub struct LabelScaleConfig {
	/// How the label size (graph units) follows perspective.
	pub size_behavior: ScaleBehavior,
	/// Labels smaller than this many pixels are skipped.
	pub cull_below: f64,
	/// Gap between node edge and label, in pixels.
	pub gap: f64,
}

/// Complete scale configuration for all graph elements.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	/// Node sizing.
	pub node: NodeScaleConfig,
	/// Link sizing.
	pub edge: EdgeScaleConfig,
	/// Label sizing.
	pub label: LabelScaleConfig,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node: NodeScaleConfig {
				radius: 3.0,
				radius_behavior: ScaleBehavior::Clamped {
					min_screen: 2.0,
					max_screen: 40.0,
				},
				hit_slop: 4.0,
			},
			edge: EdgeScaleConfig {
				width_behavior: ScaleBehavior::Clamped {
					min_screen: 0.5,
					max_screen: 12.0,
				},
			},
			label: LabelScaleConfig {
				size_behavior: ScaleBehavior::World,
				cull_below: 4.0,
				gap: 3.0,
			},
		}
	}
}

impl ScaleConfig {
	/// Node radius in pixels; `size` is the node's relative size.
	pub fn node_radius(&self, size: f64, scale: f64) -> f64 {
		self.node.radius_behavior.apply(self.node.radius * size, scale)
	}

	/// Pick radius in pixels.
	pub fn hit_radius(&self, size: f64, scale: f64) -> f64 {
		self.node_radius(size, scale) + self.node.hit_slop
	}

	/// Link width in pixels.
	pub fn edge_width(&self, width: f64, scale: f64) -> f64 {
		self.edge.width_behavior.apply(width, scale)
	}

	/// Label font size in pixels, or `None` when too small to read.
	pub fn label_px(&self, size: f64, scale: f64) -> Option<f64> {
		let px = self.label.size_behavior.apply(size, scale);
		(px >= self.label.cull_below).then_some(px)
	}
}
