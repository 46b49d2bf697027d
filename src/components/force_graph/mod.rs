//! 3D force-directed graph visualization component.
//!
//! Renders an interactive node-link graph on an HTML canvas with:
//! - Physics-based node positioning via force simulation, seeded from the
//!   node positions in the supplied graph
//! - Orbit camera with perspective projection and zoom
//! - Hover highlighting of a node and its neighbors
//! - Per-node labels and per-link widths from [`GraphStyle`] hooks
//!
//! # Example
//!
//! ```ignore
//! use funding_graph::{ForceGraphCanvas, GraphStyle, build_graph};
//!
//! let data = build_graph(&categories, &LayoutConfig::default(), &mut NoJitter);
//! view! { <ForceGraphCanvas data=Signal::derive(move || data.clone()) style=GraphStyle::default() fullscreen=true /> }
//! ```
//!
//! [`GraphStyle`]: crate::presentation::GraphStyle

pub mod camera;
mod component;
mod render;
pub mod scale;
mod state;
pub mod theme;

pub use component::ForceGraphCanvas;
pub use theme::Theme;
