//! funding-graph: Interactive 3D visualization of funding relationships.
//!
//! The compiled-in funding table is turned into a two-level tree (root,
//! categories, funders) with seed positions, styled per group, and handed to
//! a WASM canvas component that runs the force simulation and camera.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, debug, error, info};

pub mod components;
pub mod config;
pub mod dataset;
pub mod presentation;
pub mod topology;

pub use components::force_graph::ForceGraphCanvas;
pub use config::ViewerOptions;
pub use presentation::GraphStyle;
pub use topology::{
	Category, GraphData, GraphLink, GraphNode, Group, LayoutConfig, TopologyError, UniformJitter,
	build_graph,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("funding-graph: logging initialized");
}

/// Builds the funding graph, seeding member jitter from `seed`.
pub fn funding_graph(seed: u64) -> Result<GraphData, TopologyError> {
	let categories = dataset::funding_categories()?;
	Ok(build_graph(
		&categories,
		&LayoutConfig::default(),
		&mut UniformJitter::seeded(seed),
	))
}

fn fresh_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Main application component.
/// Builds the graph once and renders the 3D visualization.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let options = ViewerOptions::from_location();
	let seed = options.seed.unwrap_or_else(fresh_seed);
	info!("funding-graph: jitter seed {}", seed);

	let graph_data = match funding_graph(seed) {
		Ok(data) => data,
		Err(e) => {
			error!("funding-graph: cannot build graph: {}", e);
			GraphData::default()
		}
	};
	if let Ok(json) = graph_data.to_json() {
		debug!("funding-graph: graph data {}", json);
	}
	let graph_signal = Signal::derive(move || graph_data.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Funding Landscape" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-graph">
			<ForceGraphCanvas
				data=graph_signal
				style=GraphStyle::default()
				theme=options.theme
				fullscreen=true
			/>
			<div class="graph-overlay">
				<h1>"Funding Landscape"</h1>
				<p class="subtitle">"Drag to orbit. Scroll to zoom. Hover a node to trace its links."</p>
			</div>
		</div>
	}
}
