//! Canvas rendering for the force graph.
//!
//! Everything is drawn in screen space from projected positions:
//! 1. Background
//! 2. Links, dimmed unless both ends are lit
//! 3. Nodes back to front, each followed by its label

use std::collections::HashMap;
use std::f64::consts::TAU;

use force_graph::DefaultNodeIdx;
use web_sys::CanvasRenderingContext2d;

use super::camera::Projected;
use super::scale::ScaleConfig;
use super::state::{ForceGraphState, ProjectedNode};
use super::theme::Theme;

/// Renders the complete graph to the canvas.
pub fn render(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
) {
	draw_background(state, ctx, theme);

	let nodes = state.project_nodes();
	let at: HashMap<DefaultNodeIdx, Projected> = nodes.iter().map(|p| (p.idx, p.at)).collect();

	draw_links(state, ctx, config, theme, &at);

	let (near, far) = depth_range(&nodes);
	for node in &nodes {
		let fog = if far > near {
			(node.at.depth - near) / (far - near)
		} else {
			0.0
		};
		let alpha = state.highlight.node_alpha(node.idx) * (1.0 - theme.node.fog * fog);
		draw_node(ctx, node, config, theme, alpha);
		draw_label(ctx, node, config, alpha);
	}
}

fn depth_range(nodes: &[ProjectedNode]) -> (f64, f64) {
	nodes
		.iter()
		.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
			(lo.min(p.at.depth), hi.max(p.at.depth))
		})
}

fn draw_background(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let background = &theme.background;
	let gradient = background
		.use_gradient
		.then(|| {
			let (cx, cy) = (state.width / 2.0, state.height / 2.0);
			ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, state.width.max(state.height) * 0.8)
				.ok()
		})
		.flatten();

	match gradient {
		Some(gradient) => {
			let _ = gradient.add_color_stop(0.0, &background.color_secondary.to_css());
			let _ = gradient.add_color_stop(1.0, &background.color.to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		None => ctx.set_fill_style_str(&background.color.to_css()),
	}

	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_links(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
	at: &HashMap<DefaultNodeIdx, Projected>,
) {
	let level = state.highlight.level();

	for link in state.links() {
		let (Some(a), Some(b)) = (at.get(&link.source), at.get(&link.target)) else {
			continue;
		};

		let lit = state.highlight.is_lit(link.source) && state.highlight.is_lit(link.target);
		let color = if lit && level > 0.01 {
			theme.edge.highlight_color
		} else {
			let color = theme.edge.color;
			color.with_alpha(color.a * (1.0 - 0.7 * level))
		};

		ctx.set_stroke_style_str(&color.to_css());
		ctx.set_line_width(config.edge_width(link.width, (a.scale + b.scale) / 2.0));
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	node: &ProjectedNode,
	config: &ScaleConfig,
	theme: &Theme,
	alpha: f64,
) {
	let Projected { x, y, scale, .. } = node.at;
	let radius = config.node_radius(node.info.size, scale);
	let base = node.info.color;

	ctx.set_global_alpha(alpha);
	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, TAU);

	let shaded = theme
		.node
		.use_gradient
		.then(|| {
			ctx.create_radial_gradient(x - radius * 0.3, y - radius * 0.3, 0.0, x, y, radius)
				.ok()
		})
		.flatten();

	match shaded {
		Some(gradient) => {
			let _ = gradient.add_color_stop(0.0, &base.lighten(0.4).to_css());
			let _ = gradient.add_color_stop(0.7, &base.to_css());
			let _ = gradient.add_color_stop(1.0, &base.darken(0.2).to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		None => ctx.set_fill_style_str(&base.to_css()),
	}
	ctx.fill();
	ctx.set_global_alpha(1.0);
}

fn draw_label(ctx: &CanvasRenderingContext2d, node: &ProjectedNode, config: &ScaleConfig, alpha: f64) {
	let label = &node.info.label;
	let Some(px) = config.label_px(label.size, node.at.scale) else {
		return;
	};
	let radius = config.node_radius(node.info.size, node.at.scale);

	ctx.set_global_alpha(alpha);
	ctx.set_fill_style_str(label.color);
	ctx.set_font(&format!("{px:.1}px sans-serif"));
	let _ = ctx.fill_text(
		&label.text,
		node.at.x + radius + config.label.gap,
		node.at.y + px / 3.0,
	);
	ctx.set_global_alpha(1.0);
}
