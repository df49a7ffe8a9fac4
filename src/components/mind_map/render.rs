//! Canvas drawing for the mind map.
//!
//! One full redraw per animation frame: background in screen space, then
//! links and node boxes in graph space under the pan/zoom transform.

use web_sys::CanvasRenderingContext2d;

use super::state::{MindMapState, NODE_HEIGHT};
use super::theme::{Color, Theme};

/// Renders the complete mind map to the canvas.
pub fn render(state: &MindMapState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	draw_background(state, ctx, theme);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_links(state, ctx, theme);
	draw_nodes(state, ctx, theme);

	ctx.restore();
}

fn draw_background(state: &MindMapState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	if theme.use_gradient {
		let gradient = ctx
			.create_radial_gradient(
				state.width / 2.0,
				state.height / 2.0,
				0.0,
				state.width / 2.0,
				state.height / 2.0,
				state.width.max(state.height) * 0.8,
			)
			.unwrap();

		gradient
			.add_color_stop(0.0, &theme.background_secondary.to_css())
			.unwrap();
		gradient
			.add_color_stop(1.0, &theme.background.to_css())
			.unwrap();

		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
	} else {
		ctx.set_fill_style_str(&theme.background.to_css());
	}

	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_links(state: &MindMapState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.set_stroke_style_str(&theme.link.to_css());
	ctx.set_line_width(1.5 / state.transform.k);

	for &(s, t) in &state.links {
		let src = &state.sim.nodes()[s];
		let tgt = &state.sim.nodes()[t];
		let (dx, dy) = (tgt.x - src.x, tgt.y - src.y);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}
		let (ux, uy) = (dx / dist, dy / dist);

		ctx.begin_path();
		ctx.move_to(src.x, src.y);
		ctx.line_to(tgt.x, tgt.y);
		ctx.stroke();

		draw_arrowhead(state, ctx, theme, t, tgt.x, tgt.y, ux, uy);
	}
}

/// Small triangle where the link meets the target box edge.
#[allow(clippy::too_many_arguments)]
fn draw_arrowhead(
	state: &MindMapState,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	target: usize,
	tx: f64,
	ty: f64,
	ux: f64,
	uy: f64,
) {
	let offset = rect_edge_offset(state.nodes[target].width, NODE_HEIGHT, ux, uy);
	let size = 7.0;
	let (tip_x, tip_y) = (tx - ux * offset, ty - uy * offset);
	let (back_x, back_y) = (tip_x - ux * size, tip_y - uy * size);
	let (px, py) = (-uy * size * 0.5, ux * size * 0.5);

	ctx.set_fill_style_str(&theme.link.to_css());
	ctx.begin_path();
	ctx.move_to(tip_x, tip_y);
	ctx.line_to(back_x + px, back_y + py);
	ctx.line_to(back_x - px, back_y - py);
	ctx.close_path();
	ctx.fill();
}

/// Distance from a box center to its edge along direction (ux, uy).
fn rect_edge_offset(width: f64, height: f64, ux: f64, uy: f64) -> f64 {
	let (hw, hh) = (width / 2.0, height / 2.0);
	let ox = if ux.abs() > 1e-6 {
		hw / ux.abs()
	} else {
		f64::INFINITY
	};
	let oy = if uy.abs() > 1e-6 {
		hh / uy.abs()
	} else {
		f64::INFINITY
	};
	ox.min(oy)
}

fn draw_nodes(state: &MindMapState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	for (idx, visual) in state.nodes.iter().enumerate() {
		let node = &state.sim.nodes()[idx];
		let (x, y) = (node.x, node.y);
		let (hw, hh) = (visual.width / 2.0, NODE_HEIGHT / 2.0);

		let fill = if visual.is_root {
			theme.root_fill
		} else {
			visual
				.color
				.as_deref()
				.map(Color::parse)
				.unwrap_or(theme.node_fill)
		};

		if state.selected == Some(idx) {
			rounded_rect_path(
				ctx,
				x - hw - 4.0,
				y - hh - 4.0,
				visual.width + 8.0,
				NODE_HEIGHT + 8.0,
				theme.corner_radius + 4.0,
			);
			ctx.set_stroke_style_str(&theme.selection.to_css());
			ctx.set_line_width(3.0 / state.transform.k);
			ctx.stroke();
		}

		rounded_rect_path(ctx, x - hw, y - hh, visual.width, NODE_HEIGHT, theme.corner_radius);
		ctx.set_fill_style_str(&fill.to_css());
		ctx.fill();
		ctx.set_stroke_style_str(&fill.darken(0.25).to_css());
		ctx.set_line_width(1.0 / state.transform.k);
		ctx.stroke();

		let text = if visual.is_root {
			ctx.set_font(theme.root_label_font);
			theme.root_text
		} else {
			ctx.set_font(theme.label_font);
			theme.node_text
		};
		ctx.set_fill_style_str(&text.to_css());
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(&visual.label, x, y);
	}
}

fn rounded_rect_path(
	ctx: &CanvasRenderingContext2d,
	x: f64,
	y: f64,
	w: f64,
	h: f64,
	r: f64,
) {
	let r = r.min(w / 2.0).min(h / 2.0);
	ctx.begin_path();
	ctx.move_to(x + r, y);
	ctx.line_to(x + w - r, y);
	let _ = ctx.quadratic_curve_to(x + w, y, x + w, y + r);
	ctx.line_to(x + w, y + h - r);
	let _ = ctx.quadratic_curve_to(x + w, y + h, x + w - r, y + h);
	ctx.line_to(x + r, y + h);
	let _ = ctx.quadratic_curve_to(x, y + h, x, y + h - r);
	ctx.line_to(x, y + r);
	let _ = ctx.quadratic_curve_to(x, y, x + r, y);
	ctx.close_path();
}
