//! SVG export of the current diagram.
//!
//! [`render_svg`] is a pure serialization of the live layout (positions,
//! view transform, colors, labels) into a standalone SVG document;
//! [`download_svg`] wraps it in a blob and triggers a browser download
//! named `mindmap.svg`.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::components::mind_map::{Color, MindMapState, NODE_HEIGHT, Theme};

/// Export failures surfaced to the user as error toasts.
#[derive(Debug, Error)]
pub enum ExportError {
	/// There is no mind map on screen yet.
	#[error("no mind map to export")]
	EmptyGraph,
}

/// File name offered by the download.
const EXPORT_FILE_NAME: &str = "mindmap.svg";

/// Serializes the current layout into an SVG document string.
pub fn render_svg(state: &MindMapState, theme: &Theme) -> Result<String, ExportError> {
	if state.nodes.is_empty() {
		return Err(ExportError::EmptyGraph);
	}

	let mut svg = String::new();
	svg.push_str(&format!(
		"<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
		 viewBox=\"0 0 {w} {h}\">\n",
		w = state.width,
		h = state.height,
	));
	svg.push_str(&format!(
		"  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
		theme.background.to_css()
	));
	svg.push_str(&format!(
		"  <g transform=\"translate({} {}) scale({})\">\n",
		state.transform.x, state.transform.y, state.transform.k
	));

	for &(s, t) in &state.links {
		let src = &state.sim.nodes()[s];
		let tgt = &state.sim.nodes()[t];
		svg.push_str(&format!(
			"    <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" \
			 stroke=\"{}\" stroke-width=\"1.5\"/>\n",
			src.x,
			src.y,
			tgt.x,
			tgt.y,
			theme.link.to_css()
		));
	}

	for (idx, visual) in state.nodes.iter().enumerate() {
		let node = &state.sim.nodes()[idx];
		let fill = if visual.is_root {
			theme.root_fill
		} else {
			visual
				.color
				.as_deref()
				.map(Color::parse)
				.unwrap_or(theme.node_fill)
		};
		let text_color = if visual.is_root {
			theme.root_text
		} else {
			theme.node_text
		};
		let weight = if visual.is_root { "bold" } else { "normal" };

		svg.push_str(&format!(
			"    <g transform=\"translate({:.1} {:.1})\">\n",
			node.x, node.y
		));
		svg.push_str(&format!(
			"      <rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" \
			 rx=\"{}\" fill=\"{}\" stroke=\"{}\"/>\n",
			-visual.width / 2.0,
			-NODE_HEIGHT / 2.0,
			visual.width,
			NODE_HEIGHT,
			theme.corner_radius,
			fill.to_css(),
			fill.darken(0.25).to_css()
		));
		svg.push_str(&format!(
			"      <text text-anchor=\"middle\" dominant-baseline=\"middle\" \
			 font-family=\"sans-serif\" font-size=\"13\" font-weight=\"{}\" \
			 fill=\"{}\">{}</text>\n",
			weight,
			text_color.to_css(),
			escape_xml(&visual.label)
		));
		svg.push_str("    </g>\n");
	}

	svg.push_str("  </g>\n</svg>\n");
	Ok(svg)
}

fn escape_xml(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			_ => out.push(c),
		}
	}
	out
}

/// Wraps an SVG document in a blob and clicks a temporary download link.
pub fn download_svg(svg: &str) -> Result<(), JsValue> {
	let parts = js_sys::Array::of1(&JsValue::from_str(svg));
	let props = BlobPropertyBag::new();
	props.set_type("image/svg+xml");
	let blob = Blob::new_with_str_sequence_and_options(&parts, &props)?;
	let url = Url::create_object_url_with_blob(&blob)?;

	let document = web_sys::window()
		.ok_or_else(|| JsValue::from_str("no window"))?
		.document()
		.ok_or_else(|| JsValue::from_str("no document"))?;
	let body = document
		.body()
		.ok_or_else(|| JsValue::from_str("no document body"))?;

	let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
	anchor.set_href(&url);
	anchor.set_download(EXPORT_FILE_NAME);
	body.append_child(&anchor)?;
	anchor.click();
	body.remove_child(&anchor)?;
	Url::revoke_object_url(&url)?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::components::mind_map::{MindMapData, MindMapLink, MindMapNode};

	use super::*;

	#[test]
	fn empty_layout_is_an_error_not_a_file() {
		let state = MindMapState::new(&MindMapData::default(), 800.0, 600.0);
		assert!(matches!(
			render_svg(&state, &Theme::default()),
			Err(ExportError::EmptyGraph)
		));
	}

	#[test]
	fn document_has_one_rect_per_node_and_one_line_per_link() {
		let data = MindMapData {
			nodes: vec![
				MindMapNode {
					id: "a".into(),
					label: "Root & <friends>".into(),
					color: None,
					is_root: true,
				},
				MindMapNode {
					id: "b".into(),
					label: "Topic".into(),
					color: Some("#F97316".into()),
					is_root: false,
				},
			],
			links: vec![MindMapLink {
				source: "a".into(),
				target: "b".into(),
				value: None,
			}],
		};
		let state = MindMapState::new(&data, 800.0, 600.0);
		let svg = render_svg(&state, &Theme::default()).unwrap();

		assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
		// Background rect plus one per node.
		assert_eq!(svg.matches("<rect").count(), 3);
		assert_eq!(svg.matches("<line").count(), 1);
		assert!(svg.contains("fill=\"#f97316\""));
		assert!(svg.contains("Root &amp; &lt;friends&gt;"));
	}
}
