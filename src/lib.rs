//! mindmesh: turn free-form text into an interactive force-directed mind map.
//!
//! The app splits input text into topics with a heuristic generator, lays
//! the resulting graph out with a damped force simulation on a canvas, and
//! can export the current diagram as an SVG file.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, error, info, warn};

// Pulled in for its "js" feature so `rand` can seed itself on wasm.
use getrandom as _;

pub mod components;
pub mod export;
pub mod generator;

pub use components::mind_map::{
	MindMapCanvas, MindMapData, MindMapLink, MindMapNode, SharedMindMapState, Theme,
};

use components::header::Header;
use components::text_input::TextInput;
use components::toast::{ToastHost, Toaster};
use export::ExportError;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("mindmesh: logging initialized");
}

/// Emulated backend latency for a generation request.
const GENERATION_DELAY: Duration = Duration::from_millis(1500);

const APP_CSS: &str = "
	* { box-sizing: border-box; margin: 0; }
	html, body { height: 100%; font-family: sans-serif; }
	.app { display: flex; flex-direction: column; height: 100vh; }
	.app-header { display: flex; align-items: center; justify-content: space-between;
		padding: 12px 16px; border-bottom: 1px solid #e2e8f0; }
	.app-header h1 { font-size: 22px; background: linear-gradient(90deg, #0ea5e9, #8b5cf6);
		-webkit-background-clip: text; background-clip: text; color: transparent; }
	.app-header .subtitle { font-size: 13px; color: #64748b; }
	.header-button, .text-input button { padding: 8px 14px; border: 1px solid #cbd5e1;
		border-radius: 6px; background: #fff; cursor: pointer; }
	.text-input button { background: linear-gradient(90deg, #0ea5e9, #8b5cf6);
		color: #fff; border: none; }
	.text-input button:disabled { opacity: 0.6; cursor: default; }
	.app-body { display: flex; gap: 16px; padding: 16px; flex: 1; min-height: 0; }
	.side-column { display: flex; flex-direction: column; gap: 16px; width: 33%; }
	.canvas-column { flex: 1; min-height: 400px; position: relative; }
	.panel { border: 1px solid #e2e8f0; border-radius: 10px; padding: 16px;
		background: #fff; display: flex; flex-direction: column; gap: 12px; }
	.panel h2 { font-size: 17px; }
	.text-input textarea { min-height: 160px; padding: 12px; border: 1px solid #cbd5e1;
		border-radius: 6px; resize: vertical; font: inherit; }
	.instructions ul { padding-left: 20px; font-size: 13px; color: #64748b; }
	.mindmap-placeholder { display: flex; align-items: center; justify-content: center;
		height: 100%; border: 2px dashed #cbd5e1; border-radius: 10px; color: #64748b; }
	.mindmap-canvas { width: 100%; height: 100%; border-radius: 10px; }
	.toast-host { position: fixed; bottom: 16px; right: 16px; display: flex;
		flex-direction: column; gap: 8px; z-index: 10; }
	.toast { padding: 10px 16px; border-radius: 8px; color: #fff; font-size: 14px;
		box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); }
	.toast-success { background: #10b981; }
	.toast-error { background: #ef4444; }
	.toast-warning { background: #f97316; }
	.toast-info { background: #334155; }
";

/// Main application component: header, input panel, and the mind map canvas.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	let toaster = Toaster::provide();

	let (data, set_data) = signal(None::<MindMapData>);
	let (loading, set_loading) = signal(false);
	let shared: SharedMindMapState = Rc::new(RefCell::new(None));

	let on_generate = UnsyncCallback::new(move |text: String| {
		set_loading.set(true);
		// Fixed delay emulating a backend round trip; the generator itself
		// is synchronous. A newer request simply supersedes this result.
		set_timeout(
			move || {
				let mut rng = rand::thread_rng();
				let map = generator::generate_mind_map(&text, &mut rng);
				info!(
					"mindmesh: generated {} nodes, {} links",
					map.nodes.len(),
					map.links.len()
				);
				set_data.set(Some(map));
				set_loading.set(false);
				toaster.success("Mind map created successfully!");
			},
			GENERATION_DELAY,
		);
	});

	let shared_export = shared.clone();
	let on_export = UnsyncCallback::new(move |_: ()| {
		let result = match shared_export.borrow().as_ref() {
			Some(state) => export::render_svg(state, &Theme::default()),
			None => Err(ExportError::EmptyGraph),
		};
		match result {
			Ok(svg) => match export::download_svg(&svg) {
				Ok(()) => toaster.success("Mind map exported successfully!"),
				Err(err) => {
					error!("mindmesh: export failed: {err:?}");
					toaster.error("Failed to export mind map");
				}
			},
			Err(err) => {
				warn!("mindmesh: export rejected: {err}");
				toaster.error("No mind map to export");
			}
		}
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="MindMesh Creator" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Style>{APP_CSS}</Style>

		<div class="app">
			<Header on_export=on_export />
			<div class="app-body">
				<div class="side-column">
					<TextInput on_generate=on_generate loading=loading />
					<Show when=move || data.get().is_some()>
						<div class="panel instructions">
							<h3>"Instructions"</h3>
							<ul>
								<li>"Drag nodes to rearrange the mind map"</li>
								<li>"Click on a node to select it"</li>
								<li>"Use the mouse wheel to zoom in and out"</li>
								<li>"Click and drag the background to pan"</li>
							</ul>
						</div>
					</Show>
				</div>
				<div class="canvas-column">
					<MindMapCanvas data=data state=shared.clone() />
				</div>
			</div>
			<ToastHost />
		</div>
	}
}
