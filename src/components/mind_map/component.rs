//! Leptos component wrapping the mind map canvas.
//!
//! Creates an HTML canvas sized to its container and wires up mouse/wheel
//! handlers for node dragging, click-selection, panning, and zooming. An
//! animation loop runs via `requestAnimationFrame`, ticking the force
//! simulation while it is hot and redrawing every frame. When a new graph
//! arrives on the `data` signal the previous simulation is stopped and the
//! whole render state is rebuilt.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::info;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::state::{DragState, MindMapState, PanState};
use super::theme::Theme;
use super::types::MindMapData;
use crate::components::toast::Toaster;

/// Render state shared between the canvas component and the export path.
///
/// `None` until the first graph arrives; replaced wholesale on regeneration.
pub type SharedMindMapState = Rc<RefCell<Option<MindMapState>>>;

/// Alpha target applied while a node is being dragged, so the rest of the
/// layout reacts live.
const DRAG_ALPHA_TARGET: f64 = 0.3;

/// Pointer travel (screen px) past which a press counts as a drag, not a click.
const CLICK_SLOP: f64 = 3.0;

/// Renders an interactive mind map, or a placeholder prompt before the
/// first generation.
#[component]
pub fn MindMapCanvas(
	#[prop(into)] data: Signal<Option<MindMapData>>,
	state: SharedMindMapState,
) -> impl IntoView {
	// `SharedMindMapState` is an `Rc`; the `Show` children closure must be
	// `Send + Sync`, so hand it across inside a `SendWrapper` (safe: CSR wasm
	// is single-threaded).
	let state = SendWrapper::new(state);
	view! {
		<Show
			when=move || data.get().is_some()
			fallback=|| {
				view! {
					<div class="mindmap-placeholder">
						<p>"Enter text and press generate to create a mind map"</p>
					</div>
				}
			}
		>
			<CanvasSurface data=data state=(*state).clone() />
		</Show>
	}
}

fn event_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// The canvas itself plus its event wiring and animation loop.
#[component]
fn CanvasSurface(data: Signal<Option<MindMapData>>, state: SharedMindMapState) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let loop_started = Rc::new(Cell::new(false));
	let cancelled = Rc::new(Cell::new(false));
	let toaster = Toaster::expect();

	let (state_init, animate_init) = (state.clone(), animate.clone());
	let (loop_started_init, cancelled_init) = (loop_started.clone(), cancelled.clone());
	Effect::new(move |_| {
		let Some(map) = data.get() else {
			return;
		};
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let (w, h) = (
			canvas
				.parent_element()
				.map(|p| p.client_width() as f64)
				.filter(|w| *w > 0.0)
				.unwrap_or(800.0),
			canvas
				.parent_element()
				.map(|p| p.client_height() as f64)
				.filter(|h| *h > 0.0)
				.unwrap_or(600.0),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		// Stop the old simulation before the new graph replaces it.
		if let Some(old) = state_init.borrow_mut().as_mut() {
			old.sim.stop();
		}
		info!(
			"mindmesh: rebuilding layout for {} nodes, {} links",
			map.nodes.len(),
			map.links.len()
		);
		*state_init.borrow_mut() = Some(MindMapState::new(&map, w, h));

		if loop_started_init.get() {
			return;
		}
		loop_started_init.set(true);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		let theme = Theme::default();

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		let cancelled_anim = cancelled_init.clone();
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if cancelled_anim.get() {
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				if s.sim.is_active() {
					s.tick();
				}
				render::render(s, &ctx, &theme);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = web_sys::window()
				.unwrap()
				.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	{
		// `on_cleanup` demands `Send + Sync`; these `Rc`s cross in a
		// `SendWrapper` (safe: CSR wasm is single-threaded).
		let cleanup = SendWrapper::new((state.clone(), cancelled.clone()));
		on_cleanup(move || {
			let (state_cleanup, cancelled_cleanup) = cleanup.take();
			cancelled_cleanup.set(true);
			if let Some(s) = state_cleanup.borrow_mut().as_mut() {
				s.sim.stop();
			}
		});
	}

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = event_position(&canvas, &ev);

		if let Some(ref mut s) = *state_md.borrow_mut() {
			if let Some(idx) = s.node_at_position(x, y) {
				let (gx, gy) = s.screen_to_graph(x, y);
				let (nx, ny) = {
					let node = &s.sim.nodes()[idx];
					(node.x, node.y)
				};
				s.drag = DragState {
					active: true,
					node: Some(idx),
					moved: false,
					start_x: x,
					start_y: y,
					offset_x: nx - gx,
					offset_y: ny - gy,
				};
				// Pin to the pointer and re-heat so the layout reacts live.
				s.sim.pin(idx, nx, ny);
				s.sim.set_alpha_target(DRAG_ALPHA_TARGET);
				s.sim.restart();
			} else {
				s.pan = PanState {
					active: true,
					moved: false,
					start_x: x,
					start_y: y,
					transform_start_x: s.transform.x,
					transform_start_y: s.transform.y,
				};
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = event_position(&canvas, &ev);

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.drag.active {
				if (x - s.drag.start_x).abs() + (y - s.drag.start_y).abs() > CLICK_SLOP {
					s.drag.moved = true;
				}
				if let Some(idx) = s.drag.node {
					let (gx, gy) = s.screen_to_graph(x, y);
					let (ox, oy) = (s.drag.offset_x, s.drag.offset_y);
					s.sim.pin(idx, gx + ox, gy + oy);
				}
			} else if s.pan.active {
				if (x - s.pan.start_x).abs() + (y - s.pan.start_y).abs() > CLICK_SLOP {
					s.pan.moved = true;
				}
				s.transform.x = s.pan.transform_start_x + (x - s.pan.start_x);
				s.transform.y = s.pan.transform_start_y + (y - s.pan.start_y);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			if s.drag.active {
				if let Some(idx) = s.drag.node {
					// Release the pin; the node returns to free motion and
					// the layout settles.
					s.sim.unpin(idx);
					s.sim.set_alpha_target(0.0);
					if !s.drag.moved {
						s.selected = Some(idx);
						toaster.info(format!("Selected: {}", s.nodes[idx].label));
					}
				}
				s.drag = DragState::default();
			} else if s.pan.active {
				if !s.pan.moved {
					s.selected = None;
				}
				s.pan = PanState::default();
			}
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			if s.drag.active {
				if let Some(idx) = s.drag.node {
					s.sim.unpin(idx);
					s.sim.set_alpha_target(0.0);
				}
			}
			s.drag = DragState::default();
			s.pan = PanState::default();
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = event_position(&canvas, &ev);

		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			s.zoom_at(x, y, factor);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="mindmap-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
