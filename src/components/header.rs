//! Page header with the app title and the export action.

use leptos::prelude::*;

/// Top bar: title, tagline, export button.
#[component]
pub fn Header(#[prop(into)] on_export: UnsyncCallback<()>) -> impl IntoView {
	view! {
		<header class="app-header">
			<div>
				<h1>"MindMesh Creator"</h1>
				<p class="subtitle">"AI-Powered Mind Map Generator"</p>
			</div>
			<button class="header-button" on:click=move |_| on_export.run(())>
				"Export"
			</button>
		</header>
	}
}
