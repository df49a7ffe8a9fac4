//! Text entry panel driving generation.

use leptos::prelude::*;

use super::toast::Toaster;

/// Textarea plus a generate button. Blank input is rejected here with a
/// warning toast; the generator itself is never invoked for it.
#[component]
pub fn TextInput(
	#[prop(into)] on_generate: UnsyncCallback<String>,
	#[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
	let (text, set_text) = signal(String::new());
	let toaster = Toaster::expect();

	let submit = move |_| {
		let value = text.get();
		if value.trim().is_empty() {
			toaster.warning("Please enter some text to generate a mind map");
			return;
		}
		on_generate.run(value);
	};

	view! {
		<div class="panel text-input">
			<h2>"Generate Mind Map"</h2>
			<textarea
				placeholder="Enter your text, notes, or concepts here..."
				prop:value=move || text.get()
				on:input=move |ev| set_text.set(event_target_value(&ev))
			/>
			<button on:click=submit disabled=move || loading.get()>
				{move || if loading.get() { "Generating..." } else { "Generate Mind Map" }}
			</button>
		</div>
	}
}
