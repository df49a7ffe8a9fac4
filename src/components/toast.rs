//! Transient toast notifications.
//!
//! A [`Toaster`] handle lives in the Leptos context; any component can push
//! a message and the [`ToastHost`] overlay renders the queue. Toasts
//! auto-dismiss after a few seconds. All user-visible errors in the app
//! surface through here; nothing is fatal.

use std::time::Duration;

use leptos::prelude::*;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
	Success,
	Error,
	Warning,
	Info,
}

impl ToastKind {
	fn class(self) -> &'static str {
		match self {
			ToastKind::Success => "toast toast-success",
			ToastKind::Error => "toast toast-error",
			ToastKind::Warning => "toast toast-warning",
			ToastKind::Info => "toast toast-info",
		}
	}
}

/// One queued notification.
#[derive(Clone, Debug)]
pub struct Toast {
	pub id: u64,
	pub kind: ToastKind,
	pub message: String,
}

/// How long a toast stays on screen.
const TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// Context handle for pushing toasts.
#[derive(Clone, Copy)]
pub struct Toaster {
	toasts: RwSignal<Vec<Toast>>,
	next_id: StoredValue<u64>,
}

impl Toaster {
	/// Creates a toaster and provides it to the component tree.
	pub fn provide() -> Self {
		let toaster = Self {
			toasts: RwSignal::new(Vec::new()),
			next_id: StoredValue::new(0),
		};
		provide_context(toaster);
		toaster
	}

	/// Fetches the toaster from context; panics if none was provided.
	pub fn expect() -> Self {
		expect_context::<Toaster>()
	}

	pub fn success(&self, message: impl Into<String>) {
		self.push(ToastKind::Success, message.into());
	}

	pub fn error(&self, message: impl Into<String>) {
		self.push(ToastKind::Error, message.into());
	}

	pub fn warning(&self, message: impl Into<String>) {
		self.push(ToastKind::Warning, message.into());
	}

	pub fn info(&self, message: impl Into<String>) {
		self.push(ToastKind::Info, message.into());
	}

	fn push(&self, kind: ToastKind, message: String) {
		let id = self.next_id.get_value();
		self.next_id.set_value(id + 1);
		self.toasts.update(|queue| {
			queue.push(Toast { id, kind, message });
		});

		let toasts = self.toasts;
		set_timeout(
			move || toasts.update(|queue| queue.retain(|t| t.id != id)),
			TOAST_LIFETIME,
		);
	}
}

/// Fixed overlay rendering the current toast queue.
#[component]
pub fn ToastHost() -> impl IntoView {
	let toaster = Toaster::expect();

	view! {
		<div class="toast-host">
			<For
				each=move || toaster.toasts.get()
				key=|toast| toast.id
				children=move |toast: Toast| {
					view! { <div class=toast.kind.class()>{toast.message}</div> }
				}
			/>
		</div>
	}
}
