use yew::prelude::*;
use yew_hooks::use_timeout;
use yewdux::prelude::*;

use crate::notify::{Level, Notify, Toast};

const TOAST_LIFETIME_MS: u32 = 4000;

#[derive(Clone, PartialEq)]
pub struct ToastItem {
	pub id: usize,
	pub toast: Toast,
}

#[derive(Clone, PartialEq, Default, Store)]
pub struct Toasts {
	next_id: usize,
	items: Vec<ToastItem>,
}

impl Toasts {
	pub fn push(&mut self, toast: Toast) {
		self.next_id += 1;
		self.items.push(ToastItem { id: self.next_id, toast });
	}

	pub fn dismiss(&mut self, id: usize) {
		self.items.retain(|item| item.id != id);
	}
}

/// Forwards core-layer toasts into the global toast store. Off-wasm there is
/// no UI to show them in, so they only hit the log.
#[derive(Clone, Copy, Default)]
pub struct ToastNotifier;

impl Notify for ToastNotifier {
	fn push(&self, toast: Toast) {
		log::debug!(target: env!("CARGO_PKG_NAME"), "toast [{:?}] {}", toast.level, toast.message);
		#[cfg(target_arch = "wasm32")]
		Dispatch::<Toasts>::global().reduce_mut(move |all| all.push(toast));
	}
}

#[function_component]
pub fn ToastViewer() -> Html {
	let (toasts, _) = use_store::<Toasts>();
	html! {
		<div class={"toast-stack"}>
			{ for toasts.items.iter().map(|item| html! {
				<ToastCard key={item.id} item={item.clone()} />
			}) }
		</div>
	}
}

#[derive(Properties, PartialEq)]
struct ToastCardProps {
	item: ToastItem,
}

#[function_component]
fn ToastCard(props: &ToastCardProps) -> Html {
	let (_, dispatch) = use_store::<Toasts>();
	let id = props.item.id;
	let _expire = use_timeout(
		{
			let dispatch = dispatch.clone();
			move || dispatch.reduce_mut(|all| all.dismiss(id))
		},
		TOAST_LIFETIME_MS,
	);
	let onclick = dispatch.reduce_mut_callback(move |all| all.dismiss(id));
	let class = match props.item.toast.level {
		Level::Success => "toast is-success",
		Level::Error => "toast is-error",
		Level::Info => "toast is-info",
	};
	html! {
		<div {class} {onclick}>
			{&props.item.toast.message}
		</div>
	}
}
