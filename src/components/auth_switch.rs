use yew::prelude::*;

use crate::components::use_app;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct AuthSwitchProps {
	#[prop_or_default]
	pub identified: Option<Html>,
	#[prop_or_default]
	pub anonymous: Option<Html>,
}

/// Renders one of two subtrees depending on whether a user is signed in.
#[function_component]
pub fn AuthSwitch(props: &AuthSwitchProps) -> Html {
	let app = use_app();
	let empty = || html! {};
	match app.current_user() {
		Some(_) => props.identified.clone().unwrap_or_else(empty),
		None => props.anonymous.clone().unwrap_or_else(empty),
	}
}
