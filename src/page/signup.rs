use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::use_app;
use crate::route::Route;
use crate::util;

#[function_component]
pub fn Signup() -> Html {
	let app = use_app();
	let navigator = use_navigator().unwrap();
	let name = use_state(String::default);
	let email = use_state(String::default);
	let password = use_state(String::default);

	let bind = |state: &UseStateHandle<String>| {
		let state = state.clone();
		Callback::from(move |e: InputEvent| {
			state.set(e.target_unchecked_into::<HtmlInputElement>().value());
		})
	};
	let on_name = bind(&name);
	let on_email = bind(&email);
	let on_password = bind(&password);

	let onsubmit = {
		let app = app.clone();
		let navigator = navigator.clone();
		let name = name.clone();
		let email = email.clone();
		let password = password.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();
			let app = app.clone();
			let navigator = navigator.clone();
			let name = (*name).clone();
			let email = (*email).clone();
			let password = (*password).clone();
			util::spawn_local(env!("CARGO_PKG_NAME"), async move {
				app.refresh();
				let result = app.session().signup(&name, &email, &password).await;
				if result.is_ok() {
					navigator.push(&Route::Home);
				}
				app.refresh();
				Ok::<(), ()>(())
			});
		})
	};

	let pending = app.session().is_authenticating();
	html! {
		<main class={"auth-page"}>
			<h1>{"Create your account"}</h1>
			<form {onsubmit}>
				<label>
					{"Name"}
					<input type={"text"} value={(*name).clone()} oninput={on_name} required=true />
				</label>
				<label>
					{"Email"}
					<input type={"email"} value={(*email).clone()} oninput={on_email} required=true />
				</label>
				<label>
					{"Password"}
					<input type={"password"} value={(*password).clone()} oninput={on_password} required=true />
				</label>
				<button type={"submit"} disabled={pending}>
					{if pending { "Creating account..." } else { "Sign Up" }}
				</button>
			</form>
			<p>
				{"Already have an account? "}
				<Link<Route> to={Route::Login}>{"Sign in"}</Link<Route>>
			</p>
		</main>
	}
}
