use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::use_app;
use crate::route::Route;
use crate::util;

#[function_component]
pub fn Login() -> Html {
	let app = use_app();
	let navigator = use_navigator().unwrap();
	let email = use_state(String::default);
	let password = use_state(String::default);

	let on_email = {
		let email = email.clone();
		Callback::from(move |e: InputEvent| {
			email.set(e.target_unchecked_into::<HtmlInputElement>().value());
		})
	};
	let on_password = {
		let password = password.clone();
		Callback::from(move |e: InputEvent| {
			password.set(e.target_unchecked_into::<HtmlInputElement>().value());
		})
	};
	let onsubmit = {
		let app = app.clone();
		let navigator = navigator.clone();
		let email = email.clone();
		let password = password.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();
			let app = app.clone();
			let navigator = navigator.clone();
			let email = (*email).clone();
			let password = (*password).clone();
			util::spawn_local(env!("CARGO_PKG_NAME"), async move {
				app.refresh();
				let result = app.session().login(&email, &password).await;
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
			<h1>{"Welcome back"}</h1>
			<form {onsubmit}>
				<label>
					{"Email"}
					<input type={"email"} value={(*email).clone()} oninput={on_email} required=true />
				</label>
				<label>
					{"Password"}
					<input type={"password"} value={(*password).clone()} oninput={on_password} required=true />
				</label>
				<button type={"submit"} disabled={pending}>
					{if pending { "Signing in..." } else { "Sign In" }}
				</button>
			</form>
			<p>
				{"New here? "}
				<Link<Route> to={Route::Signup}>{"Create an account"}</Link<Route>>
			</p>
		</main>
	}
}
