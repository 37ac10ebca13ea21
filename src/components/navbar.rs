use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{use_app, AuthSwitch};
use crate::route::Route;

#[function_component]
pub fn Navbar() -> Html {
	let app = use_app();
	let navigator = use_navigator().unwrap();
	let logout = {
		let app = app.clone();
		let navigator = navigator.clone();
		Callback::from(move |_: MouseEvent| {
			app.session().logout();
			app.refresh();
			navigator.push(&Route::Home);
		})
	};
	let user_name = app.current_user().map(|user| user.name).unwrap_or_default();
	html! {
		<nav class={"navbar"}>
			<Link<Route> classes={"navbar-brand"} to={Route::Home}>{"CollegeHub"}</Link<Route>>
			<div class={"navbar-links"}>
				<Link<Route> classes={"navbar-item"} to={Route::Home}>{"Home"}</Link<Route>>
				<Link<Route> classes={"navbar-item"} to={Route::Colleges}>{"Colleges"}</Link<Route>>
			</div>
			<div class={"navbar-end"}>
				<AuthSwitch
					identified={html! {<>
						<Link<Route> classes={"navbar-item"} to={Route::Profile}>{user_name}</Link<Route>>
						<button class={"navbar-button"} onclick={logout}>{"Sign Out"}</button>
					</>}}
					anonymous={html! {<>
						<Link<Route> classes={"navbar-item"} to={Route::Login}>{"Login"}</Link<Route>>
						<Link<Route> classes={"navbar-button"} to={Route::Signup}>{"Sign Up"}</Link<Route>>
					</>}}
				/>
			</div>
		</nav>
	}
}
