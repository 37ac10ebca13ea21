use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{use_app, CollegeCard};
use crate::route::Route;

#[function_component]
pub fn Profile() -> Html {
	let app = use_app();
	let navigator = use_navigator().unwrap();
	let user = app.current_user();

	// Anonymous visitors are sent to the login page.
	{
		let navigator = navigator.clone();
		use_effect_with(user.is_none(), move |anonymous| {
			if *anonymous {
				navigator.push(&Route::Login);
			}
		});
	}
	let Some(user) = user else {
		return html! {};
	};

	let logout = {
		let app = app.clone();
		let navigator = navigator.clone();
		Callback::from(move |_: MouseEvent| {
			app.session().logout();
			app.refresh();
			navigator.push(&Route::Home);
		})
	};

	let wishlisted: Vec<_> = user
		.wishlist
		.iter()
		.filter_map(|id| app.store().college(id).cloned())
		.collect();

	html! {
		<main class={"profile-page"}>
			<aside class={"profile-card"}>
				{ user.image.clone().map(|src| html! { <img {src} alt={user.name.clone()} /> }) }
				<h2>{&user.name}</h2>
				<p>{&user.email}</p>
				<p>{format!("Wishlist ({})", user.wishlist.len())}</p>
				<button onclick={logout}>{"Sign Out"}</button>
			</aside>
			<section class={"profile-wishlist"}>
				<h1>{"My Wishlist"}</h1>
				{ if wishlisted.is_empty() { html! {
					<div class={"empty-state"}>
						<p>{"Nothing saved yet. Browse colleges and tap the heart to keep them here."}</p>
						<Link<Route> to={Route::Colleges}>{"Browse Colleges"}</Link<Route>>
					</div>
				}} else { html! {
					<div class={"college-list"}>
						{ for wishlisted.iter().map(|college| html! {
							<CollegeCard key={college.id.clone()} college={college.clone()} />
						}) }
					</div>
				}}}
			</section>
		</main>
	}
}
