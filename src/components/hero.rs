use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::use_app;
use crate::data::COURSES;
use crate::listing::ListingParams;
use crate::route::Route;

/// Landing search banner with quick links into the filtered listing.
#[function_component]
pub fn HeroSection() -> Html {
	let app = use_app();
	let navigator = use_navigator().unwrap();
	let term = use_state(String::default);

	let oninput = {
		let term = term.clone();
		Callback::from(move |e: InputEvent| {
			term.set(e.target_unchecked_into::<HtmlInputElement>().value());
		})
	};
	let onsubmit = {
		let app = app.clone();
		let navigator = navigator.clone();
		let term = term.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();
			// Terms naming a known city become a city filter; anything else
			// lands on the unfiltered listing for its own search box.
			let is_city = app
				.store()
				.cities()
				.iter()
				.any(|city| city.name.eq_ignore_ascii_case(&term));
			if is_city {
				let _ = navigator.push_with_query(
					&Route::Colleges,
					&ListingParams::city((*term).clone()),
				);
			} else {
				navigator.push(&Route::Colleges);
			}
		})
	};

	let course_link = |course: &str| {
		let navigator = navigator.clone();
		let course = course.to_owned();
		Callback::from(move |_: MouseEvent| {
			let _ = navigator.push_with_query(
				&Route::Colleges,
				&ListingParams::course(course.clone()),
			);
		})
	};

	html! {
		<section class={"hero"}>
			<h1>{"Find Your Perfect College"}</h1>
			<p>{"Search thousands of colleges, compare fees and placements, and save the ones you love."}</p>
			<form class={"hero-search"} {onsubmit}>
				<input
					type={"text"}
					placeholder={"Search for colleges, courses, or cities..."}
					value={(*term).clone()}
					{oninput}
				/>
				<button type={"submit"}>{"Search"}</button>
			</form>
			<div class={"hero-quick-links"}>
				<span>{"Popular:"}</span>
				{ for COURSES.iter().take(5).map(|course| html! {
					<button class={"chip"} onclick={course_link(course)}>{*course}</button>
				}) }
				{ for app.store().cities().iter().take(5).map(|city| {
					let navigator = navigator.clone();
					let name = city.name.clone();
					let onclick = Callback::from(move |_: MouseEvent| {
						let _ = navigator.push_with_query(
							&Route::Colleges,
							&ListingParams::city(name.clone()),
						);
					});
					html! { <button class={"chip"} {onclick}>{&city.name}</button> }
				}) }
			</div>
		</section>
	}
}
