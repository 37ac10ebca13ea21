use yew::prelude::*;
use yew_router::prelude::Link;

use crate::components::{use_app, CollegeCard};
use crate::route::Route;

/// The home page strip of featured directory entries.
#[function_component]
pub fn FeaturedColleges() -> Html {
	let app = use_app();
	html! {
		<section class={"featured-colleges"}>
			<div class={"section-head"}>
				<h2>{"Featured Colleges"}</h2>
				<p>{"Explore top colleges in India with the best academic excellence, infrastructure, and placement records."}</p>
				<Link<Route> to={Route::Colleges}>{"View all colleges"}</Link<Route>>
			</div>
			<div class={"college-grid"}>
				{ for app.store().featured_colleges().into_iter().map(|college| html! {
					<CollegeCard
						key={college.id.clone()}
						college={college.clone()}
						featured={college.ranking <= 3}
					/>
				}) }
			</div>
		</section>
	}
}
