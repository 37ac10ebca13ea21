use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::use_app;
use crate::listing::ListingParams;
use crate::route::Route;

/// City tiles linking into the listing with a `?city=` filter.
#[function_component]
pub fn CityExplorer() -> Html {
	let app = use_app();
	let navigator = use_navigator().unwrap();
	html! {
		<section class={"city-explorer"}>
			<h2>{"Explore by City"}</h2>
			<p>{"Find the best colleges in your city or explore educational opportunities across India."}</p>
			<div class={"city-grid"}>
				{ for app.store().cities().iter().map(|city| {
					let onclick = {
						let navigator = navigator.clone();
						let name = city.name.clone();
						Callback::from(move |_: MouseEvent| {
							let _ = navigator.push_with_query(
								&Route::Colleges,
								&ListingParams::city(name.clone()),
							);
						})
					};
					html! {
						<div class={"city-tile"} key={city.id.clone()} {onclick}>
							<img src={city.image.clone()} alt={city.name.clone()} />
							<h3>{&city.name}</h3>
							<p>{format!("{} colleges", city.count)}</p>
						</div>
					}
				}) }
			</div>
		</section>
	}
}
