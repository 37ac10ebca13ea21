use yew::prelude::*;
use yew_router::prelude::Link;

use crate::components::use_app;
use crate::data::College;
use crate::route::Route;
use crate::util::format_inr;

#[derive(Properties, PartialEq)]
pub struct CollegeCardProps {
	pub college: College,
	#[prop_or_default]
	pub featured: bool,
}

#[function_component]
pub fn CollegeCard(props: &CollegeCardProps) -> Html {
	let app = use_app();
	let college = &props.college;
	let saved = app.session().is_in_wishlist(&college.id);
	let toggle_wishlist = {
		let app = app.clone();
		let id = college.id.clone();
		Callback::from(move |_: MouseEvent| {
			let session = app.session();
			if session.is_in_wishlist(&id) {
				let _ = session.remove_from_wishlist(&id);
			} else {
				let _ = session.add_to_wishlist(&id);
			}
			app.refresh();
		})
	};
	let card_class = if props.featured { "college-card is-featured" } else { "college-card" };
	let heart_class = if saved { "wishlist-toggle is-saved" } else { "wishlist-toggle" };
	html! {
		<div class={card_class}>
			<img src={college.image.clone()} alt={college.name.clone()} />
			<div class={"college-card-body"}>
				<div class={"college-card-head"}>
					<Link<Route> to={Route::CollegeDetail { id: college.id.clone() }}>
						<h3>{&college.name}</h3>
					</Link<Route>>
					<button class={heart_class} onclick={toggle_wishlist}>
						{if saved { "♥" } else { "♡" }}
					</button>
				</div>
				<p class={"college-card-location"}>
					{format!("{}, {}", college.location.city, college.location.state)}
				</p>
				<div class={"college-card-stats"}>
					<span>{format!("★ {}/5 ({} reviews)", college.rating, college.reviews)}</span>
					<span>{format!("Rank #{}", college.ranking)}</span>
					<span>{format!("{} - {}", format_inr(college.fees.min), format_inr(college.fees.max))}</span>
				</div>
				<div class={"college-card-courses"}>
					{ for college.courses.iter().map(|course| html! {
						<span class={"badge"}>{course}</span>
					}) }
				</div>
			</div>
		</div>
	}
}
