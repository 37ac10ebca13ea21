use yew::prelude::*;
use yew_router::prelude::Link;

use crate::components::use_app;
use crate::data::College;
use crate::route::Route;
use crate::util::{self, format_inr};

const DETAIL_DELAY_MS: u32 = 500;

#[derive(Properties, PartialEq)]
pub struct CollegeDetailProps {
	pub id: String,
}

#[function_component]
pub fn CollegeDetail(props: &CollegeDetailProps) -> Html {
	let app = use_app();
	// None while loading; Some(None) when the id is unknown.
	let college = use_state(|| None::<Option<College>>);

	{
		let app = app.clone();
		let college = college.clone();
		use_effect_with(props.id.clone(), move |id| {
			college.set(None);
			let id = id.clone();
			util::spawn_local(env!("CARGO_PKG_NAME"), async move {
				util::latency(DETAIL_DELAY_MS).await;
				college.set(Some(app.store().college(&id).cloned()));
				Ok::<(), ()>(())
			});
		});
	}

	let Some(loaded) = &*college else {
		return html! { <div class={"spinner"} aria-label={"Loading"} /> };
	};
	let Some(college) = loaded else {
		// Unknown ids get an in-page fallback, never a hard failure.
		return html! {
			<main class={"detail-missing"}>
				<h1>{"College Not Found"}</h1>
				<p>{"The college you're looking for doesn't exist or has been removed."}</p>
				<Link<Route> to={Route::Colleges}>{"Browse All Colleges"}</Link<Route>>
			</main>
		};
	};

	let saved = app.session().is_in_wishlist(&college.id);
	let toggle = {
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

	html! {
		<main class={"detail-page"}>
			<nav class={"breadcrumbs"}>
				<Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
				{" / "}
				<Link<Route> to={Route::Colleges}>{"Colleges"}</Link<Route>>
				{" / "}
				<span>{&college.name}</span>
			</nav>

			<header class={"detail-head"}>
				<img src={college.image.clone()} alt={college.name.clone()} />
				<div>
					<h1>{&college.name}</h1>
					<p>{format!("{}, {}", college.location.city, college.location.state)}</p>
					<p>{format!("★ {}/5 ({} reviews) · Est. {}", college.rating, college.reviews, college.established)}</p>
					<div class={"detail-badges"}>
						{ college.naac.as_ref().map(|grade| html! {
							<span class={"badge"}>{format!("NAAC {grade}")}</span>
						}) }
						{ college.nirf.map(|rank| html! {
							<span class={"badge"}>{format!("NIRF RANK #{rank}")}</span>
						}) }
					</div>
					<button class={if saved { "wishlist-toggle is-saved" } else { "wishlist-toggle" }} onclick={toggle}>
						{if saved { "♥ Saved" } else { "♡ Save to wishlist" }}
					</button>
				</div>
			</header>

			<section class={"detail-overview"}>
				<h2>{"Overview"}</h2>
				<p>{&college.description}</p>
				<p><a href={format!("https://{}", college.website)}>{&college.website}</a></p>
				{ if college.awards.is_empty() { html! {} } else { html! {
					<div>
						<h3>{"Awards & Recognition"}</h3>
						<ul>{ for college.awards.iter().map(|award| html! { <li>{award}</li> }) }</ul>
					</div>
				}}}
				{ if college.accreditation.is_empty() { html! {} } else { html! {
					<div>
						<h3>{"Accreditation"}</h3>
						<ul>{ for college.accreditation.iter().map(|item| html! { <li>{item}</li> }) }</ul>
					</div>
				}}}
			</section>

			<section class={"detail-courses"}>
				<h2>{"Courses & Fees"}</h2>
				<div class={"college-card-courses"}>
					{ for college.courses.iter().map(|course| html! {
						<span class={"badge"}>{course}</span>
					}) }
				</div>
				<p>{format!(
					"Annual fees: {} - {} · Per semester: {}",
					format_inr(college.fees.min),
					format_inr(college.fees.max),
					format_inr(college.fee_per_semester()),
				)}</p>
			</section>

			<section class={"detail-placements"}>
				<h2>{"Placement Information"}</h2>
				{ match &college.placements {
					Some(placements) => html! {<>
						<dl>
							<dt>{"Average Package"}</dt>
							<dd>{format!("{}/year", format_inr(placements.average_package))}</dd>
							<dt>{"Highest Package"}</dt>
							<dd>{format!("{}/year", format_inr(placements.highest_package))}</dd>
							<dt>{"Placement Rate"}</dt>
							<dd>{format!("{}%", placements.placement_percentage)}</dd>
						</dl>
						{ if placements.top_recruiters.is_empty() { html! {} } else { html! {
							<div>
								<h3>{"Top Recruiters"}</h3>
								<ul>{ for placements.top_recruiters.iter().map(|company| html! {
									<li>{company}</li>
								}) }</ul>
							</div>
						}}}
					</>},
					None => html! {
						<p>{"Placement information not available for this college."}</p>
					},
				}}
			</section>

			<section class={"detail-facilities"}>
				<h2>{"Facilities"}</h2>
				<ul>{ for college.facilities.iter().map(|facility| html! { <li>{facility}</li> }) }</ul>
			</section>
		</main>
	}
}
