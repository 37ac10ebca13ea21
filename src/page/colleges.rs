use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{use_app, CollegeCard};
use crate::data::College;
use crate::listing::{
	ListingEngine, ListingParams, ListingQuery, SortBy, INITIAL_LOAD_DELAY_MS, SEARCH_DELAY_MS,
};
use crate::util;

#[function_component]
pub fn Colleges() -> Html {
	let app = use_app();
	let location = use_location().unwrap();
	let params = location.query::<ListingParams>().unwrap_or_default();

	let query = use_state(|| ListingQuery::from_params(params.clone()));
	// Search box text; seeded from the city parameter like the rest of the
	// listing header.
	let draft = use_state(|| params.city.clone().unwrap_or_default());
	// None while a (simulated) query is in flight.
	let results = use_state(|| None::<Vec<College>>);
	let engine = use_memo((), |_| ListingEngine::default());
	let first_load = use_mut_ref(|| true);

	// Arriving with fresh URL parameters resets the whole query.
	{
		let query = query.clone();
		let draft = draft.clone();
		use_effect_with(params, move |params| {
			draft.set(params.city.clone().unwrap_or_default());
			query.set(ListingQuery::from_params(params.clone()));
		});
	}

	// Every query change recomputes through the engine; stale refreshes
	// resolve to `None` and leave the newer result alone.
	{
		let app = app.clone();
		let results = results.clone();
		let engine = engine.clone();
		let first_load = first_load.clone();
		use_effect_with((*query).clone(), move |query| {
			let delay = if std::mem::take(&mut *first_load.borrow_mut()) {
				INITIAL_LOAD_DELAY_MS
			} else {
				SEARCH_DELAY_MS
			};
			results.set(None);
			let query = query.clone();
			util::spawn_local(env!("CARGO_PKG_NAME"), async move {
				let refreshed = engine.refresh(app.store().colleges(), &query, delay).await;
				if let Some(colleges) = refreshed {
					results.set(Some(colleges));
				}
				Ok::<(), ()>(())
			});
		});
	}

	let oninput = {
		let draft = draft.clone();
		Callback::from(move |e: InputEvent| {
			draft.set(e.target_unchecked_into::<HtmlInputElement>().value());
		})
	};
	let onsubmit = {
		let query = query.clone();
		let draft = draft.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();
			query.set(ListingQuery { search: (*draft).clone(), ..(*query).clone() });
		})
	};
	let onsort = {
		let query = query.clone();
		Callback::from(move |e: Event| {
			let value = e.target_unchecked_into::<HtmlSelectElement>().value();
			query.set(ListingQuery { sort: SortBy::from_value(&value), ..(*query).clone() });
		})
	};
	let reset = {
		let query = query.clone();
		let draft = draft.clone();
		Callback::from(move |_: MouseEvent| {
			draft.set(String::new());
			query.set(ListingQuery::default());
		})
	};

	let body = match &*results {
		None => html! {
			<div class={"spinner"} aria-label={"Loading"} />
		},
		Some(colleges) if colleges.is_empty() => html! {
			<div class={"empty-state"}>
				<h3>{"No Colleges Found"}</h3>
				<p>{"Try adjusting your search or filter criteria"}</p>
				<button onclick={reset}>{"Reset Filters"}</button>
			</div>
		},
		Some(colleges) => html! {
			<div class={"college-list"}>
				{ for colleges.iter().map(|college| html! {
					<CollegeCard key={college.id.clone()} college={college.clone()} />
				}) }
			</div>
		},
	};

	let count = results.as_ref().map(|colleges| colleges.len());
	html! {
		<main class={"colleges-page"}>
			<header class={"colleges-header"}>
				<div>
					<h1>{"Colleges in India"}</h1>
					<p>{match count {
						Some(n) => format!("{n} colleges found"),
						None => "Searching...".to_owned(),
					}}</p>
				</div>
				<form {onsubmit}>
					<input
						type={"text"}
						placeholder={"Search colleges..."}
						value={(*draft).clone()}
						{oninput}
					/>
				</form>
				<label>
					{"Sort by: "}
					<select onchange={onsort}>
						{ for [SortBy::Ranking, SortBy::Rating, SortBy::FeesLow, SortBy::FeesHigh]
							.into_iter()
							.map(|sort| html! {
								<option value={sort.value()} selected={sort == query.sort}>
									{sort.label()}
								</option>
							}) }
					</select>
				</label>
			</header>
			{body}
		</main>
	}
}
