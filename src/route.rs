use yew::prelude::*;
use yew_router::prelude::*;

use crate::page;

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
	#[at("/")]
	Home,
	#[at("/colleges")]
	Colleges,
	#[at("/colleges/:id")]
	CollegeDetail { id: String },
	#[at("/login")]
	Login,
	#[at("/signup")]
	Signup,
	#[at("/profile")]
	Profile,
	#[not_found]
	#[at("/404")]
	NotFound,
}

impl Route {
	fn html(self) -> Html {
		match self {
			Self::Home => html! { <page::Home /> },
			Self::Colleges => html! { <page::Colleges /> },
			Self::CollegeDetail { id } => html! { <page::CollegeDetail {id} /> },
			Self::Login => html! { <page::Login /> },
			Self::Signup => html! { <page::Signup /> },
			Self::Profile => html! { <page::Profile /> },
			Self::NotFound => html! { <h1>{"404: Page not found"}</h1> },
		}
	}

	pub fn switch() -> Html {
		html! { <Switch<Self> render={Self::html} /> }
	}
}
