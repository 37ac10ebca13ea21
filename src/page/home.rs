use yew::prelude::*;

use crate::components::{CityExplorer, FeaturedColleges, HeroSection, Testimonials};

#[function_component]
pub fn Home() -> Html {
	html! {<>
		<HeroSection />
		<FeaturedColleges />
		<CityExplorer />
		<Testimonials />
	</>}
}
