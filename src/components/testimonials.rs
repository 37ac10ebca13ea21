use yew::prelude::*;

use crate::components::use_app;

#[function_component]
pub fn Testimonials() -> Html {
	let app = use_app();
	html! {
		<section class={"testimonials"}>
			<h2>{"What Students Say"}</h2>
			<div class={"testimonial-grid"}>
				{ for app.store().testimonials().iter().map(|entry| html! {
					<figure class={"testimonial"} key={entry.id.clone()}>
						<blockquote>{&entry.quote}</blockquote>
						<figcaption>
							<img src={entry.image.clone()} alt={entry.name.clone()} />
							<div>
								<strong>{&entry.name}</strong>
								<p>{format!("{}, {} ({})", entry.course, entry.college, entry.year)}</p>
							</div>
						</figcaption>
					</figure>
				}) }
			</div>
		</section>
	}
}
