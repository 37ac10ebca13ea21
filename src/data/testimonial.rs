use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Testimonial {
	pub id: String,
	pub name: String,
	pub college: String,
	pub image: String,
	pub quote: String,
	pub course: String,
	pub year: u32,
}
