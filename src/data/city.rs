use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct City {
	pub id: String,
	pub name: String,
	pub state: String,
	// number of colleges in the city, as advertised on the explorer tiles
	pub count: u32,
	pub image: String,
}
