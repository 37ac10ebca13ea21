use serde::{Deserialize, Serialize};

/// An account in the seed data or created through signup. The wishlist is an
/// ordered list of college ids with set semantics (no duplicates).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
	pub id: String,
	pub name: String,
	pub email: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image: Option<String>,
	#[serde(default)]
	pub wishlist: Vec<String>,
}

impl User {
	/// A freshly registered account: unique id, generated avatar, empty wishlist.
	pub fn registered(name: &str, email: &str) -> Self {
		let image = format!(
			"https://ui-avatars.com/api/?name={}&background=random",
			urlencoding::encode(name)
		);
		Self {
			id: uuid::Uuid::new_v4().to_string(),
			name: name.to_owned(),
			email: email.to_owned(),
			image: Some(image),
			wishlist: Vec::new(),
		}
	}
}
