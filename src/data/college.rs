use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Location {
	pub city: String,
	pub state: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FeeRange {
	pub min: u32,
	pub max: u32,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub per_semester: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Placements {
	pub average_package: u32,
	pub highest_package: u32,
	pub placement_percentage: u32,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub top_recruiters: Vec<String>,
}

// A directory entry. Fixture data only; never created or mutated at runtime.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct College {
	pub id: String,
	pub name: String,
	pub location: Location,
	pub rating: f32,
	pub reviews: u32,
	pub ranking: u32,
	pub fees: FeeRange,
	pub courses: Vec<String>,
	pub facilities: Vec<String>,
	pub image: String,
	pub description: String,
	pub established: u32,
	pub website: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub placements: Option<Placements>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub awards: Vec<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub accreditation: Vec<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub nirf: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub naac: Option<String>,
	#[serde(default)]
	pub featured: bool,
}

impl College {
	/// Semester fee when published, otherwise half of the annual minimum.
	pub fn fee_per_semester(&self) -> u32 {
		self.fees.per_semester.unwrap_or(self.fees.min / 2)
	}

	pub fn offers_course(&self, course: &str) -> bool {
		self.courses.iter().any(|name| name.eq_ignore_ascii_case(course))
	}
}
