use std::cell::Cell;

use serde::{Deserialize, Serialize};

use crate::data::College;
use crate::util;

/// Simulated query round-trips, matching the prototype backend.
pub const SEARCH_DELAY_MS: u32 = 500;
pub const INITIAL_LOAD_DELAY_MS: u32 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
	/// Ranking, ascending. The directory's default order.
	#[default]
	Ranking,
	/// Rating, descending.
	Rating,
	/// Minimum annual fee, ascending.
	FeesLow,
	/// Minimum annual fee, descending.
	FeesHigh,
}

impl SortBy {
	pub fn value(&self) -> &'static str {
		match self {
			Self::Ranking => "ranking",
			Self::Rating => "rating",
			Self::FeesLow => "fees_low",
			Self::FeesHigh => "fees_high",
		}
	}

	/// Unrecognized values fall back to the default order.
	pub fn from_value(value: &str) -> Self {
		match value {
			"rating" => Self::Rating,
			"fees_low" => Self::FeesLow,
			"fees_high" => Self::FeesHigh,
			_ => Self::Ranking,
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Ranking => "Ranking: Low to High",
			Self::Rating => "Rating: High to Low",
			Self::FeesLow => "Fees: Low to High",
			Self::FeesHigh => "Fees: High to Low",
		}
	}
}

/// Filters arriving through the listing URL, e.g. `/colleges?city=Mumbai`.
/// These are the only recognized query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListingParams {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub city: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub course: Option<String>,
}

impl ListingParams {
	pub fn city(name: impl Into<String>) -> Self {
		Self { city: Some(name.into()), course: None }
	}

	pub fn course(name: impl Into<String>) -> Self {
		Self { city: None, course: Some(name.into()) }
	}
}

/// The full derivation input: free-text search, URL filters, and sort key.
/// All filters compose with logical AND; changing the sort key never resets
/// them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingQuery {
	pub search: String,
	pub params: ListingParams,
	pub sort: SortBy,
}

impl ListingQuery {
	pub fn from_params(params: ListingParams) -> Self {
		Self { params, ..Self::default() }
	}

	fn matches(&self, college: &College) -> bool {
		if !self.search.is_empty() {
			let term = self.search.to_lowercase();
			let hit = college.name.to_lowercase().contains(&term)
				|| college.location.city.to_lowercase().contains(&term);
			if !hit {
				return false;
			}
		}
		if let Some(city) = &self.params.city {
			if !college.location.city.eq_ignore_ascii_case(city) {
				return false;
			}
		}
		if let Some(course) = &self.params.course {
			if !college.offers_course(course) {
				return false;
			}
		}
		true
	}

	/// Pure derivation of the filtered, sorted view. May be empty; an empty
	/// result is an empty-state signal, not an error.
	pub fn apply(&self, colleges: &[College]) -> Vec<College> {
		let mut results: Vec<College> = colleges
			.iter()
			.filter(|college| self.matches(college))
			.cloned()
			.collect();
		match self.sort {
			SortBy::Ranking => results.sort_by_key(|college| college.ranking),
			SortBy::Rating => results.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
			SortBy::FeesLow => results.sort_by_key(|college| college.fees.min),
			SortBy::FeesHigh => results.sort_by_key(|college| std::cmp::Reverse(college.fees.min)),
		}
		results
	}
}

/// Sequences overlapping refreshes. Each call takes a ticket; a refresh whose
/// ticket has been superseded by the time its simulated latency elapses
/// reports stale (`None`) instead of overwriting a newer result. The
/// prototype let whichever call resolved last win; the ticket makes the
/// displayed result always belong to the most recent query.
#[derive(Default)]
pub struct ListingEngine {
	generation: Cell<u64>,
}

impl ListingEngine {
	pub fn begin(&self) -> u64 {
		let ticket = self.generation.get() + 1;
		self.generation.set(ticket);
		ticket
	}

	pub fn is_current(&self, ticket: u64) -> bool {
		self.generation.get() == ticket
	}

	pub async fn refresh(
		&self,
		colleges: &[College],
		query: &ListingQuery,
		delay_ms: u32,
	) -> Option<Vec<College>> {
		let ticket = self.begin();
		util::latency(delay_ms).await;
		if !self.is_current(ticket) {
			log::debug!(target: env!("CARGO_PKG_NAME"), "dropping stale listing refresh");
			return None;
		}
		Some(query.apply(colleges))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::store::AppStore;
	use futures::executor::block_on;
	use rstest::rstest;

	fn ids(colleges: &[College]) -> Vec<&str> {
		colleges.iter().map(|c| c.id.as_str()).collect()
	}

	#[test]
	fn default_query_returns_everything_by_ranking() {
		let store = AppStore::seeded();
		let results = ListingQuery::default().apply(store.colleges());
		assert_eq!(ids(&results), ["1", "2", "3", "4", "5", "6", "7"]);
	}

	#[rstest]
	#[case("bangalore", &["3"])]
	#[case("Institute", &["1", "3"])]
	#[case("UNIVERSITY", &["6"])]
	fn search_matches_name_or_city_case_insensitively(
		#[case] term: &str,
		#[case] expected: &[&str],
	) {
		let store = AppStore::seeded();
		let query = ListingQuery { search: term.into(), ..Default::default() };
		assert_eq!(ids(&query.apply(store.colleges())), expected);
	}

	#[test]
	fn city_and_course_params_compose_with_and() {
		let store = AppStore::seeded();
		let query = ListingQuery::from_params(ListingParams {
			city: Some("mumbai".into()),
			course: Some("mba".into()),
		});
		assert_eq!(ids(&query.apply(store.colleges())), ["1"]);
	}

	#[test]
	fn search_composes_with_city_param() {
		// City filter plus a search term no Mumbai college matches.
		let store = AppStore::seeded();
		let query = ListingQuery {
			search: "Universal".into(),
			params: ListingParams::city("Mumbai"),
			sort: SortBy::default(),
		};
		assert!(query.apply(store.colleges()).is_empty());
	}

	#[test]
	fn sort_orders_are_deterministic_and_total() {
		let store = AppStore::seeded();
		let mut query = ListingQuery::default();

		query.sort = SortBy::Rating;
		assert_eq!(ids(&query.apply(store.colleges())), ["1", "2", "3", "4", "5", "6", "7"]);

		query.sort = SortBy::FeesLow;
		assert_eq!(ids(&query.apply(store.colleges())), ["7", "5", "2", "1", "6", "3", "4"]);

		query.sort = SortBy::FeesHigh;
		assert_eq!(ids(&query.apply(store.colleges())), ["4", "3", "6", "1", "2", "5", "7"]);
	}

	#[test]
	fn sort_round_trip_reproduces_ranking_order() {
		let store = AppStore::seeded();
		let mut query = ListingQuery::default();
		let original = query.apply(store.colleges());
		query.sort = SortBy::Rating;
		let _ = query.apply(store.colleges());
		query.sort = SortBy::Ranking;
		assert_eq!(query.apply(store.colleges()), original);
	}

	#[test]
	fn sort_value_round_trip() {
		for sort in [SortBy::Ranking, SortBy::Rating, SortBy::FeesLow, SortBy::FeesHigh] {
			assert_eq!(SortBy::from_value(sort.value()), sort);
		}
		assert_eq!(SortBy::from_value("garbage"), SortBy::Ranking);
	}

	#[test]
	fn superseded_tickets_go_stale() {
		let engine = ListingEngine::default();
		let first = engine.begin();
		let second = engine.begin();
		assert!(!engine.is_current(first));
		assert!(engine.is_current(second));
	}

	#[test]
	fn refresh_resolves_the_latest_query() {
		let store = AppStore::seeded();
		let engine = ListingEngine::default();
		let query = ListingQuery { search: "pune".into(), ..Default::default() };
		let results = block_on(engine.refresh(store.colleges(), &query, SEARCH_DELAY_MS)).unwrap();
		assert_eq!(ids(&results), ["5"]);
	}
}
