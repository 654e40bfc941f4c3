// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Normalized search records and the useful-info projection.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Organic hits kept in [`UsefulInfo`].
pub const USEFUL_ORGANIC_LIMIT: usize = 3;

/// Echo of the request parameters Serper reports back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParameters {
	pub query: String,
	pub location: String,
	pub language: String,
	pub num_results: u32,
	pub autocorrect: bool,
	pub page: u32,
	pub search_engine: String,
}

impl SearchParameters {
	/// Parameters for `query` with every optional field at its default.
	pub fn for_query(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
			location: String::new(),
			language: String::new(),
			num_results: 0,
			autocorrect: false,
			page: 1,
			search_engine: String::new(),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeGraph {
	pub title: String,
	#[serde(rename = "type")]
	pub kind: String,
	pub website: String,
	pub description: String,
	pub description_source: String,
	pub description_link: String,
	/// Source order is preserved.
	pub attributes: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganicResult {
	pub title: String,
	pub link: String,
	pub snippet: String,
	/// Rank reported by Serper; `None` when missing or not a non-negative
	/// integer.
	pub position: Option<u32>,
	pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeopleAlsoAsk {
	pub question: String,
	pub snippet: String,
	pub title: String,
	pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopStory {
	pub title: String,
	pub link: String,
	pub source: String,
	pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedSearch {
	pub query: String,
}

/// The full normalized search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
	pub search_parameters: SearchParameters,
	pub knowledge_graph: Option<KnowledgeGraph>,
	pub organic_results: Vec<OrganicResult>,
	pub top_stories: Option<Vec<TopStory>>,
	pub people_also_ask: Option<Vec<PeopleAlsoAsk>>,
	pub related_searches: Option<Vec<RelatedSearch>>,
}

impl SearchResult {
	pub fn useful_info(&self) -> UsefulInfo {
		useful_info(self)
	}
}

/// The truncated view of a [`SearchResult`] handed to consumers.
///
/// Field order is part of the output format: `knowledge_graph`,
/// `organic_results`, `people_also_ask`, `top_stories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsefulInfo {
	pub knowledge_graph: Option<KnowledgeGraph>,
	pub organic_results: Vec<OrganicResult>,
	pub people_also_ask: Option<PeopleAlsoAsk>,
	pub top_stories: Option<TopStory>,
}

impl UsefulInfo {
	/// Compact JSON, non-ASCII left unescaped.
	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string(self)
	}

	pub fn to_json_pretty(&self) -> serde_json::Result<String> {
		serde_json::to_string_pretty(self)
	}
}

impl fmt::Display for UsefulInfo {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let json = self.to_json().map_err(|_| fmt::Error)?;
		f.write_str(&json)
	}
}

/// Projects `result` onto its useful subset: the knowledge graph, the first
/// three organic hits, and the first people-also-ask entry and top story.
pub fn useful_info(result: &SearchResult) -> UsefulInfo {
	UsefulInfo {
		knowledge_graph: result.knowledge_graph.clone(),
		organic_results: result
			.organic_results
			.iter()
			.take(USEFUL_ORGANIC_LIMIT)
			.cloned()
			.collect(),
		people_also_ask: first_of(&result.people_also_ask),
		top_stories: first_of(&result.top_stories),
	}
}

fn first_of<T: Clone>(items: &Option<Vec<T>>) -> Option<T> {
	items.as_deref().and_then(<[T]>::first).cloned()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn organic(n: u32) -> OrganicResult {
		OrganicResult {
			title: format!("Result {n}"),
			link: format!("https://example.com/{n}"),
			snippet: format!("snippet {n}"),
			position: Some(n),
			date: String::new(),
		}
	}

	fn story(title: &str) -> TopStory {
		TopStory {
			title: title.to_string(),
			link: "https://news.example.com".to_string(),
			source: "Example News".to_string(),
			date: "2 hours ago".to_string(),
		}
	}

	fn result_with(organic_count: u32) -> SearchResult {
		SearchResult {
			search_parameters: SearchParameters::for_query("rust"),
			knowledge_graph: None,
			organic_results: (1..=organic_count).map(organic).collect(),
			top_stories: None,
			people_also_ask: None,
			related_searches: None,
		}
	}

	#[test]
	fn keeps_first_three_organic_results_in_order() {
		let info = useful_info(&result_with(5));
		assert_eq!(
			info.organic_results,
			vec![organic(1), organic(2), organic(3)]
		);
	}

	#[test]
	fn short_organic_lists_are_kept_whole() {
		assert_eq!(useful_info(&result_with(2)).organic_results.len(), 2);
		assert!(useful_info(&result_with(0)).organic_results.is_empty());
	}

	#[test]
	fn takes_first_story_and_question() {
		let mut result = result_with(1);
		result.top_stories = Some(vec![story("first"), story("second")]);
		result.people_also_ask = Some(vec![PeopleAlsoAsk {
			question: "What is Rust?".to_string(),
			snippet: "A language".to_string(),
			title: "Rust".to_string(),
			link: "https://www.rust-lang.org".to_string(),
		}]);

		let info = result.useful_info();
		assert_eq!(info.top_stories, Some(story("first")));
		assert_eq!(
			info.people_also_ask.map(|paa| paa.question).as_deref(),
			Some("What is Rust?")
		);
	}

	#[test]
	fn empty_sequences_project_to_none() {
		let mut result = result_with(1);
		result.top_stories = Some(Vec::new());
		result.people_also_ask = Some(Vec::new());

		let info = useful_info(&result);
		assert!(info.top_stories.is_none());
		assert!(info.people_also_ask.is_none());
	}

	#[test]
	fn projection_leaves_the_result_untouched() {
		let mut result = result_with(5);
		result.top_stories = Some(vec![story("a"), story("b")]);
		let before = result.clone();

		let first = useful_info(&result);
		let second = useful_info(&result);
		assert_eq!(first, second);
		assert_eq!(result, before);
	}

	#[test]
	fn json_output_is_compact_ordered_and_unescaped() {
		let info = UsefulInfo {
			knowledge_graph: Some(KnowledgeGraph {
				title: "华为".to_string(),
				kind: "公司".to_string(),
				..Default::default()
			}),
			organic_results: Vec::new(),
			people_also_ask: None,
			top_stories: None,
		};

		let json = info.to_json().unwrap();
		assert!(json.starts_with(r#"{"knowledge_graph":{"title":"华为","type":"公司","#));
		assert!(json.ends_with(r#""organic_results":[],"people_also_ask":null,"top_stories":null}"#));
		assert!(!json.contains(' '));
		assert_eq!(info.to_string(), json);
	}

	#[test]
	fn knowledge_graph_attributes_keep_insertion_order() {
		let mut attributes = IndexMap::new();
		attributes.insert("Founded".to_string(), "1987".to_string());
		attributes.insert("CEO".to_string(), "Someone".to_string());
		attributes.insert("Area served".to_string(), "Worldwide".to_string());
		let graph = KnowledgeGraph {
			attributes,
			..Default::default()
		};

		let json = serde_json::to_string(&graph).unwrap();
		let founded = json.find("Founded").unwrap();
		let ceo = json.find("CEO").unwrap();
		let area = json.find("Area served").unwrap();
		assert!(founded < ceo && ceo < area);
	}
}
