// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Raw Serper JSON to [`SearchResult`].

use serde_json::Value;

use crate::error::NormalizeError;
use crate::extract::{self, Object};
use crate::result::{
	useful_info, KnowledgeGraph, OrganicResult, SearchParameters, SearchResult, UsefulInfo,
};

const QUERY_FIELD: &str = "searchParameters.q";

/// Builds a [`SearchResult`] from a raw Serper response.
///
/// `searchParameters.q` must be a string. Everything else is optional:
///
/// - `gl`, `hl`, `num`, `autocorrect`, `page`, `engine` fall back to `""`,
///   `""`, `0`, `false`, `1`, `""` when missing or of the wrong type.
/// - `knowledgeGraph` is `None` unless it is a non-empty object; its string
///   fields default to `""` and `attributes` to empty.
/// - `organic` keeps source order (never re-sorted by `position`);
///   non-object entries are skipped.
/// - `topStories`, `peopleAlsoAsk` and `relatedSearches` are taken as-is
///   with no per-field defaults: a value that does not fit the record shape
///   becomes `None`.
pub fn normalize(raw: &Value) -> Result<SearchResult, NormalizeError> {
	Ok(SearchResult {
		search_parameters: search_parameters(raw)?,
		knowledge_graph: knowledge_graph(raw),
		organic_results: organic_results(raw),
		top_stories: extract::records(raw.get("topStories")),
		people_also_ask: extract::records(raw.get("peopleAlsoAsk")),
		related_searches: extract::records(raw.get("relatedSearches")),
	})
}

fn search_parameters(raw: &Value) -> Result<SearchParameters, NormalizeError> {
	let (params, query) = raw
		.get("searchParameters")
		.and_then(Value::as_object)
		.and_then(|params| extract::string(params, "q").map(|q| (params, q)))
		.ok_or(NormalizeError::MissingRequiredField { field: QUERY_FIELD })?;

	let defaults = SearchParameters::for_query(query);
	Ok(SearchParameters {
		location: extract::string(params, "gl").unwrap_or(defaults.location),
		language: extract::string(params, "hl").unwrap_or(defaults.language),
		num_results: extract::uint(params, "num").unwrap_or(defaults.num_results),
		autocorrect: extract::boolean(params, "autocorrect").unwrap_or(defaults.autocorrect),
		page: extract::uint(params, "page").unwrap_or(defaults.page),
		search_engine: extract::string(params, "engine").unwrap_or(defaults.search_engine),
		query: defaults.query,
	})
}

fn knowledge_graph(raw: &Value) -> Option<KnowledgeGraph> {
	let graph = raw
		.get("knowledgeGraph")
		.and_then(Value::as_object)
		.filter(|graph| !graph.is_empty())?;

	Some(KnowledgeGraph {
		title: extract::string_or_empty(graph, "title"),
		kind: extract::string_or_empty(graph, "type"),
		website: extract::string_or_empty(graph, "website"),
		description: extract::string_or_empty(graph, "description"),
		description_source: extract::string_or_empty(graph, "descriptionSource"),
		description_link: extract::string_or_empty(graph, "descriptionLink"),
		attributes: extract::string_map(graph, "attributes"),
	})
}

fn organic_results(raw: &Value) -> Vec<OrganicResult> {
	raw.get("organic")
		.and_then(Value::as_array)
		.map(|items| {
			items
				.iter()
				.filter_map(Value::as_object)
				.map(organic_result)
				.collect()
		})
		.unwrap_or_default()
}

fn organic_result(item: &Object) -> OrganicResult {
	OrganicResult {
		title: extract::string_or_empty(item, "title"),
		link: extract::string_or_empty(item, "link"),
		snippet: extract::string_or_empty(item, "snippet"),
		position: extract::uint(item, "position"),
		date: extract::string_or_empty(item, "date"),
	}
}

/// A [`SearchResult`] and its [`UsefulInfo`], built together from one raw
/// document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSearch {
	pub result: SearchResult,
	pub useful_info: UsefulInfo,
}

impl NormalizedSearch {
	pub fn from_raw(raw: &Value) -> Result<Self, NormalizeError> {
		let result = normalize(raw)?;
		let useful_info = useful_info(&result);
		Ok(Self {
			result,
			useful_info,
		})
	}

	/// Parses `text` as JSON and normalizes it.
	pub fn from_json_str(text: &str) -> Result<Self, NormalizeError> {
		let raw: Value = serde_json::from_str(text)?;
		Self::from_raw(&raw)
	}
}
