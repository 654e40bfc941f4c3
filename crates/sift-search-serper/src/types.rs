// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request types for the Serper.dev API.

use serde::Serialize;

/// Body of a Serper search request. Unset options are left out so Serper
/// applies its own defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
	#[serde(rename = "q")]
	pub query: String,
	#[serde(rename = "gl", skip_serializing_if = "Option::is_none")]
	pub location: Option<String>,
	#[serde(rename = "hl", skip_serializing_if = "Option::is_none")]
	pub language: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub num: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub page: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub autocorrect: Option<bool>,
}

impl SearchRequest {
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
			location: None,
			language: None,
			num: None,
			page: None,
			autocorrect: None,
		}
	}

	/// Country code, e.g. `us` or `cn`.
	pub fn with_location(mut self, location: impl Into<String>) -> Self {
		self.location = Some(location.into());
		self
	}

	/// Interface language, e.g. `en` or `zh-cn`.
	pub fn with_language(mut self, language: impl Into<String>) -> Self {
		self.language = Some(language.into());
		self
	}

	/// Result count, clamped to the 1-100 range Serper accepts.
	pub fn with_num(mut self, num: u32) -> Self {
		self.num = Some(num.clamp(1, 100));
		self
	}

	/// Pages are 1-based; 0 is bumped to 1.
	pub fn with_page(mut self, page: u32) -> Self {
		self.page = Some(page.max(1));
		self
	}

	pub fn with_autocorrect(mut self, autocorrect: bool) -> Self {
		self.autocorrect = Some(autocorrect);
		self
	}
}
