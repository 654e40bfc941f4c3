// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Serper.dev API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use sift_common_secret::SecretString;
use tracing::{debug, error, instrument, trace};

use crate::error::SerperError;
use crate::normalize::NormalizedSearch;
use crate::types::SearchRequest;

pub const DEFAULT_BASE_URL: &str = "https://google.serper.dev/search";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Anything that can turn a [`SearchRequest`] into a raw Serper-shaped
/// response document.
#[async_trait]
pub trait SearchRequester: Send + Sync {
	async fn search_raw(&self, request: &SearchRequest) -> Result<Value, SerperError>;

	/// Fetches and normalizes in one step.
	async fn search(&self, request: &SearchRequest) -> Result<NormalizedSearch, SerperError> {
		let raw = self.search_raw(request).await?;
		Ok(NormalizedSearch::from_raw(&raw)?)
	}
}

/// Client for the Serper.dev Google Search API.
#[derive(Debug, Clone)]
pub struct SerperClient {
	http_client: Client,
	api_key: SecretString,
	base_url: String,
}

impl SerperClient {
	pub fn new(api_key: SecretString) -> Result<Self, SerperError> {
		Self::with_timeout(api_key, REQUEST_TIMEOUT)
	}

	/// Creates a client whose requests give up after `timeout`.
	pub fn with_timeout(api_key: SecretString, timeout: Duration) -> Result<Self, SerperError> {
		let http_client = sift_common_http::client_with_timeout(timeout)?;

		Ok(Self {
			http_client,
			api_key,
			base_url: DEFAULT_BASE_URL.to_string(),
		})
	}

	/// Sets a custom base URL for the API (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}
}

#[async_trait]
impl SearchRequester for SerperClient {
	#[instrument(skip(self, request), fields(query = %request.query, num = ?request.num))]
	async fn search_raw(&self, request: &SearchRequest) -> Result<Value, SerperError> {
		debug!(url = %self.base_url, "Sending search request to Serper");
		trace!(?request, "Search parameters");

		let response = self
			.http_client
			.post(&self.base_url)
			.header("X-API-KEY", self.api_key.expose())
			.json(request)
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					error!("Request timed out");
					return SerperError::Timeout;
				}
				error!(error = %e, "Network error during Serper request");
				SerperError::Network(e)
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from Serper");

		if !status.is_success() {
			let status_code = status.as_u16();
			let body = response.text().await.unwrap_or_default();
			return Err(classify_failure(status_code, body));
		}

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read response body");
			SerperError::Network(e)
		})?;

		trace!(body = %body, "Response body");

		let raw: Value = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse Serper response");
			SerperError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		let organic_count = raw.get("organic").and_then(Value::as_array).map(Vec::len);
		debug!(organic_count = ?organic_count, "Search completed successfully");

		Ok(raw)
	}
}

/// Maps a non-success status to an error. Serper reports exhausted credits
/// as 401/403 with a quota message rather than 429.
fn classify_failure(status_code: u16, body: String) -> SerperError {
	let lowered = body.to_lowercase();
	let mentions_quota = ["rate", "quota", "limit", "credits"]
		.iter()
		.any(|word| lowered.contains(word));

	match status_code {
		401 | 403 if mentions_quota => {
			error!(status = status_code, "Rate limit exceeded");
			SerperError::RateLimited
		}
		401 | 403 => {
			error!(status = status_code, "Unauthorized request");
			SerperError::Unauthorized
		}
		429 => {
			error!(status = status_code, "Rate limit exceeded");
			SerperError::RateLimited
		}
		_ => {
			error!(status = status_code, body = %body, "Serper API error");
			SerperError::ApiError {
				status: status_code,
				message: body,
			}
		}
	}
}
