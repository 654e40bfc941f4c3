// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the Serper client and normalizer.

use thiserror::Error;

/// Errors raised while normalizing a raw Serper document.
///
/// Malformed optional fields never show up here; they fall back to their
/// defaults.
#[derive(Debug, Error)]
pub enum NormalizeError {
	/// A field the record cannot be built without is absent or not a string.
	#[error("missing required field: {field}")]
	MissingRequiredField { field: &'static str },

	/// The raw text was not JSON at all.
	#[error("search response is not valid JSON: {0}")]
	InvalidJson(#[from] serde_json::Error),
}

/// Errors that can occur when talking to the Serper API.
#[derive(Debug, Error)]
pub enum SerperError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	#[error("Request timed out")]
	Timeout,

	#[error("Rate limit exceeded")]
	RateLimited,

	#[error("Invalid API key")]
	Unauthorized,

	/// Body could not be read or parsed as JSON.
	#[error("Invalid response from Serper: {0}")]
	InvalidResponse(String),

	/// Serper answered with a non-success status.
	#[error("Serper API error: {status} - {message}")]
	ApiError { status: u16, message: String },

	/// The response was JSON but could not be normalized.
	#[error(transparent)]
	Normalize(#[from] NormalizeError),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_field_names_the_path() {
		let err = NormalizeError::MissingRequiredField {
			field: "searchParameters.q",
		};
		assert_eq!(err.to_string(), "missing required field: searchParameters.q");
	}

	#[test]
	fn normalize_errors_pass_through_serper_error() {
		let err = SerperError::from(NormalizeError::MissingRequiredField {
			field: "searchParameters.q",
		});
		assert_eq!(err.to_string(), "missing required field: searchParameters.q");
	}

	#[test]
	fn api_error_display_includes_status() {
		let err = SerperError::ApiError {
			status: 502,
			message: "bad gateway".to_string(),
		};
		assert_eq!(err.to_string(), "Serper API error: 502 - bad gateway");
	}
}
