// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Rendering results and saving raw responses.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use sift_search_serper::NormalizedSearch;

#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct OutputArgs {
	/// Print the whole normalized result instead of the useful subset
	#[arg(long)]
	pub full: bool,

	/// Indent the JSON output
	#[arg(long)]
	pub pretty: bool,
}

/// Useful info by default, compact unless `--pretty`. Non-ASCII text is
/// written as-is.
pub fn render(search: &NormalizedSearch, output: OutputArgs) -> serde_json::Result<String> {
	match (output.full, output.pretty) {
		(false, false) => search.useful_info.to_json(),
		(false, true) => search.useful_info.to_json_pretty(),
		(true, false) => serde_json::to_string(&search.result),
		(true, true) => serde_json::to_string_pretty(&search.result),
	}
}

pub fn write_raw(path: &Path, raw: &Value) -> Result<()> {
	let json = serde_json::to_string_pretty(raw)?;
	fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn search() -> NormalizedSearch {
		NormalizedSearch::from_raw(&json!({
			"searchParameters": {"q": "华为", "gl": "cn"},
			"organic": [{"title": "华为", "link": "https://www.huawei.com", "position": 1}]
		}))
		.unwrap()
	}

	#[test]
	fn default_output_is_compact_useful_info() {
		let text = render(&search(), OutputArgs::default()).unwrap();
		assert!(text.starts_with(r#"{"knowledge_graph":null,"organic_results":[{"title":"华为""#));
		assert!(!text.contains('\n'));
		assert!(!text.contains("search_parameters"));
	}

	#[test]
	fn full_output_includes_parameters() {
		let text = render(
			&search(),
			OutputArgs {
				full: true,
				pretty: true,
			},
		)
		.unwrap();
		assert!(text.contains("\"search_parameters\""));
		assert!(text.contains("\"location\": \"cn\""));
		assert!(text.contains('\n'));
	}

	#[test]
	fn raw_response_is_saved_unescaped() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("google.json");
		let raw = json!({"searchParameters": {"q": "华为"}});

		write_raw(&path, &raw).unwrap();

		let saved = fs::read_to_string(&path).unwrap();
		assert!(saved.contains("华为"));
		assert_eq!(serde_json::from_str::<Value>(&saved).unwrap(), raw);
	}
}
