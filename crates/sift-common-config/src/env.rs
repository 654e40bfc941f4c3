// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Environment variable helpers.
//!
//! Secrets follow the `VAR` / `VAR_FILE` convention used by Docker and
//! Kubernetes secret mounts: `VAR_FILE` names a file holding the value and
//! takes precedence over `VAR`.

use std::fs;
use std::path::PathBuf;

use sift_common_secret::SecretString;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecretEnvError {
	#[error("failed to read secret file at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("secret file path in {var} is empty")]
	EmptyPath { var: String },
}

/// Reads a variable from the process environment. Empty values are returned
/// as-is so callers can tell "set but empty" from unset.
pub fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok()
}

/// Load a secret through `lookup`.
///
/// 1. `{var}_FILE` set: read the file, stripping a single trailing newline;
///    an empty path is an error
/// 2. `{var}` set and non-empty: use the value directly
/// 3. neither: `Ok(None)`
pub fn load_secret_from<F>(var: &str, lookup: F) -> Result<Option<SecretString>, SecretEnvError>
where
	F: Fn(&str) -> Option<String>,
{
	let file_var = format!("{var}_FILE");

	if let Some(path_str) = lookup(&file_var) {
		if path_str.is_empty() {
			return Err(SecretEnvError::EmptyPath { var: file_var });
		}

		let path = PathBuf::from(path_str);
		let content = fs::read_to_string(&path).map_err(|source| SecretEnvError::Io {
			path: path.clone(),
			source,
		})?;

		let value = content.strip_suffix('\n').unwrap_or(&content);
		return Ok(Some(SecretString::from(value)));
	}

	Ok(lookup(var)
		.filter(|value| !value.is_empty())
		.map(SecretString::from))
}
