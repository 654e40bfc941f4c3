// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration error types.

use std::path::PathBuf;

use crate::env::SecretEnvError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// Config file exists but could not be read.
	#[error("failed to read config file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// An explicitly requested config file does not exist.
	#[error("config file not found: {0}")]
	NotFound(PathBuf),

	#[error("TOML parse error in {path}: {source}")]
	TomlParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("failed to load secret: {0}")]
	Secret(#[from] SecretEnvError),

	#[error("invalid value for {field}: {message}")]
	InvalidValue { field: String, message: String },

	#[error("could not determine the user configuration directory")]
	HomeDirNotFound,
}

impl ConfigError {
	pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self::InvalidValue {
			field: field.into(),
			message: message.into(),
		}
	}
}
