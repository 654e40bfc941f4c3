// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for sift.
//!
//! Layers are merged in precedence order (defaults, config file,
//! environment, CLI flags); each layer only overrides the fields it sets.
//!
//! ```toml
//! [serper]
//! api_key = "..."          # or SIFT_SERPER_API_KEY / SIFT_SERPER_API_KEY_FILE
//! timeout_secs = 10
//!
//! [logging]
//! level = "info"
//! format = "compact"       # pretty | compact | json
//! ```

pub mod env;
pub mod error;
pub mod logging;
pub mod paths;
pub mod serper;
pub mod sources;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use env::{load_secret_from, SecretEnvError};
pub use error::ConfigError;
pub use logging::{LogFormat, LogLevel, LoggingConfig, LoggingConfigLayer};
pub use serper::{SerperConfig, SerperConfigLayer};
pub use sift_common_secret::{Secret, SecretString, REDACTED};
pub use sources::{CliOverrides, CliSource, ConfigSource, EnvSource, FileSource, Precedence};

/// One partially-specified configuration source, as read from a file or
/// the environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiftConfigLayer {
	#[serde(default)]
	pub serper: Option<SerperConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl SiftConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if let Some(other_serper) = other.serper {
			self.serper
				.get_or_insert_with(Default::default)
				.merge(other_serper);
		}
		if let Some(other_logging) = other.logging {
			self.logging
				.get_or_insert_with(Default::default)
				.merge(other_logging);
		}
	}

	pub fn finalize(self) -> SiftConfig {
		SiftConfig {
			serper: self.serper.unwrap_or_default().finalize(),
			logging: self.logging.unwrap_or_default().finalize(),
		}
	}
}

/// Fully resolved configuration.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SiftConfig {
	pub serper: SerperConfig,
	pub logging: LoggingConfig,
}

/// Merges `sources` from lowest to highest precedence.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<SiftConfig, ConfigError> {
	sources.sort_by_key(|source| source.precedence());

	let mut merged = SiftConfigLayer::default();
	for source in &sources {
		let layer = source.load()?;
		debug!(source = source.name(), "merged configuration layer");
		merged.merge(layer);
	}

	Ok(merged.finalize())
}

/// Load configuration from the file (explicit, or the XDG default when it
/// exists), the process environment and CLI overrides.
pub fn load_config(config_file: Option<&Path>, cli: CliOverrides) -> Result<SiftConfig, ConfigError> {
	let file = match config_file {
		Some(path) => FileSource::required(path),
		None => FileSource::optional(paths::default_config_file()?),
	};

	load_from_sources(vec![
		Box::new(CliSource::new(cli)),
		Box::new(EnvSource::process()),
		Box::new(file),
	])
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use std::time::Duration;
	use tempfile::NamedTempFile;

	fn config_file(contents: &str) -> NamedTempFile {
		let mut file = NamedTempFile::new().unwrap();
		write!(file, "{contents}").unwrap();
		file
	}

	#[test]
	fn empty_file_gives_defaults() {
		let file = config_file("");
		let config = load_from_sources(vec![Box::new(FileSource::required(file.path()))]).unwrap();
		assert!(config.serper.api_key.is_none());
		assert_eq!(config.serper.timeout, Duration::from_secs(10));
		assert_eq!(config.logging.level, LogLevel::Info);
	}

	/// Environment beats the file and CLI beats both, regardless of the
	/// order sources were registered in.
	#[test]
	fn precedence_is_file_then_env_then_cli() {
		let file = config_file(
			r#"
[serper]
api_key = "file-key"
base_url = "http://file.example/search"
timeout_secs = 20

[logging]
level = "warn"
format = "json"
"#,
		);
		let env = EnvSource::with_lookup(|name: &str| match name {
			sources::ENV_API_KEY => Some("env-key".to_string()),
			sources::ENV_LOG_LEVEL => Some("debug".to_string()),
			_ => None,
		});
		let cli = CliOverrides {
			log_level: Some(LogLevel::Trace),
			..Default::default()
		};

		let config = load_from_sources(vec![
			Box::new(CliSource::new(cli)),
			Box::new(FileSource::required(file.path())),
			Box::new(env),
		])
		.unwrap();

		assert_eq!(config.serper.api_key.unwrap().expose(), "env-key");
		assert_eq!(
			config.serper.base_url.as_deref(),
			Some("http://file.example/search")
		);
		assert_eq!(config.serper.timeout, Duration::from_secs(20));
		assert_eq!(config.logging.level, LogLevel::Trace);
		assert_eq!(config.logging.format, LogFormat::Json);
	}

	#[test]
	fn serialized_config_never_contains_the_key() {
		let layer: SiftConfigLayer = toml::from_str("[serper]\napi_key = \"hunter2\"").unwrap();
		let dump = serde_json::to_string(&layer.finalize()).unwrap();
		assert!(!dump.contains("hunter2"));
		assert!(dump.contains(REDACTED));
	}
}
