// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources and their precedence.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::env::load_secret_from;
use crate::error::ConfigError;
use crate::logging::{LogFormat, LogLevel, LoggingConfigLayer};
use crate::serper::SerperConfigLayer;
use crate::SiftConfigLayer;

pub const ENV_API_KEY: &str = "SIFT_SERPER_API_KEY";
pub const ENV_BASE_URL: &str = "SIFT_SERPER_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "SIFT_SERPER_TIMEOUT_SECS";
pub const ENV_LOG_LEVEL: &str = "SIFT_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "SIFT_LOG_FORMAT";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	ConfigFile = 20,
	Environment = 50,
	Cli = 100,
}

pub trait ConfigSource {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<SiftConfigLayer, ConfigError>;
}

/// A TOML config file. A missing file is only an error when `required`.
pub struct FileSource {
	path: PathBuf,
	required: bool,
}

impl FileSource {
	pub fn optional(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: false,
		}
	}

	pub fn required(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: true,
		}
	}
}

impl ConfigSource for FileSource {
	fn name(&self) -> &'static str {
		"file"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<SiftConfigLayer, ConfigError> {
		let content = match fs::read_to_string(&self.path) {
			Ok(content) => content,
			Err(e) if e.kind() == ErrorKind::NotFound && !self.required => {
				return Ok(SiftConfigLayer::default());
			}
			Err(e) if e.kind() == ErrorKind::NotFound => {
				return Err(ConfigError::NotFound(self.path.clone()));
			}
			Err(source) => {
				return Err(ConfigError::Io {
					path: self.path.clone(),
					source,
				});
			}
		};

		toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
			path: self.path.clone(),
			source,
		})
	}
}

/// `SIFT_*` environment variables, read through an injectable lookup.
pub struct EnvSource<F = fn(&str) -> Option<String>> {
	lookup: F,
}

impl EnvSource {
	pub fn process() -> Self {
		Self {
			lookup: crate::env::env_var,
		}
	}
}

impl<F> EnvSource<F>
where
	F: Fn(&str) -> Option<String>,
{
	pub fn with_lookup(lookup: F) -> Self {
		Self { lookup }
	}

	/// Plain settings treat an empty variable as unset.
	fn var(&self, name: &str) -> Option<String> {
		(self.lookup)(name).filter(|value| !value.is_empty())
	}

	fn parse<T>(&self, var: &str) -> Result<Option<T>, ConfigError>
	where
		T: std::str::FromStr,
		T::Err: std::fmt::Display,
	{
		self.var(var)
			.map(|raw| {
				raw.trim()
					.parse::<T>()
					.map_err(|e| ConfigError::invalid_value(var, e.to_string()))
			})
			.transpose()
	}
}

impl<F> ConfigSource for EnvSource<F>
where
	F: Fn(&str) -> Option<String>,
{
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<SiftConfigLayer, ConfigError> {
		let serper = SerperConfigLayer {
			api_key: load_secret_from(ENV_API_KEY, &self.lookup)?,
			base_url: self.var(ENV_BASE_URL),
			timeout_secs: self.parse::<u64>(ENV_TIMEOUT_SECS)?,
		};
		let logging = LoggingConfigLayer {
			level: self.parse::<LogLevel>(ENV_LOG_LEVEL)?,
			format: self.parse::<LogFormat>(ENV_LOG_FORMAT)?,
		};

		Ok(SiftConfigLayer {
			serper: Some(serper),
			logging: Some(logging),
		})
	}
}

/// Flags given on the command line; they beat every other source.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
	pub log_level: Option<LogLevel>,
	pub log_format: Option<LogFormat>,
	pub base_url: Option<String>,
}

pub struct CliSource(CliOverrides);

impl CliSource {
	pub fn new(overrides: CliOverrides) -> Self {
		Self(overrides)
	}
}

impl ConfigSource for CliSource {
	fn name(&self) -> &'static str {
		"cli"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Cli
	}

	fn load(&self) -> Result<SiftConfigLayer, ConfigError> {
		let overrides = self.0.clone();
		Ok(SiftConfigLayer {
			serper: Some(SerperConfigLayer {
				base_url: overrides.base_url,
				..Default::default()
			}),
			logging: Some(LoggingConfigLayer {
				level: overrides.log_level,
				format: overrides.log_format,
			}),
		})
	}
}
