// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! XDG path resolution.

use std::path::PathBuf;

use crate::error::ConfigError;

pub const APP_DIR: &str = "sift";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// `$XDG_CONFIG_HOME/sift/config.toml` (or the platform equivalent).
pub fn default_config_file() -> Result<PathBuf, ConfigError> {
	dirs::config_dir()
		.map(|dir| dir.join(APP_DIR).join(CONFIG_FILE_NAME))
		.ok_or(ConfigError::HomeDirNotFound)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_config_file_lives_under_app_dir() {
		if let Ok(path) = default_config_file() {
			assert!(path.ends_with("sift/config.toml"));
		}
	}
}
