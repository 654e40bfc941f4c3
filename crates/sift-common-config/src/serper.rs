// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Serper provider configuration section.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use sift_common_secret::SecretString;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SerperConfigLayer {
	pub api_key: Option<SecretString>,
	pub base_url: Option<String>,
	pub timeout_secs: Option<u64>,
}

impl SerperConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.api_key.is_some() {
			self.api_key = other.api_key;
		}
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
	}

	pub fn finalize(self) -> SerperConfig {
		SerperConfig {
			api_key: self.api_key.filter(|key| !key.is_blank()),
			base_url: self.base_url,
			timeout: Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
		}
	}
}

#[derive(Debug, Clone, Serialize)]
pub struct SerperConfig {
	pub api_key: Option<SecretString>,
	/// `None` means the public Serper endpoint.
	pub base_url: Option<String>,
	pub timeout: Duration,
}

impl Default for SerperConfig {
	fn default() -> Self {
		SerperConfigLayer::default().finalize()
	}
}
