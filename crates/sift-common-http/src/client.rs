// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::env::consts::{ARCH, OS};
use std::time::Duration;

use reqwest::{Client, ClientBuilder};

/// Client builder preloaded with the standard sift User-Agent.
///
/// # Example
/// ```ignore
/// let client = sift_common_http::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	builder_with_user_agent(user_agent())
}

pub fn builder_with_user_agent(user_agent: impl Into<String>) -> ClientBuilder {
	Client::builder().user_agent(user_agent.into())
}

/// Builds a client whose requests give up after `timeout`.
pub fn client_with_timeout(timeout: Duration) -> reqwest::Result<Client> {
	builder().timeout(timeout).build()
}

/// Format: `sift/{version} ({os}-{arch})`, e.g. `sift/0.1.0 (linux-x86_64)`.
pub fn user_agent() -> String {
	format!("sift/{} ({OS}-{ARCH})", env!("CARGO_PKG_VERSION"))
}
