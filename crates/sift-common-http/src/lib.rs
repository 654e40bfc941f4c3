// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client construction for sift.
//!
//! Every outbound request carries the same `sift/{version} ({os}-{arch})`
//! User-Agent so the search provider can attribute traffic.

mod client;

pub use client::{builder, builder_with_user_agent, client_with_timeout, user_agent};
