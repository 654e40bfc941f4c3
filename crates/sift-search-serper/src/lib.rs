// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Serper.dev Google Search client for sift.
//!
//! The interesting part is [`normalize`]: it turns whatever JSON Serper sent
//! back into a fixed [`SearchResult`] shape, substituting defaults for
//! missing or oddly-typed optional fields. Only `searchParameters.q` is
//! mandatory. [`useful_info`] then truncates that record into the small
//! [`UsefulInfo`] view handed to downstream consumers.

pub mod client;
pub mod error;
mod extract;
pub mod normalize;
pub mod result;
pub mod types;

pub use client::{SearchRequester, SerperClient, DEFAULT_BASE_URL};
pub use error::{NormalizeError, SerperError};
pub use normalize::{normalize, NormalizedSearch};
pub use result::{
	useful_info, KnowledgeGraph, OrganicResult, PeopleAlsoAsk, RelatedSearch, SearchParameters,
	SearchResult, TopStory, UsefulInfo,
};
pub use sift_common_secret::SecretString;
pub use types::SearchRequest;
