// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sift_common_config::SerperConfig;
use sift_search_serper::{NormalizedSearch, SearchRequest, SearchRequester, SerperClient};
use tracing::{debug, info, instrument};

use crate::output::{self, OutputArgs};

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
	/// Search query; multiple words are joined with spaces
	#[arg(required = true, num_args = 1..)]
	query: Vec<String>,

	/// Country code, e.g. us or cn
	#[arg(long)]
	gl: Option<String>,

	/// Interface language, e.g. en or zh-cn
	#[arg(long)]
	hl: Option<String>,

	/// Number of results to request (1-100)
	#[arg(long)]
	num: Option<u32>,

	/// Result page, starting at 1
	#[arg(long)]
	page: Option<u32>,

	/// Let Serper correct the query spelling
	#[arg(long)]
	autocorrect: Option<bool>,

	/// Also write the raw Serper response to this file
	#[arg(long, value_name = "PATH")]
	save_raw: Option<PathBuf>,

	#[command(flatten)]
	output: OutputArgs,
}

impl SearchArgs {
	fn request(&self) -> SearchRequest {
		let mut request = SearchRequest::new(self.query.join(" "));
		if let Some(gl) = &self.gl {
			request = request.with_location(gl.as_str());
		}
		if let Some(hl) = &self.hl {
			request = request.with_language(hl.as_str());
		}
		if let Some(num) = self.num {
			request = request.with_num(num);
		}
		if let Some(page) = self.page {
			request = request.with_page(page);
		}
		if let Some(autocorrect) = self.autocorrect {
			request = request.with_autocorrect(autocorrect);
		}
		request
	}
}

#[derive(clap::Args, Debug)]
pub struct NormalizeArgs {
	/// Saved Serper response; reads stdin when omitted or `-`
	file: Option<PathBuf>,

	#[command(flatten)]
	output: OutputArgs,
}

/// Uses `search_raw` rather than `SearchRequester::search` so the raw
/// response is still available for `--save-raw`.
#[instrument(skip_all)]
pub async fn search(config: &SerperConfig, args: SearchArgs) -> Result<()> {
	let api_key = config.api_key.clone().context(
		"no Serper API key configured; set SIFT_SERPER_API_KEY or [serper].api_key",
	)?;

	let mut client = SerperClient::with_timeout(api_key, config.timeout)?;
	if let Some(base_url) = &config.base_url {
		client = client.with_base_url(base_url.as_str());
	}

	let request = args.request();
	info!(query = %request.query, "searching");
	let raw = client
		.search_raw(&request)
		.await
		.context("search request failed")?;

	if let Some(path) = &args.save_raw {
		output::write_raw(path, &raw)?;
		info!(path = %path.display(), "saved raw response");
	}

	let search = NormalizedSearch::from_raw(&raw).context("could not normalize Serper response")?;
	println!("{}", output::render(&search, args.output)?);
	Ok(())
}

pub fn normalize(args: NormalizeArgs) -> Result<()> {
	let text = read_input(args.file.as_deref())?;
	println!("{}", normalize_text(&text, args.output)?);
	Ok(())
}

fn normalize_text(text: &str, output: OutputArgs) -> Result<String> {
	let search = NormalizedSearch::from_json_str(text).context("could not normalize input")?;
	debug!(
		organic = search.result.organic_results.len(),
		"normalized saved response"
	);
	Ok(output::render(&search, output)?)
}

fn read_input(path: Option<&Path>) -> Result<String> {
	match path {
		Some(path) if path != Path::new("-") => {
			fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
		}
		_ => {
			let mut text = String::new();
			io::stdin()
				.read_to_string(&mut text)
				.context("failed to read stdin")?;
			Ok(text)
		}
	}
}
