// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! sift - query Serper.dev and print the useful part of the answer.
//!
//! `sift search` performs a live search; `sift normalize` runs the same
//! normalization over a response saved earlier (file or stdin).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sift_common_config::{load_config, CliOverrides, LogFormat, LogLevel, LoggingConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod output;

use commands::{NormalizeArgs, SearchArgs};

/// Search the web through Serper.dev and print a compact summary
#[derive(Parser, Debug)]
#[command(name = "sift", version, about, long_about = None)]
struct Args {
	/// Path to a configuration file (defaults to ~/.config/sift/config.toml)
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Log level (overrides config)
	#[arg(short, long)]
	log_level: Option<LogLevel>,

	/// Output logs as JSON (overrides config)
	#[arg(long)]
	json_logs: bool,

	/// Serper endpoint (overrides config)
	#[arg(long)]
	base_url: Option<String>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Run a live search
	Search(SearchArgs),
	/// Normalize a saved Serper response
	Normalize(NormalizeArgs),
}

impl Args {
	fn overrides(&self) -> CliOverrides {
		CliOverrides {
			log_level: self.log_level,
			log_format: self.json_logs.then_some(LogFormat::Json),
			base_url: self.base_url.clone(),
		}
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();

	let config = load_config(args.config.as_deref(), args.overrides())
		.context("failed to load configuration")?;
	init_tracing(&config.logging);

	match args.command {
		Command::Search(search) => commands::search(&config.serper, search).await,
		Command::Normalize(normalize) => commands::normalize(normalize),
	}
}

/// Logs go to stderr so stdout carries only the JSON result.
fn init_tracing(logging: &LoggingConfig) {
	let level = logging.level;
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		EnvFilter::new(format!(
			"sift={level},sift_search_serper={level},sift_common_config={level}"
		))
	});

	match logging.format {
		LogFormat::Json => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().json().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Compact => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().compact().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Pretty => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().pretty().with_writer(std::io::stderr))
				.init();
		}
	}
}
