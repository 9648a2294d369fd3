//! Export the LeetCode problem catalog to a `;`-delimited CSV file.
//!
//! The pipeline: derive a CSRF token from the session cookie, ask the
//! `problemsetQuestionList` GraphQL query for the total count, fetch the
//! catalog page by page under a fixed-delay retry policy, then flatten each
//! problem into one CSV row.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod export;

use anyhow::{Context, Result};

pub use cli::Cli;
pub use cli::commands::ExportSummary;
pub use config::Config;

/// Run one export with configuration read through `lookup`
///
/// A missing credential fails here, before any request is made.
pub async fn run<F>(cli: Cli, lookup: F) -> Result<ExportSummary>
where
    F: Fn(&str) -> Option<String>,
{
    let config = Config::from_lookup(lookup).context("Invalid configuration")?;
    cli::commands::handle_export_command(cli.export, &config).await
}
