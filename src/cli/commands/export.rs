//! Export command: fetch the whole catalog and write it to a CSV file

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use is_terminal::IsTerminal;
use log::info;
use std::path::PathBuf;
use std::time::Instant;

use crate::api::{FetchProgress, LeetCodeClient, fetch_all_problems};
use crate::cli::ui::Spinner;
use crate::config::Config;
use crate::export::write_problems_to_path;

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Fetch this many problems at once (set less if leetcode times out)
    #[arg(long, default_value_t = 300, value_parser = clap::value_parser!(u64).range(1..))]
    pub batch_size: u64,

    /// Write output to file
    #[arg(long, default_value = "problems.csv")]
    pub output: PathBuf,
}

/// What a finished export produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub problems: usize,
    pub output: PathBuf,
}

/// Fetch every problem, then write the CSV
///
/// The file is only created once all pages have been fetched.
pub async fn handle_export_command(args: ExportArgs, config: &Config) -> Result<ExportSummary> {
    let started = Instant::now();

    let client = LeetCodeClient::connect(config)
        .await
        .context("Failed to authenticate with LeetCode")?;

    let spinner = std::io::stdout()
        .is_terminal()
        .then(|| Spinner::start("Fetching problem count"));

    let problems = fetch_all_problems(&client, args.batch_size, |progress: &FetchProgress| {
        if let Some(spinner) = &spinner {
            spinner.set_message(format!(
                "Fetched {} problems (page {}/{})",
                progress.fetched, progress.pages_done, progress.page_count
            ));
        }
    })
    .await;
    if let Some(spinner) = spinner {
        spinner.stop();
    }
    let problems = problems.context("Failed to fetch problems")?;

    let written = write_problems_to_path(&args.output, &problems)
        .with_context(|| format!("Failed to write output to: {}", args.output.display()))?;

    info!("Export finished in {:.1}s", started.elapsed().as_secs_f64());
    println!(
        "{} {} problems to {}",
        "Wrote".bright_green().bold(),
        written,
        args.output.display().to_string().cyan()
    );

    Ok(ExportSummary {
        problems: written,
        output: args.output,
    })
}
