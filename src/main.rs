use anyhow::Result;
use clap::Parser;
use log::{debug, info};

use leetcode_export::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment from {}", path.display());
    }

    let cli = Cli::parse();
    info!("Starting leetcode-export");

    leetcode_export::run(cli, |key| std::env::var(key).ok()).await?;

    Ok(())
}
