//! Roster terminal client
//!
//! Lists the roster and submits names from the command line.
//! Set ROSTER_API_URL to point at a server other than http://localhost:5000.

use std::sync::Arc;

use anyhow::{Context, Result};
use roster_client::{Command, PageController, PageView, RosterClient, SubmitOutcome, TerminalView};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is the rendering surface)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let client = RosterClient::from_env()?;
    tracing::info!("Using Roster API at {}", client.base_url());

    let controller = PageController::new(Arc::new(client), TerminalView::stdout());
    controller.view().print_help();
    if let Err(e) = controller.load().await {
        tracing::debug!("Initial load failed: {}", e);
    }
    controller.view().focus_input();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read from stdin")?
    {
        match Command::parse(&line) {
            Command::Quit => break,
            Command::Help => {
                controller.view().print_help();
                controller.view().focus_input();
            }
            Command::Clear => controller.clear_input(),
            Command::Refresh => {
                if let Err(e) = controller.refresh().await {
                    tracing::debug!("Refresh failed: {}", e);
                }
                controller.view().focus_input();
            }
            Command::Submit(raw) => {
                // The busy guard restores the prompt unless nothing was sent.
                if let SubmitOutcome::Empty = controller.submit(raw).await {
                    controller.view().focus_input();
                }
            }
        }
    }

    Ok(())
}
