use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use states_app::{forward_input, AppConfig, ConsoleView, Controller, ScreenEvent, UreqTransport};
use states_core::{FetchTask, ListScreen, StatesClient};
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "states", version, about = "Fetch and browse the list of states from a REST endpoint")]
struct Cli {
    /// Endpoint returning the JSON array of states.
    #[arg(long, env = "STATES_URL")]
    url: Option<String>,

    /// TOML file with `url` and `[labels]`.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(url) = cli.url {
        config.url = url;
    }
    tracing::info!(url = %config.url, "starting");

    let task = FetchTask::new(StatesClient::new(&config.url), Arc::new(UreqTransport::new()));
    let (tx, rx) = mpsc::unbounded_channel();
    let controller = Controller::new(
        ListScreen::new(config.labels),
        ConsoleView::new(std::io::stdout()),
        task,
        tx.clone(),
    );

    println!("Enter a row number to select it, /text to filter, r to reload, q to quit.");
    let input_events = tx.clone();
    let quit = tx.clone();
    tokio::spawn(async move {
        if let Err(err) = forward_input(BufReader::new(tokio::io::stdin()), input_events).await {
            tracing::error!(error = %err, "failed to read input");
            let _ = quit.send(ScreenEvent::Quit);
        }
    });

    tx.send(ScreenEvent::Activate)
        .context("control loop closed before start")?;
    controller.run(rx).await.context("writing to terminal")?;
    Ok(())
}
