use std::sync::Arc;

use anyhow::Result;
use chat_widget::{ChatWidget, Config, HttpChatClient, terminal};
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "chat-widget", about = "Terminal chat widget for a remote chat backend")]
struct Cli {
    /// Backend base URL (overrides CHAT_API_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Chat endpoint path (overrides CHAT_API_PATH)
    #[arg(long)]
    path: Option<String>,

    /// Widget title (overrides CHAT_TITLE)
    #[arg(long)]
    title: Option<String>,

    /// Start with the chat window open
    #[arg(long)]
    open: bool,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(path) = cli.path {
        config.api_path = path;
    }
    if let Some(title) = cli.title {
        config.title = title;
    }
    config.start_open |= cli.open;
    config.validate()?;

    let client = Arc::new(HttpChatClient::from_config(&config));
    info!(endpoint = client.endpoint(), chat_id = %client.session_id(), "chat widget starting");

    let mut widget = ChatWidget::new(client, &config);
    terminal::run(&mut widget, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;

    Ok(())
}
