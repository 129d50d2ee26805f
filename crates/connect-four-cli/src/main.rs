//! Connect Four for the terminal.

use tokio::io::{self, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod command;
mod console;
mod display;
mod settings;

use console::Console;
use settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; logs go to stderr so they stay off the board
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::from_env();
    info!(settings = %serde_json::to_string(&settings)?, "Starting Connect Four...");

    Console::new(settings)
        .run(BufReader::new(io::stdin()), io::stdout())
        .await
}
