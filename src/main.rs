use clap::Parser;

use staticd::access_log::{AccessLog, LOG_FILE};
use staticd::config::Config;
use staticd::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::parse();
    let log = AccessLog::new(LOG_FILE);

    tokio::select! {
        res = server::listener::run(&cfg, log) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
