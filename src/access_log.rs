//! Append-only access log shared by every connection handler.

use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// The log lives at a fixed path relative to the working directory.
pub const LOG_FILE: &str = "log.txt";

/// Handle to the shared access log.
///
/// Created once at startup and cloned into each connection handler; clones
/// share the same lock, so entries from concurrent handlers never
/// interleave.
#[derive(Debug, Clone)]
pub struct AccessLog {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
}

impl AccessLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Appends one entry describing a handled request:
    ///
    /// ```text
    /// <timestamp> - <client_ip> - [<status>] -<first line of request>
    /// ```
    ///
    /// The lock is held across the whole open-append-close sequence. The
    /// first line is everything up to the first `\n`, so a trailing `\r`
    /// from the request line is kept.
    pub async fn append(&self, peer: IpAddr, status: u16, request_text: &str) -> anyhow::Result<()> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let first_line = request_text.split('\n').next().unwrap_or("");
        let entry = format!("{timestamp} - {peer} - [{status}] -{first_line}\n");

        let _guard = self.lock.lock().await;
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(self.path.as_ref())
            .await?;
        file.write_all(entry.as_bytes()).await?;

        Ok(())
    }
}
