use tokio::net::TcpSocket;
use tracing::info;

use crate::access_log::AccessLog;
use crate::config::Config;
use crate::http::connection::Connection;

// TODO: wire Config::port through to the bind address; the advertised port
// argument is currently ignored and the listener always binds here.
const LISTEN_ADDR: &str = "127.0.0.1:8080";

/// A single pending connection is queued by the kernel.
const BACKLOG: u32 = 1;

pub async fn run(cfg: &Config, log: AccessLog) -> anyhow::Result<()> {
    let socket = TcpSocket::new_v4()?;
    socket.set_reuseaddr(true)?;
    socket.bind(LISTEN_ADDR.parse()?)?;
    let listener = socket.listen(BACKLOG)?;
    info!("Listening on {}, serving files from {}", LISTEN_ADDR, cfg.base_dir);

    loop {
        let (stream, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let base_dir = cfg.base_dir.clone();
        let log = log.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(stream, peer, base_dir, log);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
