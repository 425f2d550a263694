use std::mem;
use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::access_log::AccessLog;
use crate::http::parser::{ParseError, parse_request_line};
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::static_files;

/// At most this many bytes are read from a connection; a single read is
/// performed and anything the client sends afterwards is never looked at.
const MAX_REQUEST_BYTES: usize = 1024;

/// Inactivity timeout for the read.
const READ_TIMEOUT: Duration = Duration::from_secs(20);

pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
    base_dir: String,
    log: AccessLog,
    state: ConnectionState,
}

enum ConnectionState {
    Receiving,
    Processing(String),
    Writing(ResponseWriter, u16, String),
    Logging(u16, String),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, peer: SocketAddr, base_dir: String, log: AccessLog) -> Self {
        Self {
            stream,
            peer,
            base_dir,
            log,
            state: ConnectionState::Receiving,
        }
    }

    /// Drives the connection through one request/response exchange.
    ///
    /// The stream is closed on every exit path: success, rejected input,
    /// timeout, or any I/O failure.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Receiving => {
                    // A failed or empty read leaves the state at Closed.
                    if let Some(text) = self.read_request().await? {
                        self.state = ConnectionState::Processing(text);
                    }
                }

                ConnectionState::Processing(text) => {
                    let response = self.handle_request(&text).await?;
                    let status = response.status.as_u16();
                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer, status, text);
                }

                ConnectionState::Writing(mut writer, status, text) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Logging(status, text);
                }

                ConnectionState::Logging(status, text) => {
                    self.log.append(self.peer.ip(), status, &text).await?;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Performs the single bounded read and decodes it.
    ///
    /// Returns `None` when the connection must be closed without a response
    /// or a log entry: the peer sent nothing, the read timed out, or the
    /// bytes are not valid UTF-8.
    async fn read_request(&mut self) -> anyhow::Result<Option<String>> {
        let mut buf = [0u8; MAX_REQUEST_BYTES];

        let n = match timeout(READ_TIMEOUT, self.stream.read(&mut buf)).await {
            Ok(read) => read?,
            Err(_) => {
                tracing::warn!(
                    "Read from {} timed out after {:?}; closing connection",
                    self.peer,
                    READ_TIMEOUT
                );
                return Ok(None);
            }
        };

        if n == 0 {
            // Client closed before sending anything
            return Ok(None);
        }

        match std::str::from_utf8(&buf[..n]) {
            Ok(text) => Ok(Some(text.to_string())),
            Err(e) => {
                tracing::warn!("Request from {} is not valid UTF-8: {}", self.peer, e);
                Ok(None)
            }
        }
    }

    async fn handle_request(&self, text: &str) -> anyhow::Result<Response> {
        let request = match parse_request_line(text) {
            Ok(request) => request,
            Err(ParseError::MalformedRequestLine) => return Ok(Response::bad_request()),
        };

        if !request.is_get() {
            return Ok(Response::not_implemented());
        }

        match static_files::resolve(&self.base_dir, &request.path) {
            Some(path) => {
                let contents = tokio::fs::read(&path).await?;
                Ok(Response::ok(contents))
            }
            None => {
                let body = static_files::not_found_body(&self.base_dir).await;
                Ok(Response::not_found(body))
            }
        }
    }
}
