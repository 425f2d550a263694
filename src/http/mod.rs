//! HTTP protocol implementation.
//!
//! This module implements the single-exchange HTTP/1.1 protocol the server
//! speaks: one bounded read, one response, then the connection is closed.
//!
//! # Architecture
//!
//! - **`connection`**: the per-connection handler implementing the request-response state machine
//! - **`parser`**: extracts the method and path from the request line
//! - **`request`**: parsed request-line representation
//! - **`response`**: response representation with status-specific constructors
//! - **`writer`**: serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │  Receiving  │ ← One read, at most 1024 bytes, 20 s timeout
//!        └──────┬──────┘
//!               │ Request text decoded
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Parse, resolve path, build response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!        ┌──────────────────┐
//!        │    Logging       │ ← One access-log entry
//!        └──────┬───────────┘
//!               └─ Closed
//! ```
//!
//! An empty read, a timeout or undecodable bytes skip straight to `Closed`
//! with no response and no log entry.

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
