//! HTTP protocol implementation.
//!
//! This module implements a minimal HTTP/1.1 server that handles exactly one
//! request per connection and closes it afterwards; every response carries
//! `Connection: Closed`.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: Per-connection transport: one bounded read, one response, close
//! - **`parser`**: Parses incoming HTTP requests from byte buffers
//! - **`request`**: Structured request representation
//! - **`handler`**: Dispatches a request to the right outcome (serve, redirect, reject)
//! - **`response`**: HTTP response representation and header serialization
//! - **`status`**: Status code reason phrases
//! - **`mime`**: Content-Type selection based on file extensions
//! - **`writer`**: Writes serialized responses to the client
//!
//! # Connection Lifecycle
//!
//! Each client connection makes one pass through a fixed pipeline:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One bounded read of the request buffer
//!        └──────┬──────┘
//!               │ Buffer received
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatching    │ ← Parse, validate, resolve, build response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Closed (always; no keep-alive)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use atrium::files::DocumentRoot;
//! use atrium::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!     let root = DocumentRoot::new("www");
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let root = root.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, root);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod handler;
pub mod connection;
pub mod writer;
pub mod status;
pub mod mime;
