//! HTTP protocol implementation.
//!
//! Just enough HTTP/1.1 to answer one GET per connection.
//!
//! # Architecture
//!
//! - **`connection`**: the per-connection state machine
//! - **`parser`**: request-line parsing and end-of-headers detection
//! - **`request`**: the parsed request line
//! - **`response`**: status codes and response construction
//! - **`routes`**: the fixed path table
//! - **`writer`**: serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌──────────────────────┐
//!        │  ReadingRequestLine  │ ← read up to the first '\n'
//!        └──────┬─────────┬─────┘
//!               │ GET     │ other method ──────────┐
//!               ▼                                  │
//!        ┌──────────────────┐                      │
//!        │ SkippingHeaders  │ ← until a blank line │
//!        └──────┬───────────┘                      │
//!               ▼                                  │
//!        ┌──────────────────┐                      │
//!        │   Processing     │ ← route on the path  │
//!        └──────┬───────────┘                      │
//!               ▼                                  │
//!        ┌──────────────────┐                      │
//!        │    Writing       │ ◄──── 405 ───────────┘
//!        └──────┬───────────┘
//!               ▼
//!             Closed
//! ```
//!
//! Read failures and malformed request lines leave the machine early and send
//! nothing back.
//!
//! # Example
//!
//! ```ignore
//! use hello_listener::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         tokio::spawn(async move {
//!             if let Err(e) = Connection::new(socket).run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod routes;
pub mod writer;
