use std::io;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, BufReader};
use tracing::{debug, info};

use crate::http::parser::{ParseError, is_blank_line, parse_request_line};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::routes;
use crate::http::writer::ResponseWriter;

/// Why a connection ended without a complete exchange.
///
/// `Read` and `Malformed` abort before any byte is sent to the peer.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("failed to read request: {0}")]
    Read(#[source] io::Error),

    #[error(transparent)]
    Malformed(#[from] ParseError),

    #[error("failed to write response: {0}")]
    Write(#[source] io::Error),
}

/// Where a connection is in its single request/response exchange.
enum ConnectionState {
    ReadingRequestLine,
    SkippingHeaders(Request),
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

/// Serves exactly one request on a stream, then releases it.
pub struct Connection<S> {
    stream: BufReader<S>,
    state: ConnectionState,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S) -> Self {
        Self {
            stream: BufReader::new(stream),
            state: ConnectionState::ReadingRequestLine,
        }
    }

    /// Drives the state machine to completion.
    ///
    /// Takes `self` so the stream is dropped, and the socket closed, on every
    /// return path.
    pub async fn run(mut self) -> Result<(), ConnectionError> {
        loop {
            self.state = match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::ReadingRequestLine => {
                    let line = self.read_line().await?;
                    let request = parse_request_line(&String::from_utf8_lossy(&line))?;

                    if request.method.is_supported() {
                        ConnectionState::SkippingHeaders(request)
                    } else {
                        // Headers stay unread on this path.
                        let response = Response::method_not_allowed();
                        Self::log_response(&request, &response);
                        ConnectionState::Writing(ResponseWriter::new(&response))
                    }
                }

                ConnectionState::SkippingHeaders(request) => {
                    self.skip_headers().await?;
                    ConnectionState::Processing(request)
                }

                ConnectionState::Processing(request) => {
                    let response = routes::dispatch(&request.path);
                    Self::log_response(&request, &response);
                    ConnectionState::Writing(ResponseWriter::new(&response))
                }

                ConnectionState::Writing(writer) => {
                    writer
                        .write_to_stream(self.stream.get_mut())
                        .await
                        .map_err(ConnectionError::Write)?;
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }

    /// Reads one `\n`-terminated line. Running out of input first, even
    /// partway through a line, is a read error.
    async fn read_line(&mut self) -> Result<Vec<u8>, ConnectionError> {
        let mut line = Vec::new();
        let n = self
            .stream
            .read_until(b'\n', &mut line)
            .await
            .map_err(ConnectionError::Read)?;

        if n == 0 || line.last() != Some(&b'\n') {
            return Err(ConnectionError::Read(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "connection closed before end of line",
            )));
        }

        Ok(line)
    }

    async fn skip_headers(&mut self) -> Result<(), ConnectionError> {
        let mut skipped = 0usize;
        loop {
            let line = self.read_line().await?;
            if is_blank_line(&line) {
                debug!(skipped, "End of headers");
                return Ok(());
            }
            skipped += 1;
        }
    }

    fn log_response(request: &Request, response: &Response) {
        info!(
            method = %request.method,
            path = %request.path,
            version = %request.version,
            status = response.status.as_u16(),
            "Request handled"
        );
    }
}
