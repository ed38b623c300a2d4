use std::io;
use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{Instrument, debug, info, info_span, warn};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::server::tracker::InFlight;

#[derive(Debug, Error)]
pub enum ListenerError {
    /// Fatal; reported to the caller and never retried.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// Logged by the accept loop, which keeps going.
    #[error("failed to accept connection: {0}")]
    Accept(#[source] io::Error),
}

/// A bound listener that hands every connection to its own task.
pub struct Server {
    listener: TcpListener,
    in_flight: InFlight,
}

impl Server {
    pub async fn bind(addr: &str) -> Result<Self, ListenerError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ListenerError::Bind {
                addr: addr.to_string(),
                source,
            })?;

        if let Ok(local) = listener.local_addr() {
            info!(address = %local, "Listening");
        }

        Ok(Self {
            listener,
            in_flight: InFlight::new(),
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub fn in_flight(&self) -> InFlight {
        self.in_flight.clone()
    }

    /// Accepts forever. No connection limit, no timeouts; the loop never
    /// waits for a handler.
    pub async fn serve(self) {
        loop {
            let (socket, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    let err = ListenerError::Accept(e);
                    warn!(error = %err, "Accept failed");
                    continue;
                }
            };
            debug!(%peer, "Accepted connection");

            let guard = self.in_flight.enter();
            tokio::spawn(
                async move {
                    let _guard = guard;
                    if let Err(e) = Connection::new(socket).run().await {
                        warn!(error = %e, "Connection aborted");
                    }
                }
                .instrument(info_span!("connection", %peer)),
            );
        }
    }
}

/// Binds the configured address and serves. Returns only if binding fails.
pub async fn run(cfg: &Config) -> Result<(), ListenerError> {
    let server = Server::bind(&cfg.listen_addr).await?;
    server.serve().await;
    Ok(())
}
