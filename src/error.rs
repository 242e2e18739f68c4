//! Server startup and runtime errors.

use std::io;
use std::net::SocketAddr;

/// Errors that stop the `loanos` host.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),

    /// `BIND_ADDR` is set but is not an IP address.
    #[error("invalid BIND_ADDR value: {0:?}")]
    InvalidBindAddr(String),

    /// The `[package.metadata.leptos]` section could not be loaded.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    /// The listener could not bind its socket.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// The HTTP server stopped with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[from] io::Error),
}
