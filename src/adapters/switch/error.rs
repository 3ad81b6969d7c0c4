use std::net::SocketAddr;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwitchError {
    #[error("failed to bind switch subscriber to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to configure switch socket: {0}")]
    Socket(#[source] std::io::Error),

    #[error("undecodable switch message: {0}")]
    Decode(#[from] serde_json::Error),
}
