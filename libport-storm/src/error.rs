use std::io;
use std::time::Duration;

use thiserror::Error;

fn display_port(port: &Option<i64>) -> String {
    match port {
        Some(p) => p.to_string(),
        None => String::from("none"),
    }
}

#[derive(Debug, Error)]
pub enum ProbeError {
    /// Port missing or outside `[0, 65535]`. Raised before any I/O.
    #[error("invalid port: {}", display_port(.0))]
    InvalidPort(Option<i64>),

    /// `in_use` was not set on a wait operation. Raised before any I/O.
    #[error("in_use must be set to wait for a port state")]
    InvalidDesiredState,

    /// Any connection failure other than "connection refused", surfaced
    /// untouched. Never retried by the polling driver.
    #[error("connection attempt failed: {0}")]
    Connection(#[from] io::Error),

    /// The polling deadline elapsed without observing the desired state.
    #[error("timed out after {0:?} waiting for the desired port state")]
    Timeout(Duration),

    /// The session's cancellation token fired.
    #[error("wait cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, ProbeError>;
