use std::io;

use tokio::net::TcpStream;
use tracing::debug;

use crate::error::{ProbeError, Result};
use crate::types::{PortState, ProbeConfig};

pub(crate) fn validate_port(port: Option<i64>) -> Result<u16> {
    match port {
        Some(p) if (0..=i64::from(u16::MAX)).contains(&p) => Ok(p as u16),
        other => Err(ProbeError::InvalidPort(other)),
    }
}

/// One connection attempt against `config.host:config.port`.
///
/// A successful connect means something is listening; the stream is closed
/// right away, no data is exchanged. A refused connection means nothing is
/// bound to the port. Any other failure surfaces untouched. There is no
/// per-attempt timeout beyond the transport's own connect behavior.
pub(crate) async fn check_once(config: &ProbeConfig) -> Result<PortState> {
    let port = validate_port(config.port)?;

    debug!("probing {}:{}", config.host, port);

    match TcpStream::connect((config.host.as_str(), port)).await {
        Ok(stream) => {
            drop(stream);
            Ok(PortState::InUse)
        }
        Err(e) if e.kind() == io::ErrorKind::ConnectionRefused => Ok(PortState::Free),
        Err(e) => Err(ProbeError::Connection(e)),
    }
}
