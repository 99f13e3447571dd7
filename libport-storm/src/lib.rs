//! Asynchronous TCP port state probing: point-in-time checks and
//! poll-until-free/in-use waits with bounded retries and a wall-clock
//! deadline.

mod error;
mod options;
mod probe;
mod prober;
mod types;
mod wait;

pub use error::{ProbeError, Result};
pub use options::ProbeOptions;
pub use prober::Prober;
pub use types::{PortState, ProbeConfig, ProbeReport};

use futures::StreamExt;

/// Check whether something is listening on `port` on the loopback
/// interface.
pub async fn check(port: u16) -> Result<PortState> {
    Prober::new().check(port).await
}

/// Check whether something is listening on `port` on `host`.
pub async fn check_host(host: &str, port: u16) -> Result<PortState> {
    Prober::new()
        .check(ProbeOptions {
            port: Some(i64::from(port)),
            host: Some(host.to_string()),
            ..ProbeOptions::default()
        })
        .await
}

/// Poll until the port reaches the state named by `options.in_use`.
pub async fn wait_for_status(options: impl Into<ProbeOptions>) -> Result<()> {
    Prober::new().wait_for_status(options).await
}

/// Poll until nothing is listening on the port.
pub async fn wait_until_free(options: impl Into<ProbeOptions>) -> Result<()> {
    Prober::new().wait_until_free(options).await
}

/// Poll until something is listening on the port.
pub async fn wait_until_used(options: impl Into<ProbeOptions>) -> Result<()> {
    Prober::new().wait_until_used(options).await
}

/// Probe many loopback ports concurrently and collect the reports.
pub async fn check_many<I>(ports: I) -> Vec<ProbeReport>
where
    I: IntoIterator<Item = u16> + 'static,
{
    Prober::new().check_stream(ports).collect().await
}
