use std::time::Instant;

use futures::stream::{self, Stream, StreamExt};
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::options::ProbeOptions;
use crate::probe;
use crate::types::{PortState, ProbeReport};
use crate::wait;

const MAX_CONCURRENT_CHECKS: usize = 32;

/// Handle for issuing probes that share one cancellation scope.
///
/// Probes hold no state besides the token: every call normalizes its own
/// configuration and owns its own socket, so concurrent calls through one
/// prober (or through clones of it) are independent.
#[derive(Clone)]
pub struct Prober {
    cancel: CancellationToken,
}

impl Prober {
    pub fn new() -> Self {
        Self::with_cancellation(CancellationToken::new())
    }

    /// Tie every wait session issued through this prober to `cancel`.
    pub fn with_cancellation(cancel: CancellationToken) -> Self {
        Self { cancel }
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Single point-in-time probe of one port.
    pub async fn check(&self, options: impl Into<ProbeOptions>) -> Result<PortState> {
        let config = options.into().normalize();
        probe::check_once(&config).await
    }

    /// Poll until the port reaches the state named by `in_use`, failing
    /// once `timeout` has elapsed.
    pub async fn wait_for_status(&self, options: impl Into<ProbeOptions>) -> Result<()> {
        let config = options.into().normalize();
        wait::wait_for_status(&config, &self.cancel).await
    }

    /// Poll until nothing is listening on the port.
    pub async fn wait_until_free(&self, options: impl Into<ProbeOptions>) -> Result<()> {
        let mut options = options.into();
        options.in_use = Some(false);
        self.wait_for_status(options).await
    }

    /// Poll until something is listening on the port.
    pub async fn wait_until_used(&self, options: impl Into<ProbeOptions>) -> Result<()> {
        let mut options = options.into();
        options.in_use = Some(true);
        self.wait_for_status(options).await
    }

    /// Probe many loopback ports concurrently, yielding one report per
    /// port as results arrive.
    pub fn check_stream<I>(&self, ports: I) -> impl Stream<Item = ProbeReport> + '_
    where
        I: IntoIterator<Item = u16> + 'static,
    {
        let ports: Vec<u16> = ports.into_iter().collect();

        stream::iter(ports)
            .map(move |port| async move {
                let start = Instant::now();
                let outcome = self.check(port).await;
                ProbeReport {
                    port,
                    outcome,
                    duration: start.elapsed(),
                }
            })
            .buffer_unordered(MAX_CONCURRENT_CHECKS)
    }
}

impl Default for Prober {
    fn default() -> Self {
        Self::new()
    }
}
