use tokio::time::{sleep, Instant};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{ProbeError, Result};
use crate::probe;
use crate::types::{PortState, ProbeConfig};

/// Poll the port until it reaches the state named by `config.in_use`.
///
/// The deadline is computed once, up front; it bounds the total wait, not
/// the number of attempts. Attempts are strictly sequential and an attempt
/// already in flight when the deadline passes still counts; only the next
/// one is suppressed.
pub(crate) async fn wait_for_status(
    config: &ProbeConfig,
    cancel: &CancellationToken,
) -> Result<()> {
    let want = match config.in_use {
        Some(in_use) => PortState::from_in_use(in_use),
        None => return Err(ProbeError::InvalidDesiredState),
    };

    let deadline = Instant::now() + config.timeout;

    loop {
        if cancel.is_cancelled() {
            return Err(ProbeError::Cancelled);
        }

        // Connection-level failures will not fix themselves on the next
        // tick; abort the session instead of retrying them.
        let state = probe::check_once(config).await?;
        if state == want {
            return Ok(());
        }

        if Instant::now() >= deadline {
            debug!(
                "gave up waiting for {}:{:?} to become {:?}",
                config.host, config.port, want
            );
            return Err(ProbeError::Timeout(config.timeout));
        }

        tokio::select! {
            _ = cancel.cancelled() => return Err(ProbeError::Cancelled),
            _ = sleep(config.retry_time) => {}
        }
    }
}
