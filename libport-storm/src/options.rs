use std::time::Duration;

use crate::types::ProbeConfig;

/// Partially specified probe parameters.
///
/// Any subset of fields may be set; [`normalize`](Self::normalize) fills
/// in the rest. The wide `i64` port admits out-of-range values on purpose
/// so that validation happens in the consuming operation and can report
/// the offending value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeOptions {
    pub port: Option<i64>,
    pub host: Option<String>,
    pub in_use: Option<bool>,
    pub retry_time: Option<Duration>,
    pub timeout: Option<Duration>,
}

impl ProbeOptions {
    pub fn for_port(port: u16) -> Self {
        Self {
            port: Some(i64::from(port)),
            ..Self::default()
        }
    }

    /// Produce the canonical, fully defaulted configuration.
    ///
    /// A missing or zero `retry_time` or `timeout` is silently replaced by
    /// its default, never rejected. `port` and `in_use` pass through
    /// untouched: `check` validates the port, the wait operations validate
    /// both.
    pub fn normalize(self) -> ProbeConfig {
        let defaults = ProbeConfig::default();

        ProbeConfig {
            port: self.port,
            host: self.host.unwrap_or(defaults.host),
            in_use: self.in_use,
            retry_time: self
                .retry_time
                .filter(|d| !d.is_zero())
                .unwrap_or(defaults.retry_time),
            timeout: self
                .timeout
                .filter(|d| !d.is_zero())
                .unwrap_or(defaults.timeout),
        }
    }
}

impl From<u16> for ProbeOptions {
    fn from(port: u16) -> Self {
        Self::for_port(port)
    }
}

impl From<ProbeConfig> for ProbeOptions {
    fn from(config: ProbeConfig) -> Self {
        Self {
            port: config.port,
            host: Some(config.host),
            in_use: config.in_use,
            retry_time: Some(config.retry_time),
            timeout: Some(config.timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_get_defaults() {
        let config = ProbeOptions::for_port(80).normalize();

        assert_eq!(config.port, Some(80));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.in_use, None);
        assert_eq!(config.retry_time, Duration::from_millis(250));
        assert_eq!(config.timeout, Duration::from_millis(2000));
    }

    #[test]
    fn explicit_values_are_kept() {
        let config = ProbeOptions {
            port: Some(6060),
            host: Some("192.0.2.1".to_string()),
            in_use: Some(true),
            retry_time: Some(Duration::from_millis(100)),
            timeout: Some(Duration::from_millis(500)),
        }
        .normalize();

        assert_eq!(config.port, Some(6060));
        assert_eq!(config.host, "192.0.2.1");
        assert_eq!(config.in_use, Some(true));
        assert_eq!(config.retry_time, Duration::from_millis(100));
        assert_eq!(config.timeout, Duration::from_millis(500));
    }

    #[test]
    fn zero_durations_are_replaced_not_rejected() {
        let config = ProbeOptions {
            port: Some(80),
            retry_time: Some(Duration::ZERO),
            timeout: Some(Duration::ZERO),
            ..ProbeOptions::default()
        }
        .normalize();

        assert_eq!(config.retry_time, Duration::from_millis(250));
        assert_eq!(config.timeout, Duration::from_millis(2000));
    }

    #[test]
    fn out_of_range_port_passes_through_unvalidated() {
        let config = ProbeOptions {
            port: Some(-20),
            ..ProbeOptions::default()
        }
        .normalize();

        assert_eq!(config.port, Some(-20));
    }

    #[test]
    fn normalize_is_idempotent_on_canonical_input() {
        let canonical = ProbeOptions {
            port: Some(80),
            host: Some("localhost".to_string()),
            in_use: Some(false),
            retry_time: Some(Duration::from_millis(100)),
            timeout: Some(Duration::from_millis(500)),
        }
        .normalize();

        let renormalized = ProbeOptions::from(canonical.clone()).normalize();
        assert_eq!(renormalized, canonical);
    }

    #[test]
    fn bare_port_call_shape() {
        let options = ProbeOptions::from(8080u16);
        assert_eq!(options.port, Some(8080));
        assert_eq!(options.host, None);
    }
}
