//! HTTP liveness probes

use async_trait::async_trait;
use shopctl_core::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::debug;

/// Result of a single probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Endpoint answered with a 2xx status
    Healthy {
        /// HTTP status code
        status: u16,
    },
    /// Endpoint unreachable or answered with an error status
    Unhealthy {
        /// Why the probe failed
        reason: String,
    },
}

impl ProbeOutcome {
    /// Whether the probe passed
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy { .. })
    }

    /// Pass/fail indicator
    #[must_use]
    pub const fn indicator(&self) -> &'static str {
        if self.is_healthy() { "✓" } else { "✗" }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healthy { status } => write!(f, "healthy (HTTP {status})"),
            Self::Unhealthy { reason } => write!(f, "unhealthy ({reason})"),
        }
    }
}

/// Trait for liveness probes
///
/// A probe never fails: every problem is folded into
/// [`ProbeOutcome::Unhealthy`] so one probe cannot stop another.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Probe `url` once
    async fn probe(&self, url: &str) -> ProbeOutcome;
}

/// Probes over HTTP with `reqwest`
///
/// Mirrors `curl -f`: any 2xx is healthy, everything else is not.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    /// Create a prober with a per-request timeout
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Probe {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        debug!(url, "Probing");

        match self.client.get(url).send().await {
            Ok(response) if response.status().is_success() => ProbeOutcome::Healthy {
                status: response.status().as_u16(),
            },
            Ok(response) => ProbeOutcome::Unhealthy {
                reason: format!("HTTP {}", response.status().as_u16()),
            },
            Err(e) if e.is_timeout() => ProbeOutcome::Unhealthy {
                reason: "timed out".to_string(),
            },
            Err(e) if e.is_connect() => ProbeOutcome::Unhealthy {
                reason: "connection refused".to_string(),
            },
            Err(e) => ProbeOutcome::Unhealthy {
                reason: e.to_string(),
            },
        }
    }
}

/// Mock prober for testing
///
/// URLs without a scripted answer are reported unreachable.
#[derive(Debug, Clone, Default)]
pub struct MockProber {
    state: Arc<Mutex<MockProbeState>>,
}

#[derive(Debug, Default)]
struct MockProbeState {
    answers: HashMap<String, ProbeOutcome>,
    probed: Vec<String>,
}

impl MockProber {
    /// Create a new mock prober
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the answer for `url`
    pub async fn answer(&self, url: impl Into<String>, outcome: ProbeOutcome) {
        self.state.lock().await.answers.insert(url.into(), outcome);
    }

    /// URLs probed so far, in order
    pub async fn probed(&self) -> Vec<String> {
        self.state.lock().await.probed.clone()
    }
}

#[async_trait]
impl Prober for MockProber {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        let mut state = self.state.lock().await;
        state.probed.push(url.to_string());

        state
            .answers
            .get(url)
            .cloned()
            .unwrap_or_else(|| ProbeOutcome::Unhealthy {
                reason: "connection refused".to_string(),
            })
    }
}
