//! Response-time sampling.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use super::http::{get, join_url};
use super::Probe;
use crate::outcome::Outcome;

/// Times a few endpoints of a service and compares the mean to a budget.
///
/// Slowness is advisory (`WARN`). The probe is `SKIP`ped when the liveness
/// prerequisite does not return `200`, and `FAIL`s only when not a single
/// sample could be taken.
pub struct LatencySamplingProbe {
    name: String,
    client: Client,
    base_url: String,
    prerequisite_path: String,
    endpoints: Vec<String>,
    budget: Duration,
    timeout: Duration,
    prerequisite_timeout: Duration,
}

impl LatencySamplingProbe {
    pub fn new(
        name: impl Into<String>,
        client: Client,
        base_url: impl Into<String>,
        prerequisite_path: impl Into<String>,
        endpoints: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            client,
            base_url: base_url.into(),
            prerequisite_path: prerequisite_path.into(),
            endpoints: endpoints.iter().map(|e| e.to_string()).collect(),
            budget: Duration::from_millis(500),
            timeout: Duration::from_secs(5),
            prerequisite_timeout: Duration::from_secs(3),
        }
    }

    /// Mean response time above which the result is a warning.
    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = budget;
        self
    }

    /// Per-sample and prerequisite timeouts.
    pub fn with_timeouts(mut self, sample: Duration, prerequisite: Duration) -> Self {
        self.timeout = sample;
        self.prerequisite_timeout = prerequisite;
        self
    }

    async fn prerequisite_met(&self) -> bool {
        let url = join_url(&self.base_url, &self.prerequisite_path);
        matches!(
            get(&self.client, &url, self.prerequisite_timeout).await,
            Ok(resp) if resp.status() == StatusCode::OK
        )
    }

    /// Milliseconds of each endpoint that answered `200`, body included.
    async fn collect_samples(&self) -> Vec<f64> {
        let mut samples = Vec::with_capacity(self.endpoints.len());

        for endpoint in &self.endpoints {
            let url = join_url(&self.base_url, endpoint);
            let start = Instant::now();
            match get(&self.client, &url, self.timeout).await {
                Ok(resp) if resp.status() == StatusCode::OK => match resp.bytes().await {
                    Ok(_) => samples.push(start.elapsed().as_secs_f64() * 1000.0),
                    Err(e) => debug!(url = %url, error = %e, "sample body unreadable"),
                },
                Ok(resp) => debug!(url = %url, status = resp.status().as_u16(), "sample discarded"),
                Err(e) => debug!(url = %url, error = %e, "sample discarded"),
            }
        }

        samples
    }
}

/// Arithmetic mean, `None` for no samples.
pub(crate) fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        None
    } else {
        Some(samples.iter().sum::<f64>() / samples.len() as f64)
    }
}

#[async_trait]
impl Probe for LatencySamplingProbe {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self) -> Outcome {
        if !self.prerequisite_met().await {
            return Outcome::skip(&self.name, "service unavailable, latency not sampled");
        }

        let samples = self.collect_samples().await;
        let budget_ms = self.budget.as_secs_f64() * 1000.0;

        match mean(&samples) {
            None => Outcome::fail(&self.name, "no latency samples collected"),
            Some(avg) if avg < budget_ms => Outcome::pass(
                &self.name,
                format!("average response time: {:.2}ms", avg),
            ),
            Some(avg) => Outcome::warn(
                &self.name,
                format!(
                    "slow responses: average {:.2}ms (budget {:.0}ms)",
                    avg, budget_ms
                ),
            ),
        }
    }
}
