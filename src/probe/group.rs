//! Group probes: sweep many targets, reduce with a pass ratio.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::http::{get, join_url};
use super::Probe;
use crate::outcome::Outcome;
use crate::readiness::{GroupVerdict, ReadinessEvaluator};

/// One target of a group sweep.
#[derive(Debug, Clone)]
pub struct GroupTarget {
    /// Absolute URL.
    pub url: String,
    /// Shown in failure listings.
    pub label: String,
    /// Status codes that count as success.
    pub accept: Vec<u16>,
}

impl GroupTarget {
    pub fn new(url: impl Into<String>, label: impl Into<String>, accept: &[u16]) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
            accept: accept.to_vec(),
        }
    }

    /// One target per `(path, label)` pair under `base_url`.
    pub fn routes(base_url: &str, routes: &[(&str, &str)], accept: &[u16]) -> Vec<Self> {
        routes
            .iter()
            .map(|(path, label)| Self::new(join_url(base_url, path), *label, accept))
            .collect()
    }
}

/// Targets of a group probe plus the fraction that must succeed.
#[derive(Debug, Clone)]
pub struct GroupCheckSpec {
    pub targets: Vec<GroupTarget>,
    pub pass_ratio: f64,
}

impl GroupCheckSpec {
    pub fn new(pass_ratio: f64) -> Self {
        Self {
            targets: Vec::new(),
            pass_ratio,
        }
    }

    /// Add `base + path` for every `(path, label)` pair.
    pub fn with_routes(mut self, base_url: &str, routes: &[(&str, &str)], accept: &[u16]) -> Self {
        self.targets.extend(GroupTarget::routes(base_url, routes, accept));
        self
    }
}

/// Result of sweeping every target once.
#[derive(Debug)]
struct Sweep {
    verdict: GroupVerdict,
    failing: Vec<String>,
}

/// Probe each target independently; failures are collected, never raised.
async fn sweep(client: &Client, spec: &GroupCheckSpec, timeout: Duration) -> Sweep {
    let mut successes = 0;
    let mut failing = Vec::new();

    for target in &spec.targets {
        match get(client, &target.url, timeout).await {
            Ok(resp) if target.accept.contains(&resp.status().as_u16()) => successes += 1,
            Ok(resp) => failing.push(format!("{}({})", target.label, resp.status().as_u16())),
            Err(e) => {
                debug!(url = %target.url, error = %e, "group target unreachable");
                failing.push(format!("{}({})", target.label, e.brief()));
            }
        }
    }

    let verdict = ReadinessEvaluator::new(spec.pass_ratio).evaluate(successes, spec.targets.len());
    Sweep { verdict, failing }
}

/// Sweeps a group of targets and passes if enough of them succeed.
pub struct GroupAccessibilityProbe {
    name: String,
    client: Client,
    spec: GroupCheckSpec,
    timeout: Duration,
    noun: &'static str,
}

impl GroupAccessibilityProbe {
    pub fn new(
        name: impl Into<String>,
        client: Client,
        spec: GroupCheckSpec,
        timeout: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            client,
            spec,
            timeout,
            noun: "targets",
        }
    }

    /// What the targets are called in messages ("pages", "routes").
    pub fn describing(mut self, noun: &'static str) -> Self {
        self.noun = noun;
        self
    }
}

#[async_trait]
impl Probe for GroupAccessibilityProbe {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self) -> Outcome {
        let Sweep { verdict, failing } = sweep(&self.client, &self.spec, self.timeout).await;
        let counts = format!("{}/{} {} accessible", verdict.successes, verdict.total, self.noun);

        if verdict.passed {
            Outcome::pass(&self.name, counts)
        } else {
            Outcome::fail(
                &self.name,
                format!(
                    "{}; {} failing: {}",
                    counts,
                    verdict.failures(),
                    failing.join(", ")
                ),
            )
        }
    }
}

/// Backend routes plus auxiliary routes gated on the auxiliary service
/// being alive.
///
/// The primary spec's pass ratio applies to the combined group. When the
/// auxiliary service does not answer its liveness check, its routes are left
/// out of the denominator rather than counted as failures.
pub struct ApiAvailabilityProbe {
    name: String,
    client: Client,
    primary: Vec<GroupTarget>,
    auxiliary: Vec<GroupTarget>,
    auxiliary_health_url: String,
    pass_ratio: f64,
    timeout: Duration,
    prerequisite_timeout: Duration,
}

impl ApiAvailabilityProbe {
    pub fn new(
        name: impl Into<String>,
        client: Client,
        primary: GroupCheckSpec,
        auxiliary: Vec<GroupTarget>,
        auxiliary_health_url: impl Into<String>,
        timeout: Duration,
        prerequisite_timeout: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            client,
            pass_ratio: primary.pass_ratio,
            primary: primary.targets,
            auxiliary,
            auxiliary_health_url: auxiliary_health_url.into(),
            timeout,
            prerequisite_timeout,
        }
    }

    /// Any HTTP answer counts: the gate only asks whether the service is up.
    async fn auxiliary_alive(&self) -> bool {
        get(&self.client, &self.auxiliary_health_url, self.prerequisite_timeout)
            .await
            .is_ok()
    }
}

#[async_trait]
impl Probe for ApiAvailabilityProbe {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self) -> Outcome {
        let auxiliary_alive = self.auxiliary_alive().await;

        let mut spec = GroupCheckSpec::new(self.pass_ratio);
        spec.targets.extend(self.primary.iter().cloned());
        if auxiliary_alive {
            spec.targets.extend(self.auxiliary.iter().cloned());
        }

        let Sweep { verdict, failing } = sweep(&self.client, &spec, self.timeout).await;

        let mut message = format!("{}/{} APIs available", verdict.successes, verdict.total);
        if !auxiliary_alive && !self.auxiliary.is_empty() {
            message.push_str(&format!(
                "; auxiliary service unavailable, {} routes skipped",
                self.auxiliary.len()
            ));
        }

        if verdict.passed {
            Outcome::pass(&self.name, message)
        } else {
            Outcome::fail(
                &self.name,
                format!(
                    "{}; {} failing: {}",
                    message,
                    verdict.failures(),
                    failing.join(", ")
                ),
            )
        }
    }
}
