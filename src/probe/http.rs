//! HTTP reachability and JSON health probes.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;

use super::{Probe, ProbeError};
use crate::outcome::{Outcome, Status};

/// Build the HTTP client shared by all network probes.
///
/// No client-wide timeout: each request carries its probe's own bound.
pub fn build_client() -> Result<Client, ProbeError> {
    Client::builder()
        .user_agent(concat!("stack_readiness/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(ProbeError::Http)
}

/// `base` without trailing slash + `path` with leading slash.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        base.to_string()
    } else if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// GET with a bounded timeout. Expiry maps to [`ProbeError::Timeout`].
pub(crate) async fn get(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<Response, ProbeError> {
    client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| ProbeError::from_request(url, timeout, e))
}

/// Checks that a service answers with an accepted status code.
///
/// Paths are tried in order; the first accepted response wins. Accepting
/// `404` turns this into a pure liveness check: any routed answer proves the
/// service is up.
pub struct HttpReachabilityProbe {
    name: String,
    client: Client,
    base_url: String,
    paths: Vec<String>,
    accept: Vec<u16>,
    timeout: Duration,
    failure_status: Status,
}

impl HttpReachabilityProbe {
    /// Probe `GET base_url/` expecting `200`, failing with `FAIL`.
    pub fn new(
        name: impl Into<String>,
        client: Client,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            client,
            base_url: base_url.into(),
            paths: vec!["/".to_string()],
            accept: vec![200],
            timeout,
            failure_status: Status::Fail,
        }
    }

    /// Candidate paths, tried in order.
    pub fn with_paths(mut self, paths: &[&str]) -> Self {
        self.paths = paths.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Status codes that count as reachable.
    pub fn accepting(mut self, codes: &[u16]) -> Self {
        self.accept = codes.to_vec();
        self
    }

    /// Status reported when nothing answered (`WARN` for best-effort checks).
    pub fn with_failure_status(mut self, status: Status) -> Self {
        self.failure_status = status;
        self
    }
}

#[async_trait]
impl Probe for HttpReachabilityProbe {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self) -> Outcome {
        let mut attempts = Vec::with_capacity(self.paths.len());

        for path in &self.paths {
            let url = join_url(&self.base_url, path);
            match get(&self.client, &url, self.timeout).await {
                Ok(resp) if self.accept.contains(&resp.status().as_u16()) => {
                    return Outcome::pass(
                        &self.name,
                        format!("service running (GET {} -> {})", path, resp.status().as_u16()),
                    );
                }
                Ok(resp) => attempts.push(format!("{}: status {}", path, resp.status().as_u16())),
                Err(e) => attempts.push(format!("{}: {}", path, e)),
            }
        }

        let message = if self.paths.len() > 1 {
            format!("all endpoints unreachable ({})", attempts.join("; "))
        } else {
            attempts.join("; ")
        };
        Outcome::new(&self.name, self.failure_status, message)
    }
}

/// Checks a JSON health endpoint reports the expected status value.
pub struct JsonHealthProbe {
    name: String,
    client: Client,
    url: String,
    field: String,
    expected: String,
    timeout: Duration,
}

impl JsonHealthProbe {
    /// Expects `{"<field>": "<expected>", ...}` with status `200`.
    pub fn new(
        name: impl Into<String>,
        client: Client,
        url: impl Into<String>,
        field: impl Into<String>,
        expected: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            client,
            url: url.into(),
            field: field.into(),
            expected: expected.into(),
            timeout,
        }
    }

    async fn check(&self) -> Result<Outcome, ProbeError> {
        let resp = get(&self.client, &self.url, self.timeout).await?;
        if resp.status() != StatusCode::OK {
            return Ok(Outcome::fail(
                &self.name,
                format!("status code: {}", resp.status().as_u16()),
            ));
        }

        let payload: Value = resp.json().await.map_err(|e| {
            if e.is_timeout() {
                ProbeError::from_request(&self.url, self.timeout, e)
            } else {
                ProbeError::Payload(e.to_string())
            }
        })?;

        if payload.get(&self.field).and_then(Value::as_str) == Some(self.expected.as_str()) {
            Ok(Outcome::pass(&self.name, "service running"))
        } else {
            Ok(Outcome::fail(
                &self.name,
                format!("unexpected health status: {}", payload),
            ))
        }
    }
}

#[async_trait]
impl Probe for JsonHealthProbe {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self) -> Outcome {
        self.check()
            .await
            .unwrap_or_else(|e| Outcome::fail(&self.name, e.to_string()))
    }
}
