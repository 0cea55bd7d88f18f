//! Filesystem presence probes.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::Probe;
use crate::outcome::Outcome;

/// Returns the entries of `paths` that do not exist under `root`, in order.
fn missing_under<'a>(root: &Path, paths: &'a [PathBuf]) -> Vec<&'a Path> {
    paths
        .iter()
        .filter(|p| !root.join(p).exists())
        .map(PathBuf::as_path)
        .collect()
}

fn join_paths(paths: &[&Path]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks that every required path exists.
pub struct ExistenceProbe {
    name: String,
    root: PathBuf,
    required: Vec<PathBuf>,
}

impl ExistenceProbe {
    pub fn new<I, P>(name: impl Into<String>, root: impl Into<PathBuf>, required: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            name: name.into(),
            root: root.into(),
            required: required.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl Probe for ExistenceProbe {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self) -> Outcome {
        let missing = missing_under(&self.root, &self.required);
        if missing.is_empty() {
            Outcome::pass(&self.name, "all required files present")
        } else {
            Outcome::fail(&self.name, format!("missing: {}", join_paths(&missing)))
        }
    }
}

/// Installed-dependency marker of one subsystem.
#[derive(Debug, Clone)]
pub struct DependencyMarker {
    pub subsystem: String,
    pub path: PathBuf,
}

impl DependencyMarker {
    pub fn new(subsystem: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            subsystem: subsystem.into(),
            path: path.into(),
        }
    }
}

/// Checks that each subsystem has its dependencies installed.
///
/// Advisory: a missing marker is reported as `FAIL` but the session carries on.
pub struct DependencyProbe {
    name: String,
    root: PathBuf,
    markers: Vec<DependencyMarker>,
}

impl DependencyProbe {
    pub fn new(
        name: impl Into<String>,
        root: impl Into<PathBuf>,
        markers: Vec<DependencyMarker>,
    ) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            markers,
        }
    }
}

#[async_trait]
impl Probe for DependencyProbe {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self) -> Outcome {
        let issues: Vec<String> = self
            .markers
            .iter()
            .filter(|m| !self.root.join(&m.path).exists())
            .map(|m| {
                format!(
                    "{} dependencies not installed ({} missing)",
                    m.subsystem,
                    m.path.display()
                )
            })
            .collect();

        if issues.is_empty() {
            Outcome::pass(&self.name, "all dependencies installed")
        } else {
            Outcome::fail(&self.name, issues.join("; "))
        }
    }
}

/// Checks contract sources and whether they have been compiled.
pub struct ContractSourcesProbe {
    name: String,
    root: PathBuf,
    sources: Vec<PathBuf>,
    artifacts_dir: PathBuf,
}

impl ContractSourcesProbe {
    pub fn new<I, P>(
        name: impl Into<String>,
        root: impl Into<PathBuf>,
        sources: I,
        artifacts_dir: impl Into<PathBuf>,
    ) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            name: name.into(),
            root: root.into(),
            sources: sources.into_iter().map(Into::into).collect(),
            artifacts_dir: artifacts_dir.into(),
        }
    }
}

#[async_trait]
impl Probe for ContractSourcesProbe {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self) -> Outcome {
        let missing = missing_under(&self.root, &self.sources);
        if !missing.is_empty() {
            return Outcome::fail(
                &self.name,
                format!("missing contracts: {}", join_paths(&missing)),
            );
        }

        if !self.root.join(&self.artifacts_dir).is_dir() {
            return Outcome::warn(
                &self.name,
                format!(
                    "contracts not compiled ({} missing)",
                    self.artifacts_dir.display()
                ),
            );
        }

        Outcome::pass(&self.name, "contract sources present and compiled")
    }
}
