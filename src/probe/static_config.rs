//! Configuration hygiene checks.

use std::path::PathBuf;

use async_trait::async_trait;

use super::Probe;
use crate::outcome::Outcome;

/// Inspects ignore rules and secret files. Findings are advisory only.
pub struct StaticConfigProbe {
    name: String,
    root: PathBuf,
    ignore_file: String,
    ignore_marker: String,
    example_file: String,
    forbidden: Vec<String>,
}

impl StaticConfigProbe {
    /// `ignore_file` must mention `ignore_marker`, `example_file` must exist,
    /// and none of `forbidden` may be present in the root.
    pub fn new(
        name: impl Into<String>,
        root: impl Into<PathBuf>,
        ignore_file: impl Into<String>,
        ignore_marker: impl Into<String>,
        example_file: impl Into<String>,
        forbidden: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            ignore_file: ignore_file.into(),
            ignore_marker: ignore_marker.into(),
            example_file: example_file.into(),
            forbidden: forbidden.iter().map(|f| f.to_string()).collect(),
        }
    }

    async fn findings(&self) -> Vec<String> {
        let mut issues = Vec::new();

        match tokio::fs::read_to_string(self.root.join(&self.ignore_file)).await {
            Ok(content) if !content.contains(&self.ignore_marker) => issues.push(format!(
                "{} may not be ignored by {}",
                self.ignore_marker, self.ignore_file
            )),
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                issues.push(format!("{} missing", self.ignore_file))
            }
            Err(e) => issues.push(format!("{} unreadable: {}", self.ignore_file, e)),
        }

        if !self.root.join(&self.example_file).exists() {
            issues.push(format!("{} missing", self.example_file));
        }

        for file in &self.forbidden {
            if self.root.join(file).exists() {
                issues.push(format!("sensitive file may be committed: {}", file));
            }
        }

        issues
    }
}

#[async_trait]
impl Probe for StaticConfigProbe {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self) -> Outcome {
        let issues = self.findings().await;
        if issues.is_empty() {
            Outcome::pass(&self.name, "configuration hygiene good")
        } else {
            Outcome::warn(&self.name, issues.join("; "))
        }
    }
}
