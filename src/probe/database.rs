//! SQLite store introspection.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rusqlite::{Connection, OpenFlags};

use super::{Probe, ProbeError};
use crate::outcome::Outcome;

/// Facts gathered from a healthy store.
#[derive(Debug, Clone, PartialEq)]
struct StoreSummary {
    size_bytes: u64,
    table_count: usize,
    sampled_rows: i64,
    journal_mode: String,
}

/// What introspection found.
#[derive(Debug)]
enum Inspection {
    Healthy(StoreSummary),
    MissingTables(Vec<String>),
}

/// Concurrent readers and the writer only coexist under WAL.
const WAL_ADVICE: &str = "Enable WAL journal mode on the database (PRAGMA journal_mode=WAL)";

fn journal_advice(journal_mode: &str) -> Option<&'static str> {
    if journal_mode.eq_ignore_ascii_case("wal") {
        None
    } else {
        Some(WAL_ADVICE)
    }
}

/// Verifies the relational store exists, has its schema, and holds data.
pub struct DatabaseIntrospectionProbe {
    name: String,
    path: PathBuf,
    min_bytes: u64,
    required_tables: Vec<String>,
    sample_table: String,
}

impl DatabaseIntrospectionProbe {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        min_bytes: u64,
        required_tables: &[&str],
        sample_table: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            min_bytes,
            required_tables: required_tables.iter().map(|t| t.to_string()).collect(),
            sample_table: sample_table.into(),
        }
    }

    async fn inspect(&self, size_bytes: u64) -> Result<Inspection, ProbeError> {
        let path = self.path.clone();
        let required = self.required_tables.clone();
        let sample_table = self.sample_table.clone();

        tokio::task::spawn_blocking(move || {
            introspect(&path, size_bytes, &required, &sample_table)
        })
        .await?
    }
}

/// Runs on a blocking thread; opens the store read-only.
fn introspect(
    path: &Path,
    size_bytes: u64,
    required: &[String],
    sample_table: &str,
) -> Result<Inspection, ProbeError> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;

    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table'")?;
    let tables = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<HashSet<_>, _>>()?;

    let missing: Vec<String> = required
        .iter()
        .filter(|t| !tables.contains(t.as_str()))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Ok(Inspection::MissingTables(missing));
    }

    // Quoted identifier
    let sampled_rows: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM \"{}\"", sample_table.replace('"', "\"\"")),
        [],
        |row| row.get(0),
    )?;
    let journal_mode: String = conn.query_row("PRAGMA journal_mode", [], |row| row.get(0))?;

    Ok(Inspection::Healthy(StoreSummary {
        size_bytes,
        table_count: tables.len(),
        sampled_rows,
        journal_mode,
    }))
}

#[async_trait]
impl Probe for DatabaseIntrospectionProbe {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self) -> Outcome {
        let size_bytes = match tokio::fs::metadata(&self.path).await {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Outcome::fail(
                    &self.name,
                    format!("database file not found: {}", self.path.display()),
                );
            }
            Err(e) => {
                let err = ProbeError::Io {
                    path: self.path.clone(),
                    source: e,
                };
                return Outcome::fail(&self.name, err.to_string());
            }
        };

        if size_bytes < self.min_bytes {
            return Outcome::fail(
                &self.name,
                format!(
                    "database file too small: {} bytes (minimum {})",
                    size_bytes, self.min_bytes
                ),
            );
        }

        match self.inspect(size_bytes).await {
            Ok(Inspection::Healthy(summary)) => {
                let outcome = Outcome::pass(
                    &self.name,
                    format!(
                        "database healthy: {} bytes, {} tables, {} rows in {}, journal mode {}",
                        summary.size_bytes,
                        summary.table_count,
                        summary.sampled_rows,
                        self.sample_table,
                        summary.journal_mode
                    ),
                );
                match journal_advice(&summary.journal_mode) {
                    Some(advice) => outcome.with_advice(advice),
                    None => outcome,
                }
            }
            Ok(Inspection::MissingTables(missing)) => Outcome::fail(
                &self.name,
                format!("missing tables: {}", missing.join(", ")),
            ),
            Err(e) => Outcome::fail(&self.name, format!("database connection failed: {}", e)),
        }
    }
}
