//! stack_readiness - one-shot readiness checks for a multi-service platform.
//!
//! A session probes the project checkout, the SQLite store and the three
//! HTTP services (frontend, backend, chain service), records one outcome per
//! probe, and prints a report with a readiness verdict.
//!
//! # Architecture
//!
//! - [`probe`] - the [`Probe`](probe::Probe) trait and every probe kind
//! - [`outcome`] - probe outcomes and the session ledger
//! - [`readiness`] - group pass ratios and the session verdict
//! - [`report`] - text and JSON rendering, recommendations
//! - [`session`] - the ordered probe catalog and the runner
//!
//! # Example
//!
//! ```rust,ignore
//! use stack_readiness::config::Config;
//! use stack_readiness::probe::build_client;
//! use stack_readiness::report::SessionReporter;
//! use stack_readiness::session::{standard_probes, SessionRunner};
//!
//! let config = Config::from_env()?;
//! let client = build_client()?;
//! let runner = SessionRunner::new(
//!     standard_probes(&config, &client),
//!     SessionReporter::new("Platform readiness report", config.report_format),
//! );
//! let report = runner.execute().await;
//! println!("{}", runner.render(&report));
//! ```

/// Package version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit hash (8 chars), empty outside a git checkout
pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

/// Full version string: "0.1.0 (abc12345)"
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_VERSION"), ")");

pub mod config;
pub mod logging;
pub mod outcome;
pub mod probe;
pub mod readiness;
pub mod report;
pub mod session;

// Re-exports for convenience
pub use config::Config;
pub use outcome::{Outcome, ResultLedger, Status};
pub use report::{SessionReport, SessionReporter};
pub use session::SessionRunner;
