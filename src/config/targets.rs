//! Locations of the probed subsystems.

use std::path::PathBuf;

use super::parse::{env_opt, env_or, env_url, EnvSource};
use super::ConfigError;

/// Where the composed platform lives.
#[derive(Clone, Debug)]
pub struct TargetConfig {
    /// Project checkout root (default: current directory).
    pub project_root: PathBuf,
    /// Web frontend origin.
    pub frontend_url: String,
    /// Application backend origin.
    pub backend_url: String,
    /// Blockchain-facing auxiliary service origin.
    pub chain_service_url: String,
    /// SQLite store (default: `<project_root>/desci.db`).
    pub database_path: PathBuf,
}

impl TargetConfig {
    pub fn from_env(env: &dyn EnvSource) -> Result<Self, ConfigError> {
        let project_root = PathBuf::from(env_or(env, "PROJECT_ROOT", "."));
        let database_path = env_opt(env, "DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| project_root.join("desci.db"));

        Ok(Self {
            frontend_url: env_url(env, "FRONTEND_URL", "http://localhost:5173")?,
            backend_url: env_url(env, "BACKEND_URL", "http://localhost:3000")?,
            chain_service_url: env_url(env, "CHAIN_SERVICE_URL", "http://localhost:8088")?,
            project_root,
            database_path,
        })
    }
}
