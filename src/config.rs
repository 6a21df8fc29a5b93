// src/config.rs
use crate::errors::ServerError;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub addr: SocketAddr,
    /// Upper bound on astra's blocking worker threads.
    pub max_workers: usize,
    /// Listings CSV, read once at startup.
    pub data_path: PathBuf,
    /// Serialized regression model (JSON).
    pub model_path: PathBuf,
    /// Append logs here instead of stderr when set.
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            data_path: PathBuf::from("data/rumah_jakarta_clean.csv"),
            model_path: PathBuf::from("data/regression_model.json"),
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(addr) = lookup("RUMAH_ADDR") {
            cfg.addr = addr
                .trim()
                .parse()
                .map_err(|e| ServerError::ConfigError(format!("RUMAH_ADDR '{addr}': {e}")))?;
        }

        if let Some(workers) = lookup("RUMAH_MAX_WORKERS") {
            let n: usize = workers.trim().parse().map_err(|e| {
                ServerError::ConfigError(format!("RUMAH_MAX_WORKERS '{workers}': {e}"))
            })?;
            if n == 0 {
                return Err(ServerError::ConfigError(
                    "RUMAH_MAX_WORKERS must be at least 1".into(),
                ));
            }
            cfg.max_workers = n;
        }

        if let Some(path) = lookup("RUMAH_DATA_PATH").filter(|p| !p.is_empty()) {
            cfg.data_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("RUMAH_MODEL_PATH").filter(|p| !p.is_empty()) {
            cfg.model_path = PathBuf::from(path);
        }
        cfg.log_path = lookup("RUMAH_LOG_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(cfg)
    }
}
