use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not valid: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub addr: SocketAddr,
    pub backend_url: String,
    pub workers: usize,
    pub backend_timeout: Duration,
    pub page_size: usize,
    /// Serve listings from this file instead of the backend.
    pub seed_path: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            backend_url: "http://localhost:8000/api/".to_string(),
            workers: 8,
            backend_timeout: Duration::from_secs(30),
            page_size: 6,
            seed_path: None,
        }
    }
}

impl StorefrontConfig {
    /// Read settings from the environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup("STOREFRONT_ADDR") {
            cfg.addr = parse("STOREFRONT_ADDR", v)?;
        }
        if let Some(v) = lookup("BACKEND_API_URL") {
            if v.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    key: "BACKEND_API_URL",
                    value: v,
                });
            }
            cfg.backend_url = v;
        }
        if let Some(v) = lookup("STOREFRONT_WORKERS") {
            cfg.workers = positive("STOREFRONT_WORKERS", v)?;
        }
        if let Some(v) = lookup("BACKEND_TIMEOUT_SECS") {
            cfg.backend_timeout = Duration::from_secs(positive("BACKEND_TIMEOUT_SECS", v)? as u64);
        }
        if let Some(v) = lookup("CATALOG_PAGE_SIZE") {
            cfg.page_size = positive("CATALOG_PAGE_SIZE", v)?;
        }
        cfg.seed_path = lookup("CATALOG_SEED_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(cfg)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}

fn positive(key: &'static str, value: String) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::Invalid { key, value }),
    }
}
