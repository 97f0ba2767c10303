use std::time::Duration;

use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

/// Environment variables consulted for the connection string, in order.
pub const DB_URL_ENV_VARS: [&str; 2] = ["DB_CONN_STR", "DATABASE_URL"];

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 1 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` when present, otherwise start from defaults and the
    /// environment. Either way the result is normalized and validated.
    pub fn load_and_validate() -> Result<Self> {
        let path = config_path();
        // a file that exists but does not parse is an error, not a fallback
        let mut cfg = if std::path::Path::new(&path).exists() {
            load_from_file(&path).map_err(|e| anyhow!("{path}: {e}"))?
        } else {
            Self::from_env()
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Defaults plus `SERVER_HOST` and `SERVER_PORT` (or `PORT`); the database
    /// URL is filled during normalization.
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(host) = lookup("SERVER_HOST") {
            cfg.server.host = host;
        }
        // SERVER_PORT first, then PORT
        let port = ["SERVER_PORT", "PORT"]
            .iter()
            .find_map(|k| lookup(k).and_then(|p| p.trim().parse::<u16>().ok()));
        if let Some(port) = port {
            cfg.server.port = port;
        }
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        // server: default blank host and workers, reject port 0
        self.server.normalize()?;
        // database: URL may come from the environment
        self.database.normalize_from_env();
        self.database.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        // only fill the URL when the file left it empty
        if self.url.trim().is_empty() {
            if let Some(url) = DB_URL_ENV_VARS.iter().find_map(|k| std::env::var(k).ok()) {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!(
                "database.url is empty; set it in config.toml or via DB_CONN_STR / DATABASE_URL"
            ));
        }
        let lower = self.url.to_lowercase();
        let supported = ["postgres://", "postgresql://", "mysql://", "sqlite:"];
        if !supported.iter().any(|p| lower.starts_with(p)) {
            return Err(anyhow!(
                "database.url must start with one of postgres://, postgresql://, mysql://, sqlite:"
            ));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }

    pub fn connect_timeout(&self) -> Duration { Duration::from_secs(self.connect_timeout_secs) }
    pub fn acquire_timeout(&self) -> Duration { Duration::from_secs(self.acquire_timeout_secs) }
    pub fn idle_timeout(&self) -> Duration { Duration::from_secs(self.idle_timeout_secs) }
    pub fn max_lifetime(&self) -> Duration { Duration::from_secs(self.max_lifetime_secs) }
}
