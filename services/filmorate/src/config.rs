use serde::Deserialize;

use filmorate_core::config::Config;

/// Filmorate service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct FilmorateConfig {
    /// Database connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 8080). Env var: `FILMORATE_PORT`.
    #[serde(default = "default_port")]
    pub filmorate_port: u16,
    /// Connection pool size (default 10). Env var: `DATABASE_MAX_CONNECTIONS`.
    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,
}

impl Config for FilmorateConfig {}

fn default_port() -> u16 {
    8080
}

fn default_max_connections() -> u32 {
    10
}
