use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub query_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);
        let query_timeout_secs = std::env::var("DB_QUERY_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(3);
        Ok(Self {
            database_url,
            max_connections,
            query_timeout_secs,
        })
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_applies_defaults_and_overrides() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/cinevault");
        std::env::remove_var("DB_MAX_CONNECTIONS");
        std::env::remove_var("DB_QUERY_TIMEOUT_SECS");

        let config = AppConfig::from_env().expect("config should load");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.query_timeout(), Duration::from_secs(3));

        std::env::set_var("DB_MAX_CONNECTIONS", "25");
        std::env::set_var("DB_QUERY_TIMEOUT_SECS", "7");
        let config = AppConfig::from_env().expect("config should load");
        assert_eq!(config.max_connections, 25);
        assert_eq!(config.query_timeout(), Duration::from_secs(7));

        // Unparseable values fall back to defaults rather than erroring.
        std::env::set_var("DB_QUERY_TIMEOUT_SECS", "not-a-number");
        let config = AppConfig::from_env().expect("config should load");
        assert_eq!(config.query_timeout_secs, 3);
    }
}
