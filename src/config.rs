use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::currencies::RateTable;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub rates: RatesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
    pub fallback: FallbackRates,
}

/// Static EUR-relative rates used when the rate service is unavailable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FallbackRates {
    pub mkd: f64,
    pub usd: f64,
}

impl FallbackRates {
    pub fn table(&self) -> RateTable {
        RateTable::new(self.mkd, self.usd)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "sqlite://database.sqlite3".to_string(),
            },
            rates: RatesConfig {
                endpoint: "http://data.fixer.io/api/latest".to_string(),
                timeout_secs: 5,
                fallback: FallbackRates {
                    mkd: 61.63,
                    usd: 1.10,
                },
            },
        }
    }
}

/// Load configuration from a TOML file, falling back to the built-in
/// defaults when the file does not exist.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_fallback_rates() {
        let config = Config::default();
        let table = config.rates.fallback.table();
        assert_relative_eq!(table.eur_to_mkd, 61.63);
        assert_relative_eq!(table.eur_to_usd, 1.10);
    }

    #[test]
    fn test_parse_config_toml() {
        let config: Config = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 3000

            [database]
            url = "sqlite://shop.sqlite3"

            [rates]
            endpoint = "http://rates.test/api/latest"
            timeout_secs = 2

            [rates.fallback]
            mkd = 61.5
            usd = 1.08
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.rates.endpoint, "http://rates.test/api/latest");
        assert_relative_eq!(config.rates.fallback.table().eur_to_usd, 1.08);
    }
}
