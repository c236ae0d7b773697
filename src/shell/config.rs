use std::{net::SocketAddr, time::Duration};

use anyhow::{Context, Result, bail};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.toml";

const ENV_KEYS: [&str; 7] = [
    "database_url",
    "database_max_connections",
    "database_connection_timeout",
    "host",
    "port",
    "request_timeout",
    "rust_log",
];

/// Service configuration.
///
/// Loaded from built-in defaults, then `config.toml`, then environment
/// variables named after the fields in upper case (`DATABASE_URL`, `PORT`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    /// Seconds to wait for a pooled connection.
    pub database_connection_timeout: u64,
    pub host: String,
    pub port: u16,
    /// Seconds before an in-flight request is answered with 408.
    pub request_timeout: u64,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://loyalty_history.db?mode=rwc".to_string(),
            database_max_connections: 10,
            database_connection_timeout: 10,
            host: "0.0.0.0".to_string(),
            port: 3000,
            request_timeout: 30,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_figment(
            Figment::new()
                .merge(Serialized::defaults(Self::default()))
                .merge(Toml::file(CONFIG_FILE))
                .merge(Env::raw().only(&ENV_KEYS)),
        )
    }

    fn from_figment(figment: Figment) -> Result<Self> {
        let config: Self = figment
            .extract()
            .context("Failed to load configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            bail!("port must be greater than 0");
        }
        if self.database_max_connections == 0 {
            bail!("database_max_connections must be greater than 0");
        }
        if self.database_url.trim().is_empty() {
            bail!("database_url must not be empty");
        }
        Ok(())
    }

    pub fn parse_server_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid server address {}:{}", self.host, self.port))
    }

    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.database_connection_timeout)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// The database url with any password replaced by `***`.
    pub fn database_url_masked(&self) -> String {
        let url = &self.database_url;
        let Some(scheme_end) = url.find("://").map(|i| i + 3) else {
            return url.clone();
        };
        let Some(at) = url[scheme_end..].find('@').map(|i| i + scheme_end) else {
            return url.clone();
        };
        match url[scheme_end..at].find(':').map(|i| i + scheme_end) {
            Some(colon) => format!("{}:***{}", &url[..colon], &url[at..]),
            None => url.clone(),
        }
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_fall_back_to_the_defaults() {
        let config =
            Config::from_figment(Figment::new().merge(Serialized::defaults(Config::default())))
                .unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.parse_server_addr().unwrap().port(), 3000);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.connection_timeout(), Duration::from_secs(10));
    }

    #[rstest]
    fn it_should_let_toml_override_the_defaults() {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::string("port = 8080\nrust_log = \"debug\""));

        let config = Config::from_figment(figment).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.host, "0.0.0.0");
    }

    #[rstest]
    #[case::zero_port(Config { port: 0, ..Config::default() })]
    #[case::zero_connections(Config { database_max_connections: 0, ..Config::default() })]
    #[case::empty_url(Config { database_url: " ".into(), ..Config::default() })]
    fn it_should_reject_invalid_settings(#[case] config: Config) {
        assert!(config.validate().is_err());
    }

    #[rstest]
    fn it_should_reject_an_unparseable_host() {
        let config = Config {
            host: "not a host".into(),
            ..Config::default()
        };
        assert!(config.parse_server_addr().is_err());
    }

    #[rstest]
    #[case("mysql://app:secret@db:3306/loyalty", "mysql://app:***@db:3306/loyalty")]
    #[case("mysql://app@db/loyalty", "mysql://app@db/loyalty")]
    #[case("sqlite://loyalty_history.db?mode=rwc", "sqlite://loyalty_history.db?mode=rwc")]
    fn it_should_mask_passwords(#[case] url: &str, #[case] expected: &str) {
        let config = Config {
            database_url: url.into(),
            ..Config::default()
        };
        assert_eq!(config.database_url_masked(), expected);
    }
}
