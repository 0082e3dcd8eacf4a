use crate::error::{AppError, Result};
use config::Environment;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub inverter: InverterConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct InverterConfig {
    /// Base URL of the inverter's Solar API, e.g. `http://192.168.1.20/solar_api/v1`
    pub api_url: String,
    pub timeout_ms: u64,
    /// Render the `evRange` / `hotWater` placeholders on energy readings
    pub estimate_placeholders: bool,
}

impl InverterConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Flat view of the process environment, keys lowercased by the `config` crate.
#[derive(Debug, Deserialize)]
struct EnvSettings {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default)]
    solar_inverter_api_url: Option<String>,
    #[serde(default = "default_timeout_ms")]
    solar_inverter_timeout_ms: u64,
    #[serde(default)]
    solar_inverter_estimates: bool,
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    4000
}

fn default_timeout_ms() -> u64 {
    1000
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_environment(Environment::default())
    }

    /// Build from an explicit `Environment` source. Tests pass a fixed map here.
    pub fn from_environment(environment: Environment) -> Result<Self> {
        let settings: EnvSettings = config::Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        let api_url = settings
            .solar_inverter_api_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| AppError::Config("SOLAR_INVERTER_API_URL must be set".to_string()))?;

        reqwest::Url::parse(&api_url).map_err(|e| {
            AppError::Config(format!("Invalid SOLAR_INVERTER_API_URL '{}': {}", api_url, e))
        })?;

        let config = Config {
            server: ServerConfig {
                host: settings.host,
                port: settings.port,
            },
            inverter: InverterConfig {
                api_url,
                timeout_ms: settings.solar_inverter_timeout_ms,
                estimate_placeholders: settings.solar_inverter_estimates,
            },
        };

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.inverter.timeout_ms == 0 {
            return Err(AppError::Config(
                "SOLAR_INVERTER_TIMEOUT_MS must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
