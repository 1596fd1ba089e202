use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `FORECAST_API__SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "FORECAST_API";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub forecast: ForecastConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_enabled: bool,
    /// Map `/health` and `/alive`
    pub expose_health: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            cors_enabled: false,
            expose_health: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    pub days: u32,
    pub min_temperature_c: i32,
    /// Exclusive upper bound
    pub max_temperature_c: i32,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            days: 5,
            min_temperature_c: -20,
            max_temperature_c: 55,
        }
    }
}

impl ApiConfig {
    /// Load configuration: defaults, then an optional TOML file, then
    /// `FORECAST_API__*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder()
            .add_source(::config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(true));
        }

        let settings = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to load configuration from {:?}", path))?;

        settings
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Parse configuration from TOML text layered over the defaults
    pub fn from_toml(contents: &str) -> Result<Self> {
        ::config::Config::builder()
            .add_source(::config::Config::try_from(&Self::default())?)
            .add_source(::config::File::from_str(contents, ::config::FileFormat::Toml))
            .build()
            .context("Failed to parse configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
