//--------------------------------------------------------------------------------------------------
// STRUCTS
//--------------------------------------------------------------------------------------------------
// | Name           | Description                                       | Key Methods         |
// |----------------|---------------------------------------------------|---------------------|
// | Config         | Server settings read from the environment         | try_from_env, addr  |
// | CliArgs        | Command line overrides                            | apply               |
//--------------------------------------------------------------------------------------------------
// ENUMS
//--------------------------------------------------------------------------------------------------
// | Name           | Description                                       | Key Methods         |
// |----------------|---------------------------------------------------|---------------------|
// | ConfigError    | Unparsable environment variable                   |                     |
// | LogFormat      | Pretty or JSON log output                         | from_str            |
//--------------------------------------------------------------------------------------------------

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use clap::Parser;
use dotenv::dotenv;
use thiserror::Error;

use crate::domain::services::intake::order_id::IdStrategy;

const HOST: &str = "HOST";
const PORT: &str = "PORT";
const ORDER_ID_STRATEGY: &str = "ORDER_ID_STRATEGY";
const CORS_ORIGINS: &str = "CORS_ORIGINS";
const LOG_FORMAT: &str = "LOG_FORMAT";

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_CORS_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:3001",
    "http://127.0.0.1:3001",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to parse environment variable {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{}', expected 'pretty' or 'json'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub id_strategy: IdStrategy,
    pub cors_origins: Vec<String>,
    pub log_format: LogFormat,
}

impl Config {
    /// Loads `.env` (if any) and reads the configuration from the environment.
    pub fn try_from_env() -> Result<Config, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source, falling back
    /// to defaults for unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let host = parse_var(&lookup, HOST)?.unwrap_or(defaults.host);
        let port = parse_var(&lookup, PORT)?.unwrap_or(defaults.port);
        let id_strategy = parse_var(&lookup, ORDER_ID_STRATEGY)?.unwrap_or(defaults.id_strategy);
        let log_format = parse_var(&lookup, LOG_FORMAT)?.unwrap_or(defaults.log_format);

        let cors_origins = match lookup(CORS_ORIGINS) {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            None => defaults.cors_origins,
        };

        Ok(Config {
            host,
            port,
            id_strategy,
            cors_origins,
            log_format,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            id_strategy: IdStrategy::Uuid,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
            log_format: LogFormat::Pretty,
        }
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidVar {
                name,
                reason: e.to_string(),
            })
        })
        .transpose()
}

/// Command line overrides for the environment configuration.
#[derive(Debug, Default, Parser)]
#[command(name = "order_intake", about = "Order intake and pricing service")]
pub struct CliArgs {
    /// Address to bind the HTTP server to
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Port to bind the HTTP server to
    #[arg(long)]
    pub port: Option<u16>,

    /// Order id strategy: uuid or sequential
    #[arg(long)]
    pub id_strategy: Option<IdStrategy>,

    /// Log format: pretty or json
    #[arg(long)]
    pub log_format: Option<LogFormat>,
}

impl CliArgs {
    pub fn apply(self, mut config: Config) -> Config {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(id_strategy) = self.id_strategy {
            config.id_strategy = id_strategy;
        }
        if let Some(log_format) = self.log_format {
            config.log_format = log_format;
        }
        config
    }
}
