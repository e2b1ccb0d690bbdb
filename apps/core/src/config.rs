//! Environment-based configuration, loaded once at startup.

use std::env;
use std::net::SocketAddr;
use url::Url;

use crate::error::AppError;

const DEFAULT_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_DATABASE_PATH: &str = "mindgauge.sqlite";
const DEFAULT_SENTIMENT_URL: &str = "http://127.0.0.1:8080/";

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Path of the SQLite database file.
    pub database_path: String,
    /// Base URL of the sentiment inference server.
    pub sentiment_url: Url,
    /// Optional bearer token for the sentiment server.
    pub sentiment_auth_token: Option<String>,
}

impl Config {
    /// Read configuration from the environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_parts(
            env::var("MINDGAUGE_ADDR").ok(),
            env::var("DATABASE_PATH").ok(),
            env::var("SENTIMENT_URL").ok(),
            env::var("SENTIMENT_AUTH_TOKEN").ok(),
        )
    }

    fn from_parts(
        addr: Option<String>,
        database_path: Option<String>,
        sentiment_url: Option<String>,
        sentiment_auth_token: Option<String>,
    ) -> Result<Self, AppError> {
        let bind_addr = addr
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid MINDGAUGE_ADDR: {}", e)))?;

        let sentiment_url =
            Url::parse(&sentiment_url.unwrap_or_else(|| DEFAULT_SENTIMENT_URL.to_string()))?;

        Ok(Self {
            bind_addr,
            database_path: database_path.unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string()),
            sentiment_url,
            sentiment_auth_token,
        })
    }

    /// SQLite connection URL for the configured database path.
    pub fn database_url(&self) -> String {
        format!("sqlite://{}", self.database_path)
    }
}
