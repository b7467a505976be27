//! Load and validate server configuration.
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod server;
pub mod telemetry;

pub use server::{
    parse_server_section, RawServerSection, ServerSection, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_SERVER_NAME,
};

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server: ServerSection,
    pub source_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawServerConfig {
    server: Option<RawServerSection>,
}

impl ServerConfig {
    /// Load configuration from a specific path. A missing file yields defaults.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "utility_mcp::config",
            path = %path.display(),
            "Starting configuration load"
        );

        if !path.exists() {
            telemetry::log_missing_file(&path);
        }

        let builder = config::Config::builder()
            .add_source(config::File::from(path.clone()).required(false));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "utility_mcp::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawServerConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "utility_mcp::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "utility_mcp::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    /// Apply CLI host/port overrides on top of the loaded file.
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            server::validate_port(port, &self.source_path)?;
            self.server.port = port;
        }
        Ok(self)
    }

    fn from_raw(raw: RawServerConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let server = parse_server_section(raw.server, &path)?;

        Ok(Self {
            server,
            source_path: path,
        })
    }
}
