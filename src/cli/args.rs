//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{build_launch_args, resolve_config_path, LaunchProfile, TransportMode};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Utility MCP server (weather stub, unit conversion, sample resource, prompts)",
    long_about = None
)]
pub struct LaunchProfileArgs {
    /// Select streamable http (default), stdio, or raw tcp.
    #[arg(long, value_enum, default_value_t = TransportMode::Http)]
    pub transport: TransportMode,
    /// Path to config.toml (overrides MCP_CONFIG_PATH).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
    /// Bind host, overriding `[server].host`.
    #[arg(long)]
    pub host: Option<String>,
    /// Bind port, overriding `[server].port`.
    #[arg(long)]
    pub port: Option<u16>,
}

impl LaunchProfileArgs {
    /// Build a `LaunchProfile` from CLI args and environment variables.
    pub fn build(self) -> Result<LaunchProfile> {
        let config_path = resolve_config_path(self.config_override)?;
        let launch_args = build_launch_args(
            self.transport,
            &config_path,
            self.host.as_deref(),
            self.port,
        );

        Ok(LaunchProfile {
            config_path,
            transport: self.transport,
            host_override: self.host,
            port_override: self.port,
            launch_args,
        })
    }
}
