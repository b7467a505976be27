use tracing::{debug, info};

use super::ServerConfig;

pub fn log_missing_file(path: &std::path::Path) {
    debug!(
        target: "utility_mcp::config",
        path = %path.display(),
        "Configuration file not found; using built-in defaults"
    );
}

pub fn log_loaded(config: &ServerConfig) {
    info!(
        target: "utility_mcp::config",
        path = %config.source_path.display(),
        host = %config.server.host,
        port = config.server.port,
        name = %config.server.name,
        "Configuration loaded successfully"
    );
}
