use crate::{cli::LaunchProfile, server::config::ServerConfig};

/// Build the `ServerInfo.instructions` string shown to MCP clients.
pub fn build_instructions(profile: &LaunchProfile, config: &ServerConfig) -> String {
    format!(
        "{name}: call get_weather or convert_units, read resource://sample-weather, or fetch weather_prompt / convert_prompt. Serving in {transport} mode (host={host}, port={port}); config {path}.",
        name = config.server.name,
        transport = profile.transport.as_str(),
        host = config.server.host,
        port = config.server.port,
        path = config.source_path.display(),
    )
}
