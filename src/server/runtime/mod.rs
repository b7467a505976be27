//! MCP server startup and capability registration.
mod server_info;
mod startup;
mod tool_registry;

pub use server_info::build_instructions;
pub use startup::{run_server, RuntimeExit, HTTP_MOUNT_PATH};
pub use tool_registry::UtilityServer;
