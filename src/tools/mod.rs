//! MCP tools registered on the server and helper functions for the router.

pub mod units;
pub mod weather;

use rmcp::handler::server::router::tool::ToolRouter;

pub use units::{
    convert_units, Conversion, ConvertUnitsRequest, ConvertUnitsResponse, Unit,
    UnsupportedConversion, CONVERT_TOOL_ID,
};
pub use weather::{get_weather, WeatherReport, WeatherRequest, WEATHER_TOOL_ID};

pub type ServerToolRouter<S> = ToolRouter<S>;

/// Helper for building a tool router.
pub fn build_router<S>(builder: impl FnOnce() -> ServerToolRouter<S>) -> ServerToolRouter<S>
where
    S: Send + Sync + 'static,
{
    builder()
}
