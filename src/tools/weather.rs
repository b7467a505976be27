//! Stub weather lookup behind the `get_weather` tool.
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const WEATHER_TOOL_ID: &str = "get_weather";

/// Placeholder conditions reported for every city.
pub const SAMPLE_CONDITIONS: &str = "sunny 25°C";

/// Input for `get_weather`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WeatherRequest {
    /// City name; any string is accepted.
    pub city: String,
}

/// Weather record returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WeatherReport {
    pub city: String,
    pub weather: String,
}

/// Build the sample report for `city`. Never fails.
pub fn get_weather(city: &str) -> WeatherReport {
    WeatherReport {
        city: city.to_string(),
        weather: format!("Sample weather for {city}: {SAMPLE_CONDITIONS}"),
    }
}
