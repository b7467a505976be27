//! Static resources served over `resources/list` and `resources/read`.
use rmcp::model::{AnnotateAble, ErrorData, RawResource, Resource, ResourceContents};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::lib::errors::RESOURCE_NOT_FOUND_ERROR;

pub const SAMPLE_WEATHER_URI: &str = "resource://sample-weather";
const SAMPLE_WEATHER_NAME: &str = "sample_weather";
const SAMPLE_WEATHER_DESCRIPTION: &str = "Static resource with example weather data.";
const JSON_MIME_TYPE: &str = "application/json";

/// Fixed record behind `resource://sample-weather`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SampleWeather {
    pub city: String,
    pub weather: String,
}

pub fn sample_weather() -> SampleWeather {
    SampleWeather {
        city: "London".to_string(),
        weather: "London: partly cloudy, +18°C".to_string(),
    }
}

/// Descriptors for every registered resource.
pub fn list() -> Vec<Resource> {
    let mut raw = RawResource::new(SAMPLE_WEATHER_URI, SAMPLE_WEATHER_NAME);
    raw.description = Some(SAMPLE_WEATHER_DESCRIPTION.to_string());
    raw.mime_type = Some(JSON_MIME_TYPE.to_string());
    vec![raw.no_annotation()]
}

/// Read a resource by URI.
pub fn read(uri: &str) -> Result<Vec<ResourceContents>, ErrorData> {
    match uri {
        SAMPLE_WEATHER_URI => {
            let body = serde_json::to_string(&sample_weather())
                .map_err(|err| ErrorData::internal_error(err.to_string(), None))?;
            Ok(vec![ResourceContents::text(body, uri)])
        }
        other => Err(RESOURCE_NOT_FOUND_ERROR
            .builder()
            .with_context_field("uri", json!(other))
            .build_or_internal()),
    }
}
