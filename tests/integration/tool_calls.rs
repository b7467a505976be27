use anyhow::Result;
use serde_json::json;

use crate::common::Session;

#[tokio::test]
async fn convert_units_over_mcp() -> Result<()> {
    let session = Session::start().await?;

    let forward = session
        .call(
            "convert_units",
            json!({ "value": 10, "from_unit": "miles", "to_unit": "km" }),
        )
        .await?;
    assert_eq!(forward, json!({ "input": "10.0 miles", "output": "16.09 km" }));

    let back = session
        .call(
            "convert_units",
            json!({ "value": 16.09, "from_unit": "km", "to_unit": "miles" }),
        )
        .await?;
    assert_eq!(back["output"], json!("10.00 miles"));

    let boiling = session
        .call(
            "convert_units",
            json!({ "value": 100, "from_unit": "c", "to_unit": "f" }),
        )
        .await?;
    assert_eq!(boiling["output"], json!("212.00 f"));

    let mixed_case = session
        .call(
            "convert_units",
            json!({ "value": 1, "from_unit": "KM", "to_unit": "Miles" }),
        )
        .await?;
    assert_eq!(mixed_case["output"], json!("0.62 Miles"));

    session.shutdown().await
}

#[tokio::test]
async fn unsupported_pair_is_an_error_record_not_a_fault() -> Result<()> {
    let session = Session::start().await?;

    let result = session
        .call(
            "convert_units",
            json!({ "value": 5, "from_unit": "miles", "to_unit": "lbs" }),
        )
        .await?;
    assert_eq!(
        result,
        json!({ "error": "Conversion miles->lbs not supported" })
    );

    session.shutdown().await
}

#[tokio::test]
async fn get_weather_over_mcp() -> Result<()> {
    let session = Session::start().await?;

    let paris = session.call("get_weather", json!({ "city": "Paris" })).await?;
    assert_eq!(
        paris,
        json!({ "city": "Paris", "weather": "Sample weather for Paris: sunny 25°C" })
    );

    let empty = session.call("get_weather", json!({ "city": "" })).await?;
    assert_eq!(empty["city"], json!(""));
    assert!(empty["weather"]
        .as_str()
        .is_some_and(|text| text.contains("sunny 25°C")));

    session.shutdown().await
}
