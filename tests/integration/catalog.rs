use anyhow::Result;
use rmcp::model::{
    GetPromptRequestParam, PromptMessageContent, ReadResourceRequestParam, ResourceContents,
};
use serde_json::{json, Value};

use crate::common::Session;

fn read_request(uri: &str) -> ReadResourceRequestParam {
    ReadResourceRequestParam { uri: uri.into() }
}

fn prompt_request(name: &str) -> GetPromptRequestParam {
    GetPromptRequestParam {
        name: name.into(),
        arguments: None,
    }
}

#[tokio::test]
async fn sample_weather_resource_is_listed_and_readable() -> Result<()> {
    let session = Session::start().await?;

    let listed = session.client.list_resources(None).await?;
    assert!(
        listed
            .resources
            .iter()
            .any(|resource| resource.uri == "resource://sample-weather"),
        "list_resources should include the sample: {:?}",
        listed.resources
    );

    for _ in 0..2 {
        let read = session
            .client
            .read_resource(read_request("resource://sample-weather"))
            .await?;
        let text = match read.contents.first() {
            Some(ResourceContents::TextResourceContents { text, .. }) => text.clone(),
            other => panic!("expected text resource, got {other:?}"),
        };
        let record: Value = serde_json::from_str(&text)?;
        assert_eq!(
            record,
            json!({ "city": "London", "weather": "London: partly cloudy, +18°C" })
        );
    }

    let missing = session
        .client
        .read_resource(read_request("resource://missing"))
        .await;
    assert!(missing.is_err(), "unknown URI must be rejected");

    session.shutdown().await
}

#[tokio::test]
async fn prompts_are_listed_and_constant() -> Result<()> {
    let session = Session::start().await?;

    let listed = session.client.list_prompts(None).await?;
    let names: Vec<&str> = listed.prompts.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["weather_prompt", "convert_prompt"]);

    let expectations = [
        (
            "weather_prompt",
            "Ask me about the weather like: get_weather(city='Paris')",
        ),
        (
            "convert_prompt",
            "Ask me to convert units like: convert_units(value=10, from_unit='miles', to_unit='km')",
        ),
    ];
    for (name, expected) in expectations {
        let prompt = session.client.get_prompt(prompt_request(name)).await?;
        match prompt.messages.first().map(|message| &message.content) {
            Some(PromptMessageContent::Text { text }) => assert_eq!(text, expected),
            other => panic!("expected text prompt for {name}, got {other:?}"),
        }
    }

    let missing = session.client.get_prompt(prompt_request("nope")).await;
    assert!(missing.is_err(), "unknown prompt must be rejected");

    session.shutdown().await
}
