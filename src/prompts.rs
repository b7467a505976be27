//! Parameterless prompt templates served over `prompts/list` and `prompts/get`.
use rmcp::model::{ErrorData, GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use serde_json::json;

use crate::lib::errors::PROMPT_NOT_FOUND_ERROR;

/// A named constant prompt. Templates carry no description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub text: &'static str,
}

pub const WEATHER_PROMPT: PromptTemplate = PromptTemplate {
    name: "weather_prompt",
    text: "Ask me about the weather like: get_weather(city='Paris')",
};

pub const CONVERT_PROMPT: PromptTemplate = PromptTemplate {
    name: "convert_prompt",
    text: "Ask me to convert units like: convert_units(value=10, from_unit='miles', to_unit='km')",
};

pub const TEMPLATES: &[PromptTemplate] = &[WEATHER_PROMPT, CONVERT_PROMPT];

pub fn find(name: &str) -> Option<&'static PromptTemplate> {
    TEMPLATES.iter().find(|template| template.name == name)
}

pub fn list() -> Vec<Prompt> {
    TEMPLATES
        .iter()
        .map(|template| Prompt::new(template.name, None::<String>, None))
        .collect()
}

/// Render a prompt as a single user message.
pub fn get(name: &str) -> Result<GetPromptResult, ErrorData> {
    let template = find(name).ok_or_else(|| {
        PROMPT_NOT_FOUND_ERROR
            .builder()
            .with_context_field("name", json!(name))
            .details(json!({
                "available": TEMPLATES.iter().map(|t| t.name).collect::<Vec<_>>()
            }))
            .build_or_internal()
    })?;

    Ok(GetPromptResult {
        description: None,
        messages: vec![PromptMessage::new_text(
            PromptMessageRole::User,
            template.text,
        )],
    })
}
