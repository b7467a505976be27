use std::path::PathBuf;

use config::ConfigError as ConfigLoaderError;
use rmcp::model::ErrorData;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// JSON-RPC error family a descriptor maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidParams,
    ResourceNotFound,
}

/// Structured metadata for failed resource or prompt lookups.
#[derive(Debug, Clone)]
pub struct LookupErrorDescriptor {
    /// Error code.
    pub code: &'static str,
    /// User-facing message.
    pub message: &'static str,
    /// Recommended remediation.
    pub remediation: &'static str,
    pub kind: ErrorKind,
}

impl LookupErrorDescriptor {
    /// Simple constructor.
    pub const fn new(
        code: &'static str,
        message: &'static str,
        remediation: &'static str,
        kind: ErrorKind,
    ) -> Self {
        Self {
            code,
            message,
            remediation,
            kind,
        }
    }

    /// Create a builder.
    pub fn builder(&self) -> LookupErrorDescriptorBuilder<'_> {
        LookupErrorDescriptorBuilder::new(self)
    }
}

/// Builder for error data that fails if required fields are missing.
pub struct LookupErrorDescriptorBuilder<'a> {
    descriptor: &'a LookupErrorDescriptor,
    details: Option<Value>,
    extra_fields: Map<String, Value>,
}

impl<'a> LookupErrorDescriptorBuilder<'a> {
    pub fn new(descriptor: &'a LookupErrorDescriptor) -> Self {
        Self {
            descriptor,
            details: None,
            extra_fields: Map::new(),
        }
    }

    pub fn details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_context_field(mut self, key: &str, value: Value) -> Self {
        self.extra_fields.insert(key.to_string(), value);
        self
    }

    pub fn build(self) -> Result<ErrorData, LookupErrorBuilderError> {
        if self.descriptor.remediation.trim().is_empty() {
            return Err(LookupErrorBuilderError::MissingRemediation {
                code: self.descriptor.code,
            });
        }

        let mut data = Map::new();
        data.insert("code".into(), Value::String(self.descriptor.code.into()));
        data.insert(
            "remediation".into(),
            Value::String(self.descriptor.remediation.into()),
        );
        if let Some(details) = self.details {
            data.insert("details".into(), details);
        }
        for (key, value) in self.extra_fields {
            data.insert(key, value);
        }

        let data = Some(Value::Object(data));
        Ok(match self.descriptor.kind {
            ErrorKind::InvalidParams => ErrorData::invalid_params(self.descriptor.message, data),
            ErrorKind::ResourceNotFound => {
                ErrorData::resource_not_found(self.descriptor.message, data)
            }
        })
    }

    /// Build, degrading to an internal error if the descriptor is incomplete.
    pub fn build_or_internal(self) -> ErrorData {
        self.build()
            .unwrap_or_else(|err| ErrorData::internal_error(err.to_string(), None))
    }
}

/// Errors when required builder fields are missing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupErrorBuilderError {
    #[error("remediation is empty (code={code})")]
    MissingRemediation { code: &'static str },
}

/// Standard error for reads of an unregistered resource URI.
pub const RESOURCE_NOT_FOUND_ERROR: LookupErrorDescriptor = LookupErrorDescriptor::new(
    "RESOURCE_NOT_FOUND",
    "Requested resource URI is not registered",
    "Call resources/list and use one of the advertised URIs.",
    ErrorKind::ResourceNotFound,
);

/// Standard error for requests of an unregistered prompt.
pub const PROMPT_NOT_FOUND_ERROR: LookupErrorDescriptor = LookupErrorDescriptor::new(
    "PROMPT_NOT_FOUND",
    "Requested prompt is not registered",
    "Call prompts/list and use one of the advertised prompt names.",
    ErrorKind::InvalidParams,
);
