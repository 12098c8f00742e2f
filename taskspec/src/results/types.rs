//! Task result declaration types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a task result.
///
/// `Unspecified` is the state of declarations written before result types
/// existed and is kept distinct from an explicit `String`. Literals outside
/// the recognized set are kept verbatim in `Unknown` so validation can echo
/// them back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResultsType {
    /// No type was declared.
    #[default]
    Unspecified,
    /// A single string value, the default scalar type.
    String,
    /// An array of strings.
    Array,
    /// An object with string-valued properties.
    Object,
    /// Any unrecognized type literal.
    Unknown(String),
}

impl ResultsType {
    /// Returns the wire literal for this type (empty when unspecified).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unspecified => "",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Unknown(raw) => raw,
        }
    }

    /// Returns true for the types gated behind the alpha API tier.
    #[must_use]
    pub fn is_advanced(&self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }
}

impl From<&str> for ResultsType {
    fn from(raw: &str) -> Self {
        match raw {
            "" => Self::Unspecified,
            "string" => Self::String,
            "array" => Self::Array,
            "object" => Self::Object,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for ResultsType {
    fn from(raw: String) -> Self {
        match Self::from(raw.as_str()) {
            Self::Unknown(_) => Self::Unknown(raw),
            known => known,
        }
    }
}

impl From<ResultsType> for String {
    fn from(ty: ResultsType) -> Self {
        match ty {
            ResultsType::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ResultsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named output slot declared on a task.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskResult {
    /// Result name; used downstream as an environment variable key and a
    /// file path segment.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type", default, skip_serializing_if = "is_unspecified")]
    pub result_type: ResultsType,
    /// Human-readable description. Never validated.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

fn is_unspecified(ty: &ResultsType) -> bool {
    *ty == ResultsType::Unspecified
}

impl TaskResult {
    /// Creates a result declaration with no declared type.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the declared type.
    #[must_use]
    pub fn with_type(mut self, result_type: impl Into<ResultsType>) -> Self {
        self.result_type = result_type.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
