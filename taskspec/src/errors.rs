//! Error types for task specification validation.
//!
//! Validation failures are reported as structured [`FieldError`] values
//! carrying the offending field path, the rejected value and a
//! human-readable cause. Callers combine sibling failures with
//! [`FieldErrors`] before rejecting a whole document.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// The main error type for taskspec operations.
#[derive(Debug, Error)]
pub enum TaskSpecError {
    /// A single field failed validation.
    #[error("{0}")]
    Field(#[from] FieldError),

    /// Several fields failed validation.
    #[error("{0}")]
    Fields(#[from] FieldErrors),

    /// Feature configuration could not be loaded.
    #[error("{0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while loading feature configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A flag was set to a value outside its accepted set.
    #[error("invalid value for feature flag \"{key}\": \"{value}\"")]
    InvalidFlagValue {
        /// The flag key.
        key: String,
        /// The rejected value.
        value: String,
    },

    /// The configuration document was not a JSON object of strings.
    #[error("invalid feature flag document: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates an invalid flag value error.
    #[must_use]
    pub fn invalid_flag_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidFlagValue {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Quotes `value` as a double-quoted literal for error messages.
///
/// Printable characters are kept as-is. Other characters use a short
/// escape (`\n`, `\t`, ...) where one exists, otherwise `\xNN`, `\uNNNN`
/// or `\UNNNNNNNN` with lower-case hex.
pub(crate) fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str(r#"\""#),
            '\\' => out.push_str(r"\\"),
            '\u{07}' => out.push_str(r"\a"),
            '\u{08}' => out.push_str(r"\b"),
            '\u{0c}' => out.push_str(r"\f"),
            '\n' => out.push_str(r"\n"),
            '\r' => out.push_str(r"\r"),
            '\t' => out.push_str(r"\t"),
            '\u{0b}' => out.push_str(r"\v"),
            ' ' | '\'' => out.push(c),
            c if !c.is_whitespace() && is_printable(c) => out.push(c),
            c => {
                let code = u32::from(c);
                let escaped = if code < 0x80 {
                    format!(r"\x{code:02x}")
                } else if code < 0x1_0000 {
                    format!(r"\u{code:04x}")
                } else {
                    format!(r"\U{code:08x}")
                };
                out.push_str(&escaped);
            }
        }
    }
    out.push('"');
    out
}

// `escape_debug` leaves exactly the printable characters untouched.
fn is_printable(c: char) -> bool {
    let mut escaped = c.escape_debug();
    escaped.next() == Some(c) && escaped.next().is_none()
}

/// Classification of a [`FieldError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// A key or name does not follow the identifier grammar.
    InvalidKeyName,
    /// A field holds a value outside its accepted set.
    InvalidValue,
    /// A field requires an API tier that is not enabled.
    FeatureDisabled,
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeyName => write!(f, "invalid_key_name"),
            Self::InvalidValue => write!(f, "invalid_value"),
            Self::FeatureDisabled => write!(f, "feature_disabled"),
        }
    }
}

/// A validation failure attached to one or more field paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// What kind of failure this is.
    pub kind: FieldErrorKind,
    /// Short description, echoing the rejected value where there is one.
    pub message: String,
    /// Paths of the offending fields, relative to the validated object.
    #[serde(default)]
    pub paths: Vec<String>,
    /// Longer explanation of the accepted shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl FieldError {
    /// Creates an error for a key that does not follow the identifier grammar.
    #[must_use]
    pub fn invalid_key_name(
        value: &str,
        path: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            kind: FieldErrorKind::InvalidKeyName,
            message: format!("invalid key name {}", quote(value)),
            paths: vec![path.into()],
            details: Some(details.into()),
        }
    }

    /// Creates an error for a value outside the accepted set.
    #[must_use]
    pub fn invalid_value(
        value: impl fmt::Display,
        path: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            kind: FieldErrorKind::InvalidValue,
            message: format!("invalid value: {value}"),
            paths: vec![path.into()],
            details: Some(details.into()),
        }
    }

    /// Creates a path-less error for a feature whose API tier is disabled.
    #[must_use]
    pub fn feature_disabled(message: impl Into<String>) -> Self {
        Self {
            kind: FieldErrorKind::FeatureDisabled,
            message: message.into(),
            paths: Vec::new(),
            details: None,
        }
    }

    /// Nests the error under a parent field.
    ///
    /// `name` becomes `results.name`, and `[0]` becomes `results[0]`. An error
    /// without paths takes the prefix itself as its only path.
    #[must_use]
    pub fn via_field(mut self, prefix: &str) -> Self {
        if self.paths.is_empty() {
            self.paths.push(prefix.to_string());
            return self;
        }
        for path in &mut self.paths {
            *path = if path.starts_with('[') {
                format!("{prefix}{path}")
            } else {
                format!("{prefix}.{path}")
            };
        }
        self
    }

    /// Nests the error under a list position, e.g. `name` becomes `[3].name`.
    #[must_use]
    pub fn via_index(mut self, index: usize) -> Self {
        if self.paths.is_empty() {
            self.paths.push(format!("[{index}]"));
            return self;
        }
        for path in &mut self.paths {
            *path = if path.starts_with('[') {
                format!("[{index}]{path}")
            } else {
                format!("[{index}].{path}")
            };
        }
        self
    }

    /// Nests the error under an indexed parent field, e.g. `results[3].name`.
    #[must_use]
    pub fn via_field_index(self, prefix: &str, index: usize) -> Self {
        self.via_index(index).via_field(prefix)
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert("kind".to_string(), serde_json::json!(self.kind.to_string()));
        map.insert("message".to_string(), serde_json::json!(self.message));
        map.insert("paths".to_string(), serde_json::json!(self.paths));
        if let Some(ref details) = self.details {
            map.insert("details".to_string(), serde_json::json!(details));
        }
        map
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.paths.is_empty() {
            write!(f, "{}", self.message)?;
        } else {
            write!(f, "{}: {}", self.message, self.paths.join(", "))?;
        }
        if let Some(ref details) = self.details {
            write!(f, "\n{details}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldError {}

/// An ordered collection of field errors from sibling validations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an error and returns the collection, for chaining.
    #[must_use]
    pub fn also(mut self, error: FieldError) -> Self {
        self.errors.push(error);
        self
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no errors were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over the collected errors in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// `Ok(())` when empty, otherwise the collection itself.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<FieldError> for FieldErrors {
    fn from(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl Extend<FieldError> for FieldErrors {
    fn extend<T: IntoIterator<Item = FieldError>>(&mut self, iter: T) {
        self.errors.extend(iter);
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}
