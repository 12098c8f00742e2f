//! API-tier feature flags.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Configuration key selecting which API tier is enabled.
pub const ENABLE_API_FIELDS_KEY: &str = "enable-api-fields";

/// Tier enabled when the configuration does not name one.
pub const DEFAULT_ENABLE_API_FIELDS: ApiFields = ApiFields::Beta;

/// Maturity tier of an API field.
///
/// Tiers are cumulative: enabling `alpha` also enables `beta` and `stable`
/// fields, enabling `beta` also enables `stable` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiFields {
    /// Experimental fields, off unless explicitly opted in.
    Alpha,
    /// Fields on the path to stabilization.
    Beta,
    /// Generally available fields.
    Stable,
}

impl Default for ApiFields {
    fn default() -> Self {
        DEFAULT_ENABLE_API_FIELDS
    }
}

impl fmt::Display for ApiFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alpha => write!(f, "alpha"),
            Self::Beta => write!(f, "beta"),
            Self::Stable => write!(f, "stable"),
        }
    }
}

impl FromStr for ApiFields {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alpha" => Ok(Self::Alpha),
            "beta" => Ok(Self::Beta),
            "stable" => Ok(Self::Stable),
            _ => Err(ConfigError::invalid_flag_value(ENABLE_API_FIELDS_KEY, s)),
        }
    }
}

/// Read-only feature configuration consulted during validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// The highest-risk API tier currently accepted.
    #[serde(default)]
    pub enable_api_fields: ApiFields,
}

impl FeatureFlags {
    /// Creates flags with every setting at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the enabled API tier.
    #[must_use]
    pub fn with_api_fields(mut self, api_fields: ApiFields) -> Self {
        self.enable_api_fields = api_fields;
        self
    }

    /// Returns true if alpha fields are accepted.
    #[must_use]
    pub fn is_alpha_enabled(&self) -> bool {
        self.enable_api_fields == ApiFields::Alpha
    }

    /// Builds flags from a key/value configuration map.
    ///
    /// Missing keys keep their defaults and unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFlagValue`] when a known key holds an
    /// unrecognized value.
    pub fn from_map(data: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut flags = Self::default();

        if let Some(raw) = data.get(ENABLE_API_FIELDS_KEY) {
            flags.enable_api_fields = raw.parse::<ApiFields>().inspect_err(|_| {
                warn!(key = ENABLE_API_FIELDS_KEY, value = %raw, "rejecting feature flag value");
            })?;
        }

        debug!(enable_api_fields = %flags.enable_api_fields, "loaded feature flags");
        Ok(flags)
    }

    /// Builds flags from a JSON object of string values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is not an object of
    /// strings, or any error from [`FeatureFlags::from_map`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let data: HashMap<String, String> = serde_json::from_str(json)?;
        Self::from_map(&data)
    }
}
