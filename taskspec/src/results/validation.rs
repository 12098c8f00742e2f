//! Admission checks for task result declarations.

use super::types::{ResultsType, TaskResult};
use crate::config::{validate_enabled_api_fields, ApiFields, FeatureFlags};
use crate::errors::{FieldError, FieldErrors};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Pattern every result name must match.
pub const RESULT_NAME_FORMAT: &str = r"^([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]$";

/// Feature name reported when an advanced result type is gated off.
pub const RESULTS_TYPE_FEATURE: &str = "results type";

#[allow(clippy::expect_used)]
static RESULT_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(RESULT_NAME_FORMAT).expect("result name pattern is a valid regex")
});

/// Returns true if `name` is an acceptable result name.
#[must_use]
pub fn is_valid_result_name(name: &str) -> bool {
    RESULT_NAME_REGEX.is_match(name)
}

fn invalid_name_details() -> String {
    format!(
        "Name must consist of alphanumeric characters, '-', '_', and must start and end with an alphanumeric character (e.g. 'MyName',  or 'my-name',  or 'my_name', regex used for validation is '{RESULT_NAME_FORMAT}')"
    )
}

impl TaskResult {
    /// Validates this declaration against the given feature configuration.
    ///
    /// The name is checked first. `array` and `object` types are then decided
    /// by the alpha API gate alone. A missing type is accepted for
    /// declarations that predate result types, and any other type must be
    /// `string`.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidKeyName` error on `name`, the gate's
    /// `FeatureDisabled` error unchanged, or an `InvalidValue` error on
    /// `type`.
    pub fn validate(&self, flags: &FeatureFlags) -> Result<(), FieldError> {
        if !is_valid_result_name(&self.name) {
            return Err(FieldError::invalid_key_name(
                &self.name,
                "name",
                invalid_name_details(),
            ));
        }

        if self.result_type.is_advanced() {
            return validate_enabled_api_fields(flags, RESULTS_TYPE_FEATURE, ApiFields::Alpha);
        }

        if self.result_type == ResultsType::Unspecified {
            return Ok(());
        }

        // The details stay fixed; the rejected type is only echoed in the message.
        if self.result_type != ResultsType::String {
            return Err(FieldError::invalid_value(
                &self.result_type,
                "type",
                "type must be string",
            ));
        }

        Ok(())
    }
}

/// Validates every declaration in a task's `results` list.
///
/// Each failure is re-pathed under `results[i]` and all failures are
/// returned together in input order. Duplicate names are not checked here.
///
/// # Errors
///
/// Returns the collected [`FieldErrors`] when at least one declaration fails.
pub fn validate_results(
    results: &[TaskResult],
    flags: &FeatureFlags,
) -> Result<(), FieldErrors> {
    let mut errs = FieldErrors::new();
    errs.extend(results.iter().enumerate().filter_map(|(index, result)| {
        result
            .validate(flags)
            .err()
            .map(|err| err.via_field_index("results", index))
    }));

    if !errs.is_empty() {
        debug!(
            rejected = errs.len(),
            total = results.len(),
            "task results failed validation"
        );
    }
    errs.into_result()
}
