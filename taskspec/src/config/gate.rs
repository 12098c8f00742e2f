//! Gating of fields behind an API maturity tier.

use super::{ApiFields, FeatureFlags, ENABLE_API_FIELDS_KEY};
use crate::errors::FieldError;

/// Checks that the tier `wanted` by a feature is enabled in `flags`.
///
/// Stable features always pass. Beta features pass when `beta` or `alpha` is
/// enabled, alpha features only when `alpha` is enabled.
///
/// # Errors
///
/// Returns a path-less [`FieldError`] of kind
/// [`FeatureDisabled`](crate::errors::FieldErrorKind::FeatureDisabled)
/// naming the feature, the wanted tier and the current tier.
pub fn validate_enabled_api_fields(
    flags: &FeatureFlags,
    feature_name: &str,
    wanted: ApiFields,
) -> Result<(), FieldError> {
    let current = flags.enable_api_fields;
    let enabled = match wanted {
        ApiFields::Stable => true,
        ApiFields::Beta => matches!(current, ApiFields::Alpha | ApiFields::Beta),
        ApiFields::Alpha => current == ApiFields::Alpha,
    };

    if enabled {
        return Ok(());
    }

    Err(FieldError::feature_disabled(format!(
        "{feature_name} requires \"{ENABLE_API_FIELDS_KEY}\" feature gate to be \"{wanted}\" but it is \"{current}\""
    )))
}
