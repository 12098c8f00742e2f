//! Feature configuration and API-tier gating.
//!
//! Configuration is always passed explicitly to validation functions;
//! nothing in this crate reads process-wide state.

mod feature_flags;
mod gate;

pub use feature_flags::{
    ApiFields, FeatureFlags, DEFAULT_ENABLE_API_FIELDS, ENABLE_API_FIELDS_KEY,
};
pub use gate::validate_enabled_api_fields;
