//! # Taskspec
//!
//! Admission-time validation for the results a task declares.
//!
//! A task declares named results that later steps read back, so each
//! declaration is checked before the task is accepted:
//!
//! - **Names** must match [`RESULT_NAME_FORMAT`](results::RESULT_NAME_FORMAT),
//!   since they become environment variable keys and file path segments.
//! - **Types** may be omitted or `string`; `array` and `object` are only
//!   accepted while the `alpha` API tier is enabled.
//!
//! Feature configuration is always passed in explicitly.
//!
//! ## Quick Start
//!
//! ```rust
//! use taskspec::prelude::*;
//!
//! let flags = FeatureFlags::new().with_api_fields(ApiFields::Alpha);
//! let result = TaskResult::new("image-digest").with_type(ResultsType::Array);
//!
//! assert!(result.validate(&flags).is_ok());
//! assert!(TaskResult::new("-digest").validate(&flags).is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod errors;
pub mod results;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{validate_enabled_api_fields, ApiFields, FeatureFlags};
    pub use crate::errors::{
        ConfigError, FieldError, FieldErrorKind, FieldErrors, TaskSpecError,
    };
    pub use crate::results::{
        is_valid_result_name, validate_results, ResultsType, TaskResult, RESULT_NAME_FORMAT,
    };
}
