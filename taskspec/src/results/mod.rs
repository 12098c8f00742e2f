//! Task result declarations and their validation.

mod types;
mod validation;
#[cfg(test)]
mod validation_tests;

pub use types::{ResultsType, TaskResult};
pub use validation::{
    is_valid_result_name, validate_results, RESULTS_TYPE_FEATURE, RESULT_NAME_FORMAT,
};
