//! Testing utilities for validation outcomes.
//!
//! This module provides assertion helpers that check the kind and path of
//! a [`FieldError`](crate::errors::FieldError) with readable failure output.

mod assertions;

pub use assertions::{
    assert_feature_disabled, assert_invalid_key_name, assert_invalid_value, assert_valid,
};
