//! Decision-tree tests for result declaration validation.

#[cfg(test)]
mod tests {
    use crate::config::{ApiFields, FeatureFlags};
    use crate::errors::FieldErrorKind;
    use crate::results::{
        is_valid_result_name, validate_results, ResultsType, TaskResult, RESULT_NAME_FORMAT,
    };
    use crate::testing::{
        assert_feature_disabled, assert_invalid_key_name, assert_invalid_value, assert_valid,
    };
    use pretty_assertions::assert_eq;

    const VALID_NAMES: &[&str] = &[
        "a",
        "Z",
        "7",
        "MyName",
        "my-name",
        "my_name",
        "my.name",
        "a1",
        "a-b_c.d",
        "a--b",
        "a..b",
        "0digest9",
    ];

    const INVALID_NAMES: &[&str] = &[
        "",
        "-",
        "_",
        ".",
        "-name",
        "name-",
        "_name",
        "name_",
        ".name",
        "name.",
        "my name",
        "my/name",
        "my$name",
        "naïve",
        "name\n",
        "\tname",
    ];

    fn alpha() -> FeatureFlags {
        FeatureFlags::new().with_api_fields(ApiFields::Alpha)
    }

    fn beta() -> FeatureFlags {
        FeatureFlags::new().with_api_fields(ApiFields::Beta)
    }

    fn all_types() -> Vec<ResultsType> {
        vec![
            ResultsType::Unspecified,
            ResultsType::String,
            ResultsType::Array,
            ResultsType::Object,
            ResultsType::from("integer"),
        ]
    }

    #[test]
    fn test_pattern_text_is_exact() {
        assert_eq!(RESULT_NAME_FORMAT, "^([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]$");
    }

    #[test]
    fn test_valid_names_with_unspecified_type() {
        for name in VALID_NAMES {
            assert!(is_valid_result_name(name), "{name:?} should be valid");
            assert_valid(&TaskResult::new(*name).validate(&beta()));
        }
    }

    #[test]
    fn test_invalid_names_rejected_for_every_type() {
        for name in INVALID_NAMES {
            assert!(!is_valid_result_name(name), "{name:?} should be invalid");
            for ty in all_types() {
                for flags in [alpha(), beta()] {
                    let outcome = TaskResult::new(*name).with_type(ty.clone()).validate(&flags);
                    assert_invalid_key_name(&outcome, "name", name);
                }
            }
        }
    }

    #[test]
    fn test_invalid_name_details_include_pattern() {
        let err = TaskResult::new("-bad").validate(&beta()).unwrap_err();
        let details = err.details.unwrap();

        assert!(details.starts_with("Name must consist of alphanumeric characters"));
        assert!(details.contains(&format!("regex used for validation is '{RESULT_NAME_FORMAT}'")));
    }

    #[test]
    fn test_invalid_name_echo_escapes_non_printable_characters() {
        let err = TaskResult::new("a\u{7f}b").validate(&beta()).unwrap_err();
        assert_eq!(err.message, r#"invalid key name "a\x7fb""#);

        let err = TaskResult::new("a\u{200b}b").validate(&beta()).unwrap_err();
        assert_eq!(err.message, r#"invalid key name "a\u200bb""#);
    }

    #[test]
    fn test_legacy_unspecified_type() {
        assert_valid(&TaskResult::new("MyName").validate(&beta()));
    }

    #[test]
    fn test_string_type() {
        assert_valid(&TaskResult::new("my-name").with_type(ResultsType::String).validate(&beta()));
    }

    #[test]
    fn test_array_type_gated_off() {
        let outcome = TaskResult::new("my_name").with_type(ResultsType::Array).validate(&beta());
        assert_feature_disabled(&outcome, "results type");
    }

    #[test]
    fn test_object_type_gated_off_on_stable() {
        let flags = FeatureFlags::new().with_api_fields(ApiFields::Stable);
        let outcome = TaskResult::new("my_name").with_type(ResultsType::Object).validate(&flags);
        assert_feature_disabled(&outcome, "results type");
    }

    #[test]
    fn test_advanced_types_with_alpha() {
        assert_valid(&TaskResult::new("my_name").with_type(ResultsType::Array).validate(&alpha()));
        assert_valid(&TaskResult::new("my_name").with_type(ResultsType::Object).validate(&alpha()));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let outcome = TaskResult::new("valid-name").with_type("integer").validate(&alpha());
        assert_invalid_value(&outcome, "type", "integer");

        let err = outcome.unwrap_err();
        assert_eq!(err.details.as_deref(), Some("type must be string"));
    }

    #[test]
    fn test_unknown_type_details_are_fixed() {
        let a = TaskResult::new("n").with_type("integer").validate(&beta()).unwrap_err();
        let b = TaskResult::new("n").with_type("boolean").validate(&beta()).unwrap_err();

        assert_eq!(a.details, b.details);
        assert_ne!(a.message, b.message);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_invalid_key_name(&TaskResult::new("").validate(&alpha()), "name", "");
    }

    #[test]
    fn test_single_character_name() {
        assert_valid(&TaskResult::new("a").validate(&beta()));
        assert_invalid_key_name(&TaskResult::new("-").validate(&beta()), "name", "-");
    }

    #[test]
    fn test_name_checked_before_gate() {
        let outcome = TaskResult::new("bad name").with_type(ResultsType::Array).validate(&beta());
        assert_invalid_key_name(&outcome, "name", "bad name");
    }

    #[test]
    fn test_advanced_types_decided_by_gate_only() {
        for ty in [ResultsType::Array, ResultsType::Object] {
            let result = TaskResult::new("out").with_type(ty);
            assert_valid(&result.validate(&alpha()));
            let err = result.validate(&beta()).unwrap_err();
            assert_eq!(err.kind, FieldErrorKind::FeatureDisabled);
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        let flags = beta();
        for ty in all_types() {
            let result = TaskResult::new("digest").with_type(ty);
            assert_eq!(result.validate(&flags), result.validate(&flags));
        }
    }

    #[test]
    fn test_description_is_not_validated() {
        let result = TaskResult::new("digest").with_description("   -- anything goes $$ ");
        assert_valid(&result.validate(&beta()));
    }

    #[test]
    fn test_validate_results_all_valid() {
        let results = vec![
            TaskResult::new("digest"),
            TaskResult::new("url").with_type(ResultsType::String),
        ];
        assert!(validate_results(&results, &beta()).is_ok());
    }

    #[test]
    fn test_validate_results_empty() {
        assert!(validate_results(&[], &beta()).is_ok());
    }

    #[test]
    fn test_validate_results_collects_paths() {
        let results = vec![
            TaskResult::new("ok"),
            TaskResult::new("-bad"),
            TaskResult::new("images").with_type(ResultsType::Array),
            TaskResult::new("count").with_type("integer"),
        ];

        let errs = validate_results(&results, &beta()).unwrap_err();
        let paths: Vec<Vec<String>> = errs.iter().map(|e| e.paths.clone()).collect();

        assert_eq!(
            paths,
            vec![
                vec!["results[1].name".to_string()],
                vec!["results[2]".to_string()],
                vec!["results[3].type".to_string()],
            ]
        );
    }

    #[test]
    fn test_validate_results_allows_duplicate_names() {
        let results = vec![TaskResult::new("digest"), TaskResult::new("digest")];
        assert!(validate_results(&results, &beta()).is_ok());
    }
}
