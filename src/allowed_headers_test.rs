use super::*;

mod list {
    use super::*;

    #[test]
    fn should_return_list_variant_when_values_provided_then_collect_values() {
        let result = AllowedHeaders::list(["Content-Type", "X-Custom"]);

        assert_eq!(
            result,
            AllowedHeaders::List(vec!["Content-Type".into(), "X-Custom".into()])
        );
    }

    #[test]
    fn should_ignore_case_duplicates_when_values_include_duplicates_then_keep_first_instance() {
        let result = AllowedHeaders::list(["X-Trace", "x-trace", " ", "X-Other"]);

        assert_eq!(
            result,
            AllowedHeaders::List(vec!["X-Trace".into(), "X-Other".into()])
        );
    }

    #[test]
    fn should_return_any_when_only_wildcard_provided() {
        let result = AllowedHeaders::list(["*"]);

        assert_eq!(result, AllowedHeaders::Any);
    }

    #[test]
    fn should_keep_wildcard_entry_when_mixed_with_names() {
        let result = AllowedHeaders::list(["*", "X-Test"]);

        assert_eq!(
            result,
            AllowedHeaders::List(vec!["*".into(), "X-Test".into()])
        );
    }
}

fn rules(allowed: AllowedHeaders) -> HeaderRules {
    HeaderRules::new(&allowed).expect("valid allowed headers")
}

mod permitted {
    use super::*;

    #[test]
    fn should_keep_every_header_when_any() {
        let permitted = rules(AllowedHeaders::any()).permitted("X-One, X-Two");

        assert_eq!(permitted, vec!["X-One", "X-Two"]);
    }

    #[test]
    fn should_drop_unlisted_headers_when_list() {
        let allowed = rules(AllowedHeaders::list(["X-Example-Header-A", "X-Example-Header-B"]));

        let permitted = allowed.permitted("x-example-header-a, X-Not-Found-Header");

        assert_eq!(permitted, vec!["x-example-header-a"]);
    }

    #[test]
    fn should_skip_blank_entries_when_request_value_has_empty_items() {
        let permitted = rules(AllowedHeaders::any()).permitted("X-A,, ,X-B");

        assert_eq!(permitted, vec!["X-A", "X-B"]);
    }

    #[test]
    fn should_match_expression_entries_against_whole_name_ignoring_case() {
        let allowed = rules(AllowedHeaders::list(["X-Custom-.*", "Content-Type"]));

        let permitted = allowed.permitted("x-custom-trace, Content-Type, Y-X-Custom-A");

        assert_eq!(permitted, vec!["x-custom-trace", "Content-Type"]);
    }
}

mod new {
    use super::*;

    #[test]
    fn should_report_entry_when_expression_is_invalid() {
        let err = HeaderRules::new(&AllowedHeaders::list(["X-(broken*"])).unwrap_err();

        assert_eq!(err.pattern, "X-(broken*");
        assert!(matches!(err.source, PatternError::Build(_)));
        assert_eq!(
            err.to_string(),
            "invalid allowed header pattern 'X-(broken*'"
        );
    }
}

mod header_value {
    use super::*;

    #[test]
    fn should_sort_permitted_headers_when_several_match() {
        let allowed = rules(AllowedHeaders::list(["X-Example-Header-B", "X-Example-Header-A"]));

        let value = allowed.header_value("X-Example-Header-B, X-Example-Header-A");

        assert_eq!(
            value.as_deref(),
            Some("X-Example-Header-A, X-Example-Header-B")
        );
    }

    #[test]
    fn should_return_none_when_nothing_permitted() {
        let allowed = rules(AllowedHeaders::list(["X-Example-Header-A"]));

        let value = allowed.header_value("X-Not-Found-Header");

        assert_eq!(value, None);
    }

    #[test]
    fn should_return_none_when_request_value_empty() {
        let value = rules(AllowedHeaders::any()).header_value("");

        assert_eq!(value, None);
    }
}

mod deserialize {
    use super::*;

    #[test]
    fn should_build_any_when_config_value_is_wildcard_string() {
        let allowed: AllowedHeaders = serde_json::from_str(r#""*""#).unwrap();

        assert_eq!(allowed, AllowedHeaders::Any);
    }

    #[test]
    fn should_build_list_when_config_value_is_sequence() {
        let allowed: AllowedHeaders = serde_json::from_str(r#"["X-A", "X-B"]"#).unwrap();

        assert_eq!(allowed, AllowedHeaders::list(["X-A", "X-B"]));
    }
}
