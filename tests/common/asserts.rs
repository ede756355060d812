use super::headers::{header_value, vary_values};
use cors_origin_rs::constants::header;
use cors_origin_rs::{CorsResult, Headers};
use std::collections::HashSet;

pub fn assert_allow_origin(result: &CorsResult, expected: &str) {
    assert_eq!(
        header_value(&result.headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(expected),
        "unexpected allow-origin for decision {:?}",
        result.decision
    );
}

pub fn assert_no_cors(result: &CorsResult) {
    assert!(
        result.headers.is_empty(),
        "expected no CORS headers, got {:?}",
        result.headers
    );
}

pub fn assert_vary_eq<const N: usize>(headers: &Headers, expected: [&str; N]) {
    let expected: HashSet<String> = expected.iter().map(|value| value.to_string()).collect();
    assert_eq!(vary_values(headers), expected);
}
