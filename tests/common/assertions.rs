//! Custom assertion macros
//!
//! Envelope-aware assertions for API responses, with descriptive failure
//! output.

/// Assert the status and the `success` flag of a `TestResponse` together
macro_rules! assert_status {
    ($response:expr, $status:expr) => {{
        let response = &$response;
        assert_eq!(
            response.status, $status,
            "unexpected status, body: {}",
            response.body
        );
        assert_eq!(
            response.body["success"],
            serde_json::Value::Bool($status.is_success()),
            "success flag does not match status, body: {}",
            response.body
        );
    }};
}

/// Assert a failed response carrying exactly the given message
macro_rules! assert_failure {
    ($response:expr, $status:expr, $message:expr) => {{
        let response = &$response;
        assert_status!(response, $status);
        assert_eq!(response.body["message"], $message, "body: {}", response.body);
        assert!(
            response.body.get("data").is_none(),
            "failure carried data: {}",
            response.body
        );
    }};
}

/// Assert that a string contains a substring
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
