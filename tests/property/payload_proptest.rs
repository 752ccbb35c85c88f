//! Property-based tests for request payloads and the response envelope

use proptest::prelude::*;
use uuid::Uuid;

use portfolio_api::shared::models::{ContactRequest, CreateBlogPostRequest};
use portfolio_api::shared::validation::{is_present, require_all};
use portfolio_api::shared::{ApiResponse, SharedError};

proptest! {
    #[test]
    fn test_whitespace_is_never_present(blank in "[ \t\n]{0,12}") {
        prop_assert!(!is_present(Some(blank.as_str())));
        let result = require_all(&[("title", Some(blank.as_str()))]);
        prop_assert_eq!(result, Err(SharedError::missing(vec!["title"])));
    }

    #[test]
    fn test_post_author_is_always_the_caller(
        title in "[a-zA-Z][a-zA-Z ]{0,30}",
        content in "[a-zA-Z0-9][a-zA-Z0-9 ]{0,59}",
    ) {
        let author = Uuid::new_v4();
        let request = CreateBlogPostRequest {
            title: Some(title.clone()),
            content: Some(content),
            ..Default::default()
        };
        let new_post = request.into_new(author).unwrap();
        prop_assert_eq!(new_post.author_id, author);
        prop_assert_eq!(new_post.title, title.trim());
        prop_assert!(new_post.published);
    }

    #[test]
    fn test_contact_accepts_well_formed_email(
        local in "[a-z0-9._]{1,12}",
        domain in "[a-z0-9]{1,12}",
        tld in "[a-z]{2,6}",
    ) {
        let request = ContactRequest {
            name: Some("Grace".to_string()),
            email: Some(format!("{}@{}.{}", local, domain, tld)),
            message: Some("Hello".to_string()),
        };
        prop_assert!(request.into_new().is_ok());
    }

    #[test]
    fn test_contact_rejects_email_without_at(email in "[a-z0-9.]{1,20}") {
        let request = ContactRequest {
            name: Some("Grace".to_string()),
            email: Some(email),
            message: Some("Hello".to_string()),
        };
        let is_email_error = matches!(
            request.into_new(),
            Err(SharedError::ValidationError { ref field, .. }) if field == "email"
        );
        prop_assert!(is_email_error);
    }

    #[test]
    fn test_list_count_matches_length(items in prop::collection::vec(any::<u32>(), 0..40)) {
        let len = items.len();
        let value = serde_json::to_value(ApiResponse::list(items)).unwrap();
        prop_assert_eq!(value["count"].as_u64(), Some(len as u64));
        prop_assert_eq!(value["data"].as_array().map(Vec::len), Some(len));
        prop_assert_eq!(&value["success"], &serde_json::Value::Bool(true));
    }
}
