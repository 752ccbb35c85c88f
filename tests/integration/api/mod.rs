//! API integration tests
//!
//! Integration tests for all API endpoints

mod auth_test;
mod blog_test;
mod contact_test;
