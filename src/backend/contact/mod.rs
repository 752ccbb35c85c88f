//! Contact Module
//!
//! Public contact form submission and the protected inbox listing.

pub mod handlers;

pub mod service;
