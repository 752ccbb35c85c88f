//! Projects Module
//!
//! Portfolio projects, readable by everyone and writable by their owner.

pub mod handlers;

pub mod service;
