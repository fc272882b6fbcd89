//! Backend test support utilities
//!
//! Shared by the backend's unit and integration tests: one-time logging
//! setup and assertions on the HTTP contract every response must honor.

pub mod logging;
pub mod responses;
