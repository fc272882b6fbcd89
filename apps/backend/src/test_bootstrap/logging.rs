#![cfg(test)]

//! Unit-test logging, shared with the integration test binaries.
//!
//! Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.

pub fn init() {
    backend_test_support::logging::init();
}
