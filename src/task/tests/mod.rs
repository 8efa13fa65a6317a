//! Unit and behaviour tests for the task slice.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]

mod query_tests;
mod service_tests;
