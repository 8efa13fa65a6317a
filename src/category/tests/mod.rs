//! Unit and behaviour tests for the category slice.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]
