//! Storage adapters implementing the category ports.

pub mod memory;
pub mod postgres;
