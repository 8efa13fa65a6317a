//! Storage adapters implementing the task ports.

pub mod memory;
pub mod postgres;
