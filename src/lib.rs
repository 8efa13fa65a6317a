//! Taskdeck: task and category management core.
//!
//! This crate provides the domain model, persistence ports, storage
//! adapters, and application services for a small task manager: tasks with a
//! lifecycle status, optional due date, and an optional category reference,
//! plus categories carrying a palette-assigned colour. List operations
//! share a common pagination/search/sort engine.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! HTTP transport and response envelopes are deliberately out of scope;
//! services expose the operations a handler layer would bind to.
//!
//! # Modules
//!
//! - [`task`]: Task CRUD, status lifecycle, and filtered listing
//! - [`category`]: Category CRUD with palette-constrained colours
//! - [`listing`]: Shared pagination, search, and sort primitives
//! - [`patch`]: Tagged optional values for sparse updates
//! - [`config`]: Environment-driven database configuration

pub mod category;
pub mod config;
pub mod listing;
pub mod patch;
pub mod task;

#[cfg(test)]
pub(crate) mod testing;
