//! Task management: CRUD, status lifecycle, and filtered listing.
//!
//! Tasks carry a three-state status (`Pending`, `Doing`, `Done`), an
//! optional due date, and an optional reference to a category. List
//! operations support substring search, an allow-listed sort, a status
//! filter, and pagination through the shared [`crate::listing`] engine.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
