//! Category management: CRUD with palette-constrained colours.
//!
//! Categories label tasks and carry a display colour drawn from a fixed
//! palette. Creation assigns a random palette member; updates may change
//! the colour but only to another palette member. The module follows
//! hexagonal architecture:
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
