//! Domain model for category management.
//!
//! Categories are flat labels with a palette-constrained colour. All
//! validation and merge behaviour lives here, away from storage concerns.

mod category;
mod error;
mod ids;
mod palette;
mod query;

pub use category::{Category, CategoryPatch, NewCategory, PersistedCategoryData};
pub use error::CategoryDomainError;
pub use ids::CategoryId;
pub use palette::Palette;
pub use query::{CategoryQuery, CategorySortKey};
