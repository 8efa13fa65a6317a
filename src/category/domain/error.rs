//! Error types for category domain validation.

use thiserror::Error;

/// Errors returned while constructing or mutating category values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CategoryDomainError {
    /// The category name is empty after trimming.
    #[error("category name must not be empty")]
    EmptyName,

    /// The requested colour is not a member of the configured palette.
    #[error("invalid color '{color}': must be one of [{palette}]")]
    InvalidColor {
        /// Rejected colour value.
        color: String,
        /// Comma-separated palette membership, for the caller's benefit.
        palette: String,
    },

    /// A palette must offer at least one colour to draw from.
    #[error("color palette must contain at least one color")]
    EmptyPalette,
}
