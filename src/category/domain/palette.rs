//! Fixed colour palette for category assignment.

use super::CategoryDomainError;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Colour returned when a palette is somehow empty at pick time.
const FALLBACK_COLOR: &str = "#000000";

/// The fixed set of acceptable category colours.
///
/// Every stored category colour is a member of the palette the service was
/// constructed with; this is the invariant [`Palette::pick`] and the patch
/// validation together maintain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette(Vec<String>);

impl Palette {
    /// Creates a palette from the given colours.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryDomainError::EmptyPalette`] when no colours are
    /// supplied.
    pub fn new(colors: Vec<String>) -> Result<Self, CategoryDomainError> {
        if colors.is_empty() {
            return Err(CategoryDomainError::EmptyPalette);
        }
        Ok(Self(colors))
    }

    /// Returns `true` when the colour is a palette member (exact match).
    #[must_use]
    pub fn contains(&self, color: &str) -> bool {
        self.0.iter().any(|member| member == color)
    }

    /// Picks a uniformly random palette member.
    #[must_use]
    pub fn pick(&self) -> String {
        self.0
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_else(|| FALLBACK_COLOR.to_owned())
    }

    /// Returns the palette members in declaration order.
    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.0
    }

    /// Builds the rejection error for a colour outside the palette.
    #[must_use]
    pub fn invalid_color(&self, color: impl Into<String>) -> CategoryDomainError {
        CategoryDomainError::InvalidColor {
            color: color.into(),
            palette: self.0.join(", "),
        }
    }
}
