//! Tagged optional values for sparse update requests.
//!
//! A plain `Option` cannot distinguish "leave this field alone" from "clear
//! this field", which forces nullable fields into ambiguous conventions.
//! [`FieldUpdate`] makes the three cases explicit: a field absent from a
//! request is [`FieldUpdate::Unset`], an explicit `null` is
//! [`FieldUpdate::Clear`], and a value is [`FieldUpdate::Set`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sparse-update state of a single nullable field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// The request did not mention the field; keep the current value.
    #[default]
    Unset,
    /// The request explicitly cleared the field.
    Clear,
    /// The request supplied a replacement value.
    Set(T),
}

impl<T> FieldUpdate<T> {
    /// Returns `true` when the field was not mentioned in the request.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Applies the update to the current value of the field.
    ///
    /// `Unset` keeps `current`, `Clear` yields `None`, and `Set` replaces
    /// the value.
    #[must_use]
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Self::Unset => current,
            Self::Clear => None,
            Self::Set(value) => Some(value),
        }
    }
}

impl<'de, T> Deserialize<'de> for FieldUpdate<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the field is present; serde field defaults map
        // absence to `Unset`.
        Option::<T>::deserialize(deserializer).map(|value| value.map_or(Self::Clear, Self::Set))
    }
}

impl<T> Serialize for FieldUpdate<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Unset | Self::Clear => serializer.serialize_none(),
            Self::Set(value) => serializer.serialize_some(value),
        }
    }
}
