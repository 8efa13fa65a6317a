//! Diesel schema for category persistence.

diesel::table! {
    /// Category records with palette-assigned colours.
    categories (id) {
        /// Store-assigned category identifier.
        id -> BigInt,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Palette colour in `#RRGGBB` form.
        #[max_length = 7]
        color -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
