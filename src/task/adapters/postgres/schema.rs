//! Diesel schema for task persistence.

diesel::table! {
    /// Task records with status, due date, and optional category reference.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> BigInt,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Lifecycle status.
        #[max_length = 10]
        status -> Varchar,
        /// Optional due date.
        due_at -> Nullable<Timestamptz>,
        /// Optional category reference; nullified by the store when the
        /// category is deleted.
        category_id -> Nullable<BigInt>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
    }
}
