//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Sanitised title.
        #[max_length = 100]
        title -> Varchar,
        /// Sanitised description.
        #[max_length = 500]
        description -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
