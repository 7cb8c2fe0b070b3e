//! Diesel schema for audit log persistence.

diesel::table! {
    /// Append-only audit records of task mutations.
    audit_logs (id) {
        /// Entry identifier.
        id -> Uuid,
        /// Canonical action name.
        #[max_length = 50]
        action -> Varchar,
        /// Affected task; not a foreign key.
        task_id -> Uuid,
        /// Changed fields as a JSON object.
        change_set -> Jsonb,
        /// Recording timestamp.
        recorded_at -> Timestamptz,
    }
}
