//! Diesel schema for inspection task persistence.

diesel::table! {
    /// Inspection task records.
    inspection_tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Registered property address.
        #[max_length = 255]
        address -> Varchar,
        /// Inspection type (`routine`, `move-in`, `move-out`).
        #[max_length = 20]
        inspection_type -> Varchar,
        /// Tenant phone number.
        #[max_length = 32]
        phone -> Nullable<Varchar>,
        /// Tenant email address.
        #[max_length = 255]
        email -> Nullable<Varchar>,
        /// Arranged visit time.
        scheduled_at -> Nullable<Timestamptz>,
        /// Workflow status.
        #[max_length = 50]
        status -> Varchar,
        /// Free-text notes.
        notes -> Nullable<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
