//! Diesel schema for the property address registry.

diesel::table! {
    /// Registered property addresses.
    properties (address) {
        /// Normalised street address.
        #[max_length = 255]
        address -> Varchar,
        /// Registration timestamp.
        created_at -> Timestamptz,
    }
}
