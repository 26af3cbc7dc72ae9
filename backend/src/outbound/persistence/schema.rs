//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Support tickets.
    ///
    /// `pk` is a storage-internal surrogate key and is never exposed; callers
    /// address tickets by `public_id`.
    tickets (pk) {
        /// Surrogate primary key.
        pk -> Int8,
        /// Public identifier (unique).
        public_id -> Varchar,
        /// Trimmed title (max 200 characters).
        title -> Varchar,
        /// Trimmed description (max 5000 characters), empty by default.
        description -> Text,
        /// One of `open`, `in-progress`, `closed`.
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last persistence timestamp.
        updated_at -> Timestamptz,
    }
}
