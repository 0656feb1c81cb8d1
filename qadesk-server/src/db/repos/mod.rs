//! Repository implementations for PostgreSQL access
//!
//! Each repository follows these patterns:
//! - Writes use INSERT ... RETURNING (one round-trip, no re-read)
//! - Constraint violations come back as `StoreError`, never pre-checked
//! - Lists resolve related rows with a JOIN (no N+1)

pub mod users;
pub mod items;

pub use users::UserRepo;
pub use items::ItemRepo;
