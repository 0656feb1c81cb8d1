//! Domain models
//!
//! Records returned by the store, the inputs used to create them, and the
//! few request values that are validated before reaching the store.

pub mod validation;
pub mod email;
pub mod user;
pub mod item;

pub use validation::ValidationError;
pub use email::EmailAddress;
pub use user::{NewUser, User};
pub use item::{Item, NewItem};
