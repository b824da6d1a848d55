//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! its name, phone numbers, and birthday. Each value object validates its
//! input at construction time, so an invalid value can never be attached to
//! a record.

pub mod birthday;
pub mod contact_name;
pub mod errors;
pub mod phone;

pub use birthday::Birthday;
pub use contact_name::ContactName;
pub use errors::{ValidationError, ValidationResult};
pub use phone::PhoneNumber;
