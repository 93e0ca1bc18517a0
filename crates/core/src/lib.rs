//! Quotebook Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the quote store. It is
//! storage-agnostic and defines the repository trait that is implemented
//! by the `storage-memory` crate.

pub mod constants;
pub mod errors;
pub mod quotes;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
