//! In-memory storage implementation for Quotebook.
//!
//! Implements the repository traits defined in `quotebook-core`. State lives
//! for the lifetime of the process; nothing is written to disk.
//!
//! ```text
//! core (domain)
//!       │
//!       ▼
//! storage-memory (this crate)
//!       │
//!       ▼
//! Mutex<QuoteCollection>
//! ```

pub mod errors;

// Repository implementations
pub mod quotes;
