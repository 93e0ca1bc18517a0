//! In-memory storage implementation for quotes.

mod repository;
mod seed;

pub use repository::QuoteRepository;
pub use seed::SEED_QUOTES;
