//! Quotes module - domain models, services, and traits.

mod quotes_model;
mod quotes_service;
mod quotes_traits;

pub use quotes_model::{PageRequest, Quote};
pub use quotes_service::QuoteService;
pub use quotes_traits::{QuoteRepositoryTrait, QuoteServiceTrait};
