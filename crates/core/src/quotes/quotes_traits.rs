use crate::errors::Result;
use crate::quotes::quotes_model::{PageRequest, Quote};
use async_trait::async_trait;

/// Trait for quote repository operations.
///
/// Implementations own the collection and the id counter. Positions used by
/// [`list`](QuoteRepositoryTrait::list) refer to insertion order, not ids.
#[async_trait]
pub trait QuoteRepositoryTrait: Send + Sync {
    /// Linear scan; if the id occurs more than once the last match is returned.
    fn find(&self, id: i32) -> Result<Quote>;
    /// Contiguous slice `[offset, offset + limit)`. Fails with `Error::Range`
    /// instead of truncating when the window runs past the end.
    fn list(&self, offset: usize, limit: usize) -> Result<Vec<Quote>>;
    fn len(&self) -> Result<usize>;
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
    async fn create(&self, text: String) -> Result<Quote>;
    async fn update(&self, id: i32, text: String) -> Result<Quote>;
    async fn delete(&self, id: i32) -> Result<()>;
}

/// Trait for quote service operations
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    fn get_quote(&self, id: i32) -> Result<Quote>;
    fn get_quotes_page(&self, request: PageRequest) -> Result<Vec<Quote>>;
    async fn create_quote(&self, text: String) -> Result<Quote>;
    async fn update_quote(&self, id: i32, text: String) -> Result<Quote>;
    async fn delete_quote(&self, id: i32) -> Result<()>;
}
