use std::sync::Arc;

use log::{debug, warn};

use crate::errors::{Error, Result};
use crate::quotes::quotes_model::{PageRequest, Quote};
use crate::quotes::quotes_traits::{QuoteRepositoryTrait, QuoteServiceTrait};
use async_trait::async_trait;

pub struct QuoteService {
    repository: Arc<dyn QuoteRepositoryTrait>,
}

impl QuoteService {
    pub fn new(repository: Arc<dyn QuoteRepositoryTrait>) -> Self {
        QuoteService { repository }
    }

    fn range_error(&self, start: i64, end: i64) -> Error {
        match self.repository.len() {
            Ok(len) => Error::Range { start, end, len },
            Err(e) => e,
        }
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    fn get_quote(&self, id: i32) -> Result<Quote> {
        self.repository.find(id)
    }

    /// Returns the quotes at positions `[start, end)` of the page window.
    ///
    /// A non-positive `per_page` yields an empty page. A window that starts
    /// before the first quote or ends past the last one is an error; the
    /// page is never truncated.
    fn get_quotes_page(&self, request: PageRequest) -> Result<Vec<Quote>> {
        let (start, end) = request.window();
        if end <= start {
            return Ok(Vec::new());
        }
        if start < 0 {
            let err = self.range_error(start, end);
            warn!("Rejected page {:?}: {}", request, err);
            return Err(err);
        }

        let (Ok(offset), Ok(limit)) = (usize::try_from(start), usize::try_from(end - start))
        else {
            return Err(self.range_error(start, end));
        };
        self.repository.list(offset, limit).inspect_err(|err| {
            warn!("Rejected page {:?}: {}", request, err);
        })
    }

    async fn create_quote(&self, text: String) -> Result<Quote> {
        let quote = self.repository.create(text).await?;
        debug!("Created quote {}", quote.id);
        Ok(quote)
    }

    async fn update_quote(&self, id: i32, text: String) -> Result<Quote> {
        let quote = self.repository.update(id, text).await?;
        debug!("Updated quote {}", quote.id);
        Ok(quote)
    }

    async fn delete_quote(&self, id: i32) -> Result<()> {
        self.repository.delete(id).await?;
        debug!("Deleted quote {}", id);
        Ok(())
    }
}
