use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use log::debug;
use quotebook_core::errors::Error;
use quotebook_core::quotes::{Quote, QuoteRepositoryTrait};
use quotebook_core::Result;

use super::seed::seed_quotes;
use crate::errors::StorageError;

/// Ordered quotes plus the id that the next create will receive.
#[derive(Debug)]
struct QuoteCollection {
    quotes: Vec<Quote>,
    next_id: i32,
}

impl QuoteCollection {
    fn position_of(&self, id: i32) -> Option<usize> {
        // Plain scan: a later duplicate overrides an earlier one.
        let mut found = None;
        for (index, quote) in self.quotes.iter().enumerate() {
            if quote.id == id {
                found = Some(index);
            }
        }
        found
    }
}

/// Process-lifetime quote store. Every operation takes the same lock.
#[derive(Debug)]
pub struct QuoteRepository {
    collection: Mutex<QuoteCollection>,
}

impl QuoteRepository {
    /// Builds a store holding `quotes`; new ids start at `quotes.len() + 1`.
    pub fn new(quotes: Vec<Quote>) -> Result<Self> {
        let next_id = i32::try_from(quotes.len())
            .ok()
            .and_then(|len| len.checked_add(1))
            .ok_or(StorageError::IdsExhausted)?;
        Ok(QuoteRepository {
            collection: Mutex::new(QuoteCollection { quotes, next_id }),
        })
    }

    /// Store holding the five seed quotes, ids 1 through 5.
    pub fn seeded() -> Result<Self> {
        Self::new(seed_quotes())
    }

    fn lock(&self) -> std::result::Result<MutexGuard<'_, QuoteCollection>, StorageError> {
        Ok(self.collection.lock()?)
    }
}

#[async_trait]
impl QuoteRepositoryTrait for QuoteRepository {
    fn find(&self, id: i32) -> Result<Quote> {
        let collection = self.lock()?;
        collection
            .position_of(id)
            .map(|index| collection.quotes[index].clone())
            .ok_or(Error::NotFound(id))
    }

    fn list(&self, offset: usize, limit: usize) -> Result<Vec<Quote>> {
        let collection = self.lock()?;
        let len = collection.quotes.len();
        offset
            .checked_add(limit)
            .and_then(|end| collection.quotes.get(offset..end))
            .map(<[Quote]>::to_vec)
            .ok_or(Error::Range {
                start: offset as i64,
                end: offset as i64 + limit as i64,
                len,
            })
    }

    fn len(&self) -> Result<usize> {
        Ok(self.lock()?.quotes.len())
    }

    async fn create(&self, text: String) -> Result<Quote> {
        let mut collection = self.lock()?;
        let id = collection.next_id;
        collection.next_id = id.checked_add(1).ok_or(StorageError::IdsExhausted)?;
        let quote = Quote::new(id, text);
        collection.quotes.push(quote.clone());
        debug!("Stored quote {} ({} total)", id, collection.quotes.len());
        Ok(quote)
    }

    async fn update(&self, id: i32, text: String) -> Result<Quote> {
        let mut collection = self.lock()?;
        let index = collection.position_of(id).ok_or(Error::NotFound(id))?;
        let quote = &mut collection.quotes[index];
        quote.text = text;
        Ok(quote.clone())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let mut collection = self.lock()?;
        let before = collection.quotes.len();
        collection.quotes.retain(|q| q.id != id);
        let removed = before - collection.quotes.len();
        if removed == 0 {
            return Err(Error::NotFound(id));
        }
        debug!("Removed {} record(s) for quote {}", removed, id);
        Ok(())
    }
}
