//! Quote domain models.

use serde::Deserialize;

use crate::constants::{DEFAULT_PAGE, DEFAULT_PER_PAGE};

/// Domain model representing a stored quote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub id: i32,
    pub text: String,
}

impl Quote {
    pub fn new(id: i32, text: impl Into<String>) -> Self {
        Quote {
            id,
            text: text.into(),
        }
    }
}

/// A 1-based page request over the collection's insertion order.
///
/// Missing fields deserialize to [`DEFAULT_PAGE`] and [`DEFAULT_PER_PAGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    pub page: i32,
    pub per_page: i32,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    pub fn new(page: i32, per_page: i32) -> Self {
        PageRequest { page, per_page }
    }

    /// Positional window `[start, end)` covered by this page.
    ///
    /// Computed as `start = page * per_page - per_page`, `end = start + per_page`
    /// in 64-bit arithmetic, so no `i32` input can overflow. The window may be
    /// negative or inverted; callers decide what that means.
    pub fn window(&self) -> (i64, i64) {
        let per_page = i64::from(self.per_page);
        let start = i64::from(self.page) * per_page - per_page;
        (start, start + per_page)
    }
}
