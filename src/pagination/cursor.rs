use super::config::PaginationConfig;
use super::page::Page;
use crate::errors::{PaginationError, Result};

/// A validated page request: zero-based index and a positive page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_index: usize,
    page_size: usize,
    offset: usize,
}

impl PageRequest {
    /// Rejects negative indices, non-positive sizes and windows whose offset
    /// or over-fetch limit does not fit in `usize`.
    pub fn new(page_index: i64, page_size: i64) -> Result<Self> {
        let malformed = || PaginationError::MalformedPageIndex {
            page_index,
            page_size,
        };

        if page_index < 0 || page_size <= 0 {
            return Err(malformed());
        }

        let index = usize::try_from(page_index).map_err(|_| malformed())?;
        let size = usize::try_from(page_size).map_err(|_| malformed())?;
        let offset = index.checked_mul(size).ok_or_else(malformed)?;
        size.checked_add(1).ok_or_else(malformed)?;
        index.checked_add(1).ok_or_else(malformed)?;

        Ok(Self {
            page_index: index,
            page_size: size,
            offset,
        })
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// One row more than the page holds; the extra row only signals that a
    /// next page exists.
    pub fn limit(&self) -> usize {
        self.page_size + 1
    }
}

/// Turns a page request into a query window and detects the next page from
/// an over-fetched batch, with no count query.
#[derive(Debug, Clone, Copy)]
pub struct PageCursor {
    request: PageRequest,
}

impl PageCursor {
    pub fn new(request: PageRequest) -> Self {
        Self { request }
    }

    /// Build a cursor from optional raw query values.
    pub fn from_params(
        page: Option<i64>,
        page_size: Option<i64>,
        config: &PaginationConfig,
    ) -> Result<Self> {
        let size = config.resolve_page_size(page_size);
        let request = PageRequest::new(page.unwrap_or(0), size)?;
        Ok(Self::new(request))
    }

    pub fn request(&self) -> PageRequest {
        self.request
    }

    /// Run `fetch(offset, limit)` once and interpret its result.
    ///
    /// Fetch errors are returned as they are, without retry.
    pub fn fetch_page<T, F>(&self, fetch: F) -> Result<Page<T>>
    where
        F: FnOnce(usize, usize) -> anyhow::Result<Vec<T>>,
    {
        let rows = fetch(self.request.offset(), self.request.limit())?;
        Ok(self.settle(rows))
    }

    /// Interpret a batch fetched with this cursor's window.
    pub fn settle<T>(&self, mut rows: Vec<T>) -> Page<T> {
        let page_size = self.request.page_size();
        let next_page_index = if rows.len() > page_size {
            rows.truncate(page_size);
            Some(self.request.page_index() + 1)
        } else {
            None
        };

        Page::new(rows, self.request.page_index(), next_page_index)
    }
}
