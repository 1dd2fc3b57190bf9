use serde::Serialize;

/// One bounded window of results plus whether more results follow.
///
/// Built by [`PageCursor`](super::PageCursor) from an over-fetched batch and
/// never modified afterwards. Page indices are zero-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    items: Vec<T>,
    #[serde(rename = "page")]
    page_index: usize,
    #[serde(rename = "nextPage")]
    next_page_index: Option<usize>,
}

impl<T> Page<T> {
    pub(crate) fn new(items: Vec<T>, page_index: usize, next_page_index: Option<usize>) -> Self {
        Self {
            items,
            page_index,
            next_page_index,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn next_page_index(&self) -> Option<usize> {
        self.next_page_index
    }

    pub fn has_next(&self) -> bool {
        self.next_page_index.is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Convert the items while keeping the page indices.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page_index: self.page_index,
            next_page_index: self.next_page_index,
        }
    }
}
