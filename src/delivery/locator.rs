use super::RequestMode;
use crate::errors::{PaginationError, Result};
use crate::pagination::{append_param, build_paginated_url};

/// Query keys owned by the pagination layer; never carried over from the
/// current request.
const RESERVED_PARAMS: [&str; 3] = ["page", "raw", "format"];

/// Builds the address of another page of the current listing.
pub trait PageLocator {
    fn locate(&self, page_index: usize, mode: RequestMode) -> Result<String>;
}

impl<F> PageLocator for F
where
    F: Fn(usize, RequestMode) -> Result<String>,
{
    fn locate(&self, page_index: usize, mode: RequestMode) -> Result<String> {
        self(page_index, mode)
    }
}

/// Locator that rebuilds the current request's URL: same path, same query
/// parameters (filters, sort, page size), a different page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryLocator {
    base_path: String,
    params: Vec<(String, String)>,
}

impl QueryLocator {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            params: Vec::new(),
        }
    }

    /// Keeps every pair except the reserved pagination keys, in order.
    pub fn from_query<I, K, V>(base_path: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .fold(Self::new(base_path), |locator, (k, v)| locator.with_param(k, v))
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        if !RESERVED_PARAMS.contains(&key.as_str()) {
            self.params.push((key, value.into()));
        }
        self
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

impl PageLocator for QueryLocator {
    fn locate(&self, page_index: usize, mode: RequestMode) -> Result<String> {
        if self.base_path.is_empty() {
            return Err(PaginationError::configuration(
                "next-page locator has no base path",
            ));
        }

        let with_params = self
            .params
            .iter()
            .fold(self.base_path.clone(), |url, (k, v)| append_param(&url, k, v));
        let url = build_paginated_url(&with_params, page_index);

        Ok(match mode {
            RequestMode::Full => url,
            RequestMode::Raw => append_param(&url, "raw", "1"),
            RequestMode::Stream => append_param(&url, "format", "stream"),
        })
    }
}
