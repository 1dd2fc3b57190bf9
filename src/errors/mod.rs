use thiserror::Error;

/// Failures surfaced by the page cursor and the delivery strategies.
///
/// Nothing here is recovered locally: every variant reaches the caller, which
/// decides what the user sees.
#[derive(Debug, Error)]
pub enum PaginationError {
    #[error("malformed page request: page index {page_index}, page size {page_size}")]
    MalformedPageIndex { page_index: i64, page_size: i64 },

    #[error("cannot build next-page trigger: {0}")]
    Configuration(String),

    #[error(transparent)]
    Fetch(#[from] anyhow::Error),
}

impl PaginationError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MalformedPageIndex { .. })
    }
}

pub type Result<T, E = PaginationError> = std::result::Result<T, E>;
