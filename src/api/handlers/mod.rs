use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use log::error;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::database::{DbPool, PlayerFilter, SortColumn, SortOrder};
use crate::delivery::{RequestMode, Strategy, STREAM_MIME};
use crate::errors::PaginationError;

pub mod players;

pub struct AppState {
    pub pool: DbPool,
    pub config: AppConfig,
    pub strategy: Strategy,
}

impl AppState {
    pub fn new(pool: DbPool, config: AppConfig) -> Self {
        let strategy = config.delivery.strategy.strategy();
        Self {
            pool,
            config,
            strategy,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayerParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub filter: Option<String>,
    pub raw: Option<String>,
    pub format: Option<String>,
}

impl PlayerParams {
    pub fn player_filter(&self) -> PlayerFilter {
        PlayerFilter {
            name_contains: self.filter.clone().filter(|f| !f.trim().is_empty()),
            sort_by: SortColumn::parse(self.sort_by.as_deref()),
            sort_order: SortOrder::parse(self.order.as_deref()),
        }
    }

    /// Stream when asked by format or Accept header, raw when asked by flag
    /// or when the request comes from a frame.
    pub fn request_mode(&self, headers: &HeaderMap) -> RequestMode {
        let accepts_stream = headers
            .get(header::ACCEPT)
            .and_then(|h| h.to_str().ok())
            .is_some_and(|accept| accept.contains(STREAM_MIME));

        if self.format.as_deref() == Some("stream") || accepts_stream {
            RequestMode::Stream
        } else if self.raw.as_deref().is_some_and(is_truthy) || headers.contains_key("turbo-frame") {
            RequestMode::Raw
        } else {
            RequestMode::Full
        }
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(value, "0" | "false" | "")
}

/// Maps the pagination error taxonomy onto HTTP statuses.
pub struct ApiError(PaginationError);

impl From<PaginationError> for ApiError {
    fn from(err: PaginationError) -> Self {
        Self(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self(PaginationError::Fetch(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            err @ PaginationError::MalformedPageIndex { .. } => {
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            }
            PaginationError::Configuration(message) => {
                error!("Delivery configuration error: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, "Pagination Error").into_response()
            }
            PaginationError::Fetch(e) => {
                error!("Query failed: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response()
            }
        }
    }
}
