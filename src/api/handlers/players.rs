use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Json, Redirect, Response},
};
use std::sync::Arc;

use super::{ApiError, AppState, PlayerParams};
use crate::api::models::PlayerListItem;
use crate::config::StrategyKind;
use crate::database;
use crate::delivery::{DeliveryInstruction, QueryLocator, Strategy};
use crate::pagination::{Page, PageCursor};
use crate::services::listing::{load_page, render_listing, ListingRequest};

type QueryPairs = Query<Vec<(String, String)>>;

pub async fn index() -> Redirect {
    Redirect::to("/players")
}

/// Listing with the strategy chosen at startup.
pub async fn list_players(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<PlayerParams>,
    Query(pairs): QueryPairs,
) -> Result<Response, ApiError> {
    let strategy = state.strategy;
    listing_response(state, strategy, "/players", &headers, params, pairs).await
}

pub async fn list_players_frames(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<PlayerParams>,
    Query(pairs): QueryPairs,
) -> Result<Response, ApiError> {
    let strategy = StrategyKind::Frame.strategy();
    listing_response(state, strategy, "/players/frames", &headers, params, pairs).await
}

pub async fn list_players_stream(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<PlayerParams>,
    Query(pairs): QueryPairs,
) -> Result<Response, ApiError> {
    let strategy = StrategyKind::Stream.strategy();
    listing_response(state, strategy, "/players/stream", &headers, params, pairs).await
}

/// JSON page: items plus the next page index, never a total count.
pub async fn api_players(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PlayerParams>,
) -> Result<Json<Page<PlayerListItem>>, ApiError> {
    let filter = params.player_filter();

    let page = tokio::task::spawn_blocking(move || -> Result<Page<PlayerListItem>, ApiError> {
        let cursor = PageCursor::from_params(params.page, params.page_size, &state.config.pagination)?;
        let conn = database::get_connection(&state.pool)?;
        Ok(load_page(&conn, &cursor, &filter)?)
    })
    .await
    .map_err(|e| ApiError::from(anyhow::Error::new(e)))??;

    Ok(Json(page))
}

async fn listing_response(
    state: Arc<AppState>,
    strategy: Strategy,
    base_path: &str,
    headers: &HeaderMap,
    params: PlayerParams,
    pairs: Vec<(String, String)>,
) -> Result<Response, ApiError> {
    let request = ListingRequest {
        page: params.page,
        page_size: params.page_size,
        filter: params.player_filter(),
        mode: params.request_mode(headers),
        locator: QueryLocator::from_query(base_path, pairs),
    };

    let instruction = tokio::task::spawn_blocking(move || -> Result<DeliveryInstruction, ApiError> {
        let conn = database::get_connection(&state.pool)?;
        Ok(render_listing(&conn, &state.config, strategy, &request)?)
    })
    .await
    .map_err(|e| ApiError::from(anyhow::Error::new(e)))??;

    Ok((
        [(header::CONTENT_TYPE, instruction.content_type())],
        instruction.body_fragment,
    )
        .into_response())
}
