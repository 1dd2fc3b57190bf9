use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    players::{api_players, index, list_players, list_players_frames, list_players_stream},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/players", get(list_players))
        .route("/players/frames", get(list_players_frames))
        .route("/players/stream", get(list_players_stream))
        .route("/api/players", get(api_players))
        .with_state(state)
}
