use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::AppConfig;
use crate::database;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let pool = database::create_pool(&self.config.server.database_path)?;
        let state = Arc::new(AppState::new(pool, self.config.clone()));

        let app = create_router(state).layer(ServiceBuilder::new().layer(CorsLayer::permissive()));

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!(
            "Server listening on {} (strategy {:?}, database {})",
            addr, self.config.delivery.strategy, self.config.server.database_path
        );

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
