use anyhow::Result;

use super::listing::{render_listing, ListingRequest};
use crate::config::{AppConfig, StrategyKind};
use crate::database::{self, PlayerFilter};
use crate::delivery::{DeliveryInstruction, QueryLocator, RequestMode};

/// Renders a single delivery outside the server, for inspecting markup.
pub struct PreviewService {
    config: AppConfig,
}

impl PreviewService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn render(
        &self,
        page: i64,
        page_size: Option<i64>,
        strategy: StrategyKind,
        mode: RequestMode,
    ) -> Result<DeliveryInstruction> {
        let pool = database::create_pool(&self.config.server.database_path)?;
        let conn = database::get_connection(&pool)?;

        let mut locator = QueryLocator::new("/players");
        if let Some(size) = page_size {
            locator = locator.with_param("page_size", size.to_string());
        }

        let request = ListingRequest {
            page: Some(page),
            page_size,
            filter: PlayerFilter::default(),
            mode,
            locator,
        };

        Ok(render_listing(&conn, &self.config, strategy.strategy(), &request)?)
    }
}
