use log::debug;

use crate::api::models::PlayerListItem;
use crate::config::AppConfig;
use crate::database::{self, DbConn, PlayerFilter};
use crate::delivery::{
    DeliveryContext, DeliveryInstruction, DeliveryStrategy, QueryLocator, RequestMode, Strategy,
};
use crate::errors::Result;
use crate::pagination::{Page, PageCursor};
use crate::render::{PlayerRows, RowElement};

/// One listing request with its ambient state made explicit.
#[derive(Debug, Clone)]
pub struct ListingRequest {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub filter: PlayerFilter,
    pub mode: RequestMode,
    pub locator: QueryLocator,
}

/// Fetch one page of ranked players with a single over-fetching query.
pub fn load_page(conn: &DbConn, cursor: &PageCursor, filter: &PlayerFilter) -> Result<Page<PlayerListItem>> {
    let offset = cursor.request().offset();
    let page = cursor.fetch_page(|offset, limit| database::players::list_window(conn, filter, offset, limit))?;

    let mut rank = offset;
    Ok(page.map(|row| {
        rank += 1;
        PlayerListItem::from_row(row, rank)
    }))
}

pub fn deliver_page(
    config: &AppConfig,
    strategy: Strategy,
    page: &Page<PlayerListItem>,
    mode: RequestMode,
    locator: &QueryLocator,
) -> Result<DeliveryInstruction> {
    let settings = &config.delivery;
    let renderer = PlayerRows::new(RowElement::for_mode(strategy.mode()), settings.title);
    let ctx = DeliveryContext::<PlayerListItem>::new(mode, &renderer)
        .with_locator(locator)
        .with_activation(settings.activation)
        .with_dom_prefix(settings.dom_prefix);

    let instruction = strategy.deliver(page, &ctx)?;
    debug!(
        "Delivered page {} ({} items, mode {}, next {:?})",
        page.page_index(),
        page.len(),
        mode,
        page.next_page_index()
    );
    Ok(instruction)
}

/// Cursor, query and delivery for one request.
pub fn render_listing(
    conn: &DbConn,
    config: &AppConfig,
    strategy: Strategy,
    request: &ListingRequest,
) -> Result<DeliveryInstruction> {
    let cursor = PageCursor::from_params(request.page, request.page_size, &config.pagination)?;
    let page = load_page(conn, &cursor, &request.filter)?;
    deliver_page(config, strategy, &page, request.mode, &request.locator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StrategyKind;
    use crate::database::{create_pool, get_connection, setup, NewPlayer};
    use crate::delivery::DeliveryMode;
    use crate::errors::PaginationError;

    fn seeded(dir: &tempfile::TempDir, count: usize) -> DbConn {
        let path = dir.path().join("listing.db");
        let pool = create_pool(path.to_str().unwrap()).unwrap();
        let mut conn = get_connection(&pool).unwrap();
        setup::reset_database(&conn).unwrap();
        let players: Vec<NewPlayer> = (0..count)
            .map(|i| NewPlayer {
                name: format!("Player {i:02}"),
                rating: 1000.0 - i as f64,
                games_played: 10,
                confidence_level: "Provisional".to_string(),
                last_played_at: None,
            })
            .collect();
        database::players::insert_all(&mut conn, &players).unwrap();
        conn
    }

    fn request(page: i64, mode: RequestMode) -> ListingRequest {
        ListingRequest {
            page: Some(page),
            page_size: Some(10),
            filter: PlayerFilter::default(),
            mode,
            locator: QueryLocator::new("/players").with_param("page_size", "10"),
        }
    }

    #[test]
    fn test_load_page_ranks_across_pages() {
        let dir = tempfile::tempdir().unwrap();
        let conn = seeded(&dir, 25);
        let filter = PlayerFilter::default();

        let cursor = PageCursor::from_params(Some(2), Some(10), &AppConfig::default().pagination).unwrap();
        let page = load_page(&conn, &cursor, &filter).unwrap();

        assert_eq!(page.len(), 5);
        assert_eq!(page.next_page_index(), None);
        assert_eq!(page.items()[0].rank, 21);
        assert_eq!(page.items()[0].name, "Player 20");
    }

    #[test]
    fn test_stream_listing_walks_to_the_end() {
        let dir = tempfile::tempdir().unwrap();
        let conn = seeded(&dir, 20);
        let config = AppConfig::default();
        let strategy = StrategyKind::Stream.strategy();

        let initial = render_listing(&conn, &config, strategy, &request(0, RequestMode::Full)).unwrap();
        assert_eq!(initial.mode, DeliveryMode::AppendDelta);
        assert_eq!(
            initial.trigger.as_ref().unwrap().source_url,
            "/players?page_size=10&page=1&format=stream"
        );
        assert!(initial.body_fragment.contains(r#"<tbody id="players_rows">"#));

        let last = render_listing(&conn, &config, strategy, &request(1, RequestMode::Stream)).unwrap();
        assert!(last.is_final());
        assert!(last.body_fragment.contains(r#"action="remove" target="players_pager""#));
        assert!(last.body_fragment.contains(r#"<tr id="player_20">"#));
    }

    #[test]
    fn test_malformed_page_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let conn = seeded(&dir, 3);
        let strategy = StrategyKind::Frame.strategy();

        let result = render_listing(&conn, &AppConfig::default(), strategy, &request(-1, RequestMode::Full));
        assert!(matches!(result, Err(PaginationError::MalformedPageIndex { .. })));
    }
}
