use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::{NewPlayer, Player, PlayerFilter};

const PLAYER_COLUMNS: &str = "id, name, rating, games_played, confidence_level, last_played_at";

/// Insert many players in one transaction.
pub fn insert_all(conn: &mut DbConn, players: &[NewPlayer]) -> Result<usize> {
    let tx = conn.transaction().context("Failed to start transaction")?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO players (name, rating, games_played, confidence_level, last_played_at) VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for player in players {
            stmt.execute(params![
                player.name,
                player.rating,
                player.games_played,
                player.confidence_level,
                player.last_played_at
            ])
            .with_context(|| format!("Failed to insert player {}", player.name))?;
        }
    }
    tx.commit().context("Failed to commit players")?;
    Ok(players.len())
}

/// One window of players in a stable order: the requested column, then id.
pub fn list_window(
    conn: &DbConn,
    filter: &PlayerFilter,
    offset: usize,
    limit: usize,
) -> Result<Vec<Player>> {
    // SQLite can't address rows past i64::MAX, so such a window is empty.
    let Ok(offset) = i64::try_from(offset) else {
        return Ok(Vec::new());
    };
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let sql = build_window_sql(filter);
    let pattern = filter.name_contains.as_deref().map(like_pattern);

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![pattern, limit, offset], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to query player window")?;

    Ok(rows)
}

fn build_window_sql(filter: &PlayerFilter) -> String {
    format!(
        "SELECT {PLAYER_COLUMNS} FROM players \
         WHERE (?1 IS NULL OR name LIKE ?1 ESCAPE '\\') \
         ORDER BY {} {}, id ASC \
         LIMIT ?2 OFFSET ?3",
        filter.sort_by.as_sql(),
        filter.sort_order.as_sql()
    )
}

fn like_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        rating: row.get(2)?,
        games_played: row.get(3)?,
        confidence_level: row.get(4)?,
        last_played_at: row.get(5)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::{SortColumn, SortOrder};
    use crate::database::{create_pool, get_connection, setup};

    fn new_player(name: &str, rating: f64, games: i32) -> NewPlayer {
        NewPlayer {
            name: name.to_string(),
            rating,
            games_played: games,
            confidence_level: "Provisional".to_string(),
            last_played_at: None,
        }
    }

    fn seeded_conn(dir: &tempfile::TempDir) -> DbConn {
        let path = dir.path().join("players.db");
        let pool = create_pool(path.to_str().unwrap()).unwrap();
        let mut conn = get_connection(&pool).unwrap();
        setup::reset_database(&conn).unwrap();
        insert_all(
            &mut conn,
            &[
                new_player("Anna", 600.0, 20),
                new_player("Bartek", 550.0, 40),
                new_player("Celina", 600.0, 15),
                new_player("Dawid_", 450.0, 60),
            ],
        )
        .unwrap();
        conn
    }

    fn names(players: &[Player]) -> Vec<&str> {
        players.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_window_orders_ties_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let conn = seeded_conn(&dir);

        let all = list_window(&conn, &PlayerFilter::default(), 0, 10).unwrap();
        assert_eq!(names(&all), vec!["Anna", "Celina", "Bartek", "Dawid_"]);

        let window = list_window(&conn, &PlayerFilter::default(), 1, 2).unwrap();
        assert_eq!(names(&window), vec!["Celina", "Bartek"]);
    }

    #[test]
    fn test_window_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let conn = seeded_conn(&dir);

        let filter = PlayerFilter {
            name_contains: Some("n".to_string()),
            sort_by: SortColumn::GamesPlayed,
            sort_order: SortOrder::Asc,
        };
        let rows = list_window(&conn, &filter, 0, 10).unwrap();
        assert_eq!(names(&rows), vec!["Celina", "Anna"]);

        let underscore = PlayerFilter {
            name_contains: Some("_".to_string()),
            ..PlayerFilter::default()
        };
        let rows = list_window(&conn, &underscore, 0, 10).unwrap();
        assert_eq!(names(&rows), vec!["Dawid_"]);
    }

    #[test]
    fn test_window_past_addressable_rows_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let conn = seeded_conn(&dir);

        let offset = usize::try_from(i64::MAX).unwrap() + 1;
        let rows = list_window(&conn, &PlayerFilter::default(), offset, 4).unwrap();
        assert!(rows.is_empty());

        let rows = list_window(&conn, &PlayerFilter::default(), 3, usize::MAX).unwrap();
        assert_eq!(names(&rows), vec!["Dawid_"]);
    }
}
