use anyhow::Result;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use log::info;

use crate::config::AppConfig;
use crate::database::{self, NewPlayer};

const FIRST_NAMES: [&str; 12] = [
    "Adam", "Beata", "Cezary", "Dorota", "Emil", "Filip", "Grażyna", "Henryk", "Iga", "Jan",
    "Kasia", "Łukasz",
];
const LAST_NAMES: [&str; 10] = [
    "Nowak", "Kowalski", "Wiśniewska", "Wójcik", "Kamiński", "Lewandowska", "Zieliński",
    "Szymańska", "Woźniak", "Dąbrowski",
];

pub struct SeedingService {
    config: AppConfig,
}

impl SeedingService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, count: usize) -> Result<()> {
        let db_path = &self.config.server.database_path;
        info!("=== Seeding {} players into {} ===", count, db_path);

        let pool = database::create_pool(db_path)?;
        let mut conn = database::get_connection(&pool)?;

        database::setup::reset_database(&conn)?;
        let players = demo_players(count);
        let inserted = database::players::insert_all(&mut conn, &players)?;

        info!("  → Inserted {} players", inserted);
        Ok(())
    }
}

/// Deterministic demo roster; the same count always yields the same rows.
pub fn demo_players(count: usize) -> Vec<NewPlayer> {
    (0..count).map(demo_player).collect()
}

fn demo_player(i: usize) -> NewPlayer {
    let first = FIRST_NAMES[i % FIRST_NAMES.len()];
    let last = LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()];
    let games_played = ((i * 37) % 260) as i32;
    let rating = 300.0 + ((i * 7919) % 4000) as f64 / 10.0;

    NewPlayer {
        name: format!("{first} {last} {}", i + 1),
        rating,
        games_played,
        confidence_level: confidence_level(games_played).to_string(),
        last_played_at: last_played_at(i, games_played),
    }
}

/// Somewhere in the year before the seed date; never for players without games.
fn last_played_at(i: usize, games_played: i32) -> Option<NaiveDateTime> {
    if games_played == 0 {
        return None;
    }
    let days_ago = ((i * 13) % 365) as i64;
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .and_then(|date| date.and_hms_opt(19, 0, 0))
        .map(|base| base - Duration::days(days_ago))
}

fn confidence_level(games_played: i32) -> &'static str {
    match games_played {
        g if g < 10 => "Unranked",
        g if g < 50 => "Provisional",
        g if g < 200 => "Emerging",
        _ => "Established",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_players_are_deterministic() {
        assert_eq!(
            demo_players(30).iter().map(|p| &p.name).collect::<Vec<_>>(),
            demo_players(30).iter().map(|p| &p.name).collect::<Vec<_>>()
        );
        assert_eq!(demo_players(0).len(), 0);
        assert_eq!(demo_players(3)[1].name, "Beata Nowak 2");
    }

    #[test]
    fn test_last_played_only_with_games() {
        let players = demo_players(2);
        assert_eq!(players[0].games_played, 0);
        assert_eq!(players[0].last_played_at, None);
        assert_eq!(
            players[1].last_played_at.unwrap().to_string(),
            "2025-05-19 19:00:00"
        );
    }

    #[test]
    fn test_confidence_levels() {
        assert_eq!(confidence_level(0), "Unranked");
        assert_eq!(confidence_level(10), "Provisional");
        assert_eq!(confidence_level(199), "Emerging");
        assert_eq!(confidence_level(200), "Established");
    }

    #[test]
    fn test_run_seeds_database() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.server.database_path = dir.path().join("seed.db").to_string_lossy().into_owned();

        SeedingService::new(config.clone()).run(12).unwrap();

        let pool = database::create_pool(&config.server.database_path).unwrap();
        let conn = database::get_connection(&pool).unwrap();
        let rows = database::players::list_window(&conn, &Default::default(), 0, 100).unwrap();
        assert_eq!(rows.len(), 12);
    }
}
