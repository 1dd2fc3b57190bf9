use chrono::NaiveDateTime;
use serde::Serialize;

use crate::database::Player;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerListItem {
    pub rank: usize,
    pub player_id: i64,
    pub name: String,
    pub rating: f64,
    pub games_played: i32,
    pub confidence_level: String,
    pub last_played_at: Option<NaiveDateTime>,
}

impl PlayerListItem {
    /// `rank` is the 1-based position across the whole listing.
    pub fn from_row(row: Player, rank: usize) -> Self {
        Self {
            rank,
            player_id: row.id,
            name: row.name,
            rating: row.rating,
            games_played: row.games_played,
            confidence_level: row.confidence_level,
            last_played_at: row.last_played_at,
        }
    }
}
