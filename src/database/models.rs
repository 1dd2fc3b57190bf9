use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub rating: f64,
    pub games_played: i32,
    pub confidence_level: String,
    pub last_played_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub name: String,
    pub rating: f64,
    pub games_played: i32,
    pub confidence_level: String,
    pub last_played_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    #[default]
    Rating,
    GamesPlayed,
}

impl SortColumn {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("name") => Self::Name,
            Some("rating") => Self::Rating,
            Some("gamesPlayed") => Self::GamesPlayed,
            _ => Self::default(),
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Rating => "rating",
            Self::GamesPlayed => "games_played",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Filter and ordering bound into the player fetch; the window itself is
/// supplied per call.
#[derive(Debug, Clone, Default)]
pub struct PlayerFilter {
    pub name_contains: Option<String>,
    pub sort_by: SortColumn,
    pub sort_order: SortOrder,
}
