use super::layout::document;
use crate::api::models::PlayerListItem;
use crate::delivery::{DeliveryMode, ItemRenderer};
use crate::markup::escape;

const COLUMNS: [&str; 6] = ["#", "Player", "Rating", "Games", "Confidence", "Last played"];

/// Markup flavor for player rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowElement {
    /// `<tr>` rows inside a `<tbody>` container.
    TableRow,
    /// CSS-grid `<div>` rows; works when every page wraps its own rows.
    GridRow,
}

impl RowElement {
    /// Frames can't sit between table rows, so frame chains use grid rows.
    pub fn for_mode(mode: DeliveryMode) -> Self {
        match mode {
            DeliveryMode::FullFrame => Self::GridRow,
            DeliveryMode::AppendDelta => Self::TableRow,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayerRows {
    element: RowElement,
    title: String,
}

impl PlayerRows {
    pub fn new(element: RowElement, title: impl Into<String>) -> Self {
        Self {
            element,
            title: title.into(),
        }
    }

    fn render_row(&self, player: &PlayerListItem) -> String {
        // Row ids stay stable across deliveries of the same player.
        let cells = [
            player.rank.to_string(),
            escape(&player.name),
            format!("{:.1}", player.rating),
            player.games_played.to_string(),
            escape(&player.confidence_level),
            last_played(player),
        ];
        match self.element {
            RowElement::TableRow => format!(
                r#"<tr id="player_{}">{}</tr>"#,
                player.player_id,
                wrap_all("td", &cells)
            ),
            RowElement::GridRow => format!(
                r#"<div class="row" id="player_{}">{}</div>"#,
                player.player_id,
                wrap_all("span", &cells)
            ),
        }
    }

    fn render_header(&self) -> String {
        let cells = COLUMNS.map(String::from);
        match self.element {
            RowElement::TableRow => format!("<thead><tr>{}</tr></thead>", wrap_all("th", &cells)),
            RowElement::GridRow => format!(r#"<div class="row head">{}</div>"#, wrap_all("span", &cells)),
        }
    }
}

fn last_played(player: &PlayerListItem) -> String {
    player
        .last_played_at
        .map(|at| at.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "–".to_string())
}

fn wrap_all(tag: &str, cells: &[String]) -> String {
    cells.iter().map(|c| format!("<{tag}>{c}</{tag}>")).collect()
}

impl ItemRenderer<PlayerListItem> for PlayerRows {
    fn render_items(&self, items: &[PlayerListItem]) -> String {
        items.iter().map(|p| self.render_row(p)).collect()
    }

    fn render_container(&self, id: &str, content: &str) -> String {
        let id = escape(id);
        match self.element {
            RowElement::TableRow => format!(
                r#"<table class="players">{}<tbody id="{id}">{content}</tbody></table>"#,
                self.render_header()
            ),
            RowElement::GridRow => format!(r#"<div class="grid" id="{id}">{content}</div>"#),
        }
    }

    fn render_layout(&self, content: &str) -> String {
        let body = match self.element {
            RowElement::TableRow => content.to_string(),
            RowElement::GridRow => format!(r#"<div class="grid">{}{content}</div>"#, self.render_header()),
        };
        document(&self.title, &body)
    }
}
