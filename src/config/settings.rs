use clap::ValueEnum;
use log::warn;

use crate::delivery::{ActivationPolicy, AppendDeltaStrategy, FullFrameStrategy, Strategy};
use crate::pagination::PaginationConfig;

const DEFAULT_DATABASE_PATH: &str = "infinite_scroll.db";

/// How the listing grows as the user scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StrategyKind {
    /// Chain of lazy frames, each replacing itself with the next page
    #[default]
    Frame,
    /// Append rows to one table and swap the pager placeholder
    Stream,
}

impl StrategyKind {
    pub fn strategy(self) -> Strategy {
        match self {
            Self::Frame => Strategy::FullFrame(FullFrameStrategy),
            Self::Stream => Strategy::AppendDelta(AppendDeltaStrategy),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DeliverySettings {
    pub strategy: StrategyKind,
    pub activation: ActivationPolicy,
    pub dom_prefix: &'static str,
    pub title: &'static str,
}

impl Default for DeliverySettings {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            activation: ActivationPolicy::OnVisible,
            dom_prefix: "players",
            title: "Player ranking",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub database_path: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub pagination: PaginationConfig,
    pub delivery: DeliverySettings,
    pub server: ServerSettings,
}

impl AppConfig {
    /// Defaults overridden by `DATABASE_PATH`, `PAGE_SIZE` and
    /// `LOAD_MORE=click` from the environment.
    pub fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("DATABASE_PATH") {
            config.server.database_path = path;
        }

        if let Some(raw) = lookup("PAGE_SIZE") {
            match raw.parse::<usize>() {
                Ok(size) if size > 0 => {
                    let max = size.max(config.pagination.max_page_size);
                    config.pagination = config
                        .pagination
                        .with_default_page_size(size)
                        .with_max_page_size(max);
                }
                _ => warn!("Ignoring invalid PAGE_SIZE '{}'", raw),
            }
        }

        if lookup("LOAD_MORE").as_deref() == Some("click") {
            config.delivery.activation = ActivationPolicy::OnClick;
        }

        config
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.delivery.strategy = strategy;
        self
    }
}
