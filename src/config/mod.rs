pub mod settings;

pub use settings::{AppConfig, DeliverySettings, ServerSettings, StrategyKind};
