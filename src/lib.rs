pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod delivery;
pub mod errors;
pub mod markup;
pub mod pagination;
pub mod render;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::{AppConfig, StrategyKind};
use crate::delivery::RequestMode;
use crate::services::preview::PreviewService;
use crate::services::seeding::SeedingService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16, strategy: StrategyKind) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new().with_strategy(strategy);
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_seed(count: usize) -> Result<()> {
    let config = AppConfig::new();
    let service = SeedingService::new(config);
    service.run(count)
}

pub fn handle_page(
    page: i64,
    page_size: Option<i64>,
    strategy: StrategyKind,
    mode: RequestMode,
) -> Result<()> {
    let config = AppConfig::new();
    let service = PreviewService::new(config);
    let instruction = service.render(page, page_size, strategy, mode)?;

    println!("{}", instruction.body_fragment);
    match &instruction.trigger {
        Some(trigger) => log::info!("Next page at {}", trigger.source_url),
        None => log::info!("End of listing"),
    }
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
