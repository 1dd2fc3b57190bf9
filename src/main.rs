use anyhow::Result;

use infinite_scroll::cli::Command;
use infinite_scroll::{handle_completions, handle_page, handle_seed, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port, strategy } => handle_serve(*port, *strategy),
        Command::Seed { count } => handle_seed(*count),
        Command::Page {
            page,
            page_size,
            strategy,
            mode,
        } => handle_page(*page, *page_size, *strategy, *mode),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
