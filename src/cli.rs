use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::config::StrategyKind;
use crate::delivery::RequestMode;

#[derive(Parser, Debug)]
#[command(author, version, about = "infinite-scroll player ranking")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the web server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
        /// Delivery strategy for /players
        #[arg(short, long, value_enum, default_value_t = StrategyKind::Frame)]
        strategy: StrategyKind,
    },
    /// Reset the database and fill it with demo players
    Seed {
        /// Number of players to insert
        #[arg(short, long, default_value_t = 250)]
        count: usize,
    },
    /// Render one page delivery to stdout
    Page {
        /// Zero-based page index
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        page: i64,
        /// Page size (defaults to the configured size)
        #[arg(long, allow_negative_numbers = true)]
        page_size: Option<i64>,
        /// Delivery strategy
        #[arg(short, long, value_enum, default_value_t = StrategyKind::Frame)]
        strategy: StrategyKind,
        /// Request flavor: full, raw or stream
        #[arg(short, long, default_value_t = RequestMode::Full)]
        mode: RequestMode,
    },
    /// Print shell completions to stdout
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_accepts_negative_index() {
        let cli = Cli::try_parse_from(["infinite_scroll", "page", "--page", "-1", "--mode", "raw"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Page {
                page: -1,
                page_size: None,
                strategy: StrategyKind::Frame,
                mode: RequestMode::Raw,
            }
        );
    }

    #[test]
    fn test_serve_strategy() {
        let cli = Cli::try_parse_from(["infinite_scroll", "serve", "--strategy", "stream"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Serve {
                port: 3000,
                strategy: StrategyKind::Stream,
            }
        );
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["infinite_scroll", "page", "--mode", "json"]).is_err());
    }
}
