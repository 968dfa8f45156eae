use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

mod client;
mod commands;
mod constants;
mod domain;
mod logging;
mod state;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use state::{App, AppConfig, StartupPage};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// txlens - terminal explorer for transaction details and address history
#[derive(Debug, Parser)]
#[command(name = "txlens", version = VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the explorer API (detail, market and state endpoints)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Base URL of the history API (transactions by address)
    #[arg(long, global = true, value_name = "URL")]
    history_url: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show details for a transaction
    Tx {
        /// Transaction hash
        hash: String,
    },
    /// Show the transaction history of an address
    History {
        /// Account address
        address: String,
    },
    /// Print the resolved configuration
    Config,
    /// Display version
    Version,
}

impl Cli {
    fn config(&self) -> AppConfig {
        AppConfig::load().with_overrides(self.api_url.clone(), self.history_url.clone())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let startup = match &cli.command {
        Commands::Version => {
            println!("txlens v{VERSION}");
            return Ok(());
        }
        Commands::Config => {
            if let Ok(path) = AppConfig::config_path() {
                println!("# {}", path.display());
            }
            println!("{}", serde_json::to_string_pretty(&cli.config())?);
            return Ok(());
        }
        Commands::Tx { hash } => StartupPage::Transaction(hash.clone()),
        Commands::History { address } => StartupPage::History(address.clone()),
    };

    if let Err(e) = logging::init() {
        eprintln!("txlens: file logging disabled: {e}");
    }

    let mut app = App::new(cli.config(), startup)?;
    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal).await;
    tui::restore()?;
    result
}
