//! rosterctl - interactive student roster manager backed by PostgreSQL
//!
//! Presents a numbered menu over stdin/stdout with four operations:
//! add, delete-by-name, search-by-name, and list-all. One statement in
//! flight at a time against one exclusively-owned connection.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use rosterctl_core::{db, RosterConfig};
use tracing::error;

mod menu;
mod prompt;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "rosterctl",
    author,
    version,
    about = "Interactive student roster manager backed by PostgreSQL"
)]
struct Cli {
    /// Path to config file (default: ~/.rosterctl/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Postgres connection URL; overrides the config file
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional; already-set variables win
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(err) = tracing_setup::init_tracing(cli.debug) {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::from(1);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = RosterConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.database_url {
        config.database.url = Some(url);
    }

    // Connection failure is fatal: report the driver error and exit 1
    let pool = db::connect(&config.database).await?;
    db::ensure_schema(&pool).await?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    menu::run(&pool, &mut input, &mut out).await?;

    pool.close().await;
    Ok(())
}
