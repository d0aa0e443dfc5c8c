mod cli;
mod commands;
mod config;
mod main_lib;
mod output;

use clap::Parser;
use cli::Cli;
use config::Config;
use main_lib::{build_state, init_tracing};
use output::Output;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().with_db_override(cli.db.clone());
    init_tracing(&config);
    let state = build_state(&config).await?;
    commands::run(&state, cli.command, &Output::new(cli.json)).await
}
