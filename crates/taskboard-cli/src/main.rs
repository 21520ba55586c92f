mod cli;
mod context;
mod handlers;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use context::CliContext;
use taskboard_core::{AppConfig, TaskboardError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TASKBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        let message = match err.downcast_ref::<TaskboardError>() {
            Some(e) => e.user_message(),
            None => err.to_string(),
        };
        output::output_error(&message);
    }

    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let file_path = cli
        .file
        .ok_or_else(|| anyhow::anyhow!("--file is required for CLI operations"))?;

    let config = AppConfig::load();
    let mut ctx = CliContext::load(&file_path, cli.api_url, cli.workspace, config).await?;

    match cli.command {
        Commands::Show(args) => handlers::board::handle_show(&ctx, args).await?,
        Commands::Move(args) => handlers::board::handle_move(&mut ctx, args).await?,
        Commands::Tags(args) => handlers::tag::handle_list(&ctx, args).await?,
        Commands::CreateTag(args) => handlers::tag::handle_create(&mut ctx, args).await?,
        Commands::Assign(args) => handlers::card::handle_assign(&mut ctx, args).await?,
        Commands::Rename(args) => handlers::card::handle_rename(&mut ctx, args).await?,
    }

    Ok(())
}
