use anyhow::Result;
use clap::Parser;
use colored::Colorize;

mod cli;
mod commands;

use gcosts::config::load_config;
use gcosts::error::PricingError;
use gcosts::init_tracing;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    init_tracing();

    if let Err(err) = run(args).await {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        let code = err
            .downcast_ref::<PricingError>()
            .map(PricingError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

async fn run(args: cli::Cli) -> Result<()> {
    let mut cfg = load_config(args.config.as_deref())?;
    commands::apply_pricing_args(&mut cfg, &args.pricing);

    // Dispatch to appropriate command handler
    match args.command {
        cli::Commands::Calc { dir, csv, yes } => {
            let catalog = commands::catalog(&cfg, &args.pricing).await?;
            commands::calc::execute(&catalog, &cfg, dir, csv, yes)?;
        }
        cli::Commands::Region { kind, args: region } => {
            let catalog = commands::catalog(&cfg, &args.pricing).await?;
            commands::region::execute(&catalog, kind, region)?;
        }
        cli::Commands::About { action } => {
            let catalog = commands::catalog(&cfg, &args.pricing).await?;
            commands::about::execute(&catalog, action)?;
        }
        cli::Commands::Compute { resource } => {
            let catalog = commands::catalog(&cfg, &args.pricing).await?;
            commands::compute::execute(&catalog, resource)?;
        }
        cli::Commands::Storage { resource } => {
            let catalog = commands::catalog(&cfg, &args.pricing).await?;
            commands::storage::execute(&catalog, resource)?;
        }
        cli::Commands::Monitoring { resource } => {
            let catalog = commands::catalog(&cfg, &args.pricing).await?;
            commands::monitoring::execute(&catalog, resource)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&cfg)?,
        },
    }

    Ok(())
}
