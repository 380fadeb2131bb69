//! Command implementations for the CLI
//!
//! This module contains the implementation of all CLI commands:
//! - calc: Price all usage files and export the costs
//! - region: List or check regions
//! - about: Price list metadata
//! - compute: Compute Engine prices
//! - storage: Cloud Storage prices
//! - monitoring: Cloud Monitoring prices
//! - config: Effective configuration

pub mod about;
pub mod calc;
pub mod compute;
pub mod config;
pub mod monitoring;
pub mod region;
pub mod storage;

use crate::cli::PricingArgs;
use anyhow::Result;
use colored::Colorize;
use gcosts::config::Config;
use gcosts::pricing::{load_catalog, PriceCatalog, PricingUpdater};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

/// Apply price list flags on top of the configuration
pub fn apply_pricing_args(cfg: &mut Config, args: &PricingArgs) {
    if let Some(file) = &args.pricing {
        cfg.pricing.file = file.clone();
    }
    if let Some(url) = &args.pricing_file_url {
        cfg.pricing.url = url.clone();
    }
}

/// Price file to read, downloading this week's copy first when requested
pub async fn pricing_file(cfg: &Config, args: &PricingArgs) -> Result<PathBuf> {
    if !args.download {
        return Ok(cfg.pricing.file.clone());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.set_message("Fetching pricing file...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let updater = PricingUpdater::new(
        cfg.pricing.url.clone(),
        cfg.pricing.cache_dir.clone(),
        cfg.pricing.file.clone(),
        args.force_redownload,
    );
    let path = updater.ensure_pricing_file().await;

    spinner.finish_and_clear();
    Ok(path)
}

/// Load the price catalog for a command
pub async fn catalog(cfg: &Config, args: &PricingArgs) -> Result<PriceCatalog> {
    let path = pricing_file(cfg, args).await?;
    Ok(load_catalog(path)?)
}

/// `Label: $1.23` line used by the price commands
pub fn print_price(label: &str, price: f64) {
    println!("{} {}", label.bold(), format!("${:.2}", price).green());
}
