use anyhow::Result;
use colored::Colorize;
use gcosts::config::Config;
use gcosts::error::PricingError;
use gcosts::estimate::{Defaults, Estimator};
use gcosts::pricing::PriceCatalog;
use gcosts::report::{export_csv, render_table, LineItems};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Execute the calc command
///
/// Prices every usage file in the directory, prints the cost table and
/// exports the line items as CSV. The export is written even when nothing
/// is billable so the file always carries its header.
pub fn execute(
    catalog: &PriceCatalog,
    cfg: &Config,
    dir: Option<PathBuf>,
    csv: Option<PathBuf>,
    yes: bool,
) -> Result<()> {
    let dir = dir.unwrap_or_else(|| cfg.export.usage_dir.clone());
    let csv = csv.unwrap_or_else(|| cfg.export.csv.clone());

    let defaults = Defaults {
        project: cfg.defaults.project.clone(),
        region: cfg.defaults.region.clone(),
        discount: cfg.defaults.discount,
    };
    let estimator = Estimator::new(catalog, defaults);
    let items = estimator.run_dir(&dir)?;

    if items.is_empty() {
        println!("{}", "No billable resources found".yellow());
    } else {
        println!("{}", render_table(&items));
        println!();
        println!(
            "{} {}",
            "Total cost per month:".bold(),
            format!("${:.2}", items.total()).green().bold()
        );
        println!();
    }

    if confirm_overwrite(&csv, yes)? {
        write_csv(&items, &csv)?;
        println!("{} Costs exported to {}", "✓".green(), csv.display());
        info!("CSV export written to '{}'", csv.display());
    } else {
        println!("{}", "CSV export skipped".yellow());
    }

    Ok(())
}

fn write_csv(items: &LineItems, path: &Path) -> Result<(), PricingError> {
    let file = File::create(path).map_err(|e| PricingError::from_io(e, path))?;
    let mut writer = BufWriter::new(file);
    export_csv(items, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Ask before replacing an existing export
fn confirm_overwrite(path: &Path, yes: bool) -> Result<bool> {
    if yes || !path.exists() {
        return Ok(true);
    }

    print!(
        "{} ",
        format!("File '{}' already exists. Overwrite? [y/N]", path.display()).bold()
    );
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
