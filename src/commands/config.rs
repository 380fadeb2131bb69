use anyhow::Result;
use colored::Colorize;
use gcosts::config::Config;
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration after file, environment and
/// command line overrides
pub fn show(cfg: &Config) -> Result<()> {
    info!("Displaying effective configuration");

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(cfg)?;
    println!("{}", toml_string);

    Ok(())
}
