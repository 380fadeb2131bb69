use crate::cli::AboutCommands;
use anyhow::Result;
use colored::Colorize;
use gcosts::pricing::PriceCatalog;

/// Execute the about command
pub fn execute(catalog: &PriceCatalog, action: Option<AboutCommands>) -> Result<()> {
    let about = &catalog.about;
    match action {
        Some(AboutCommands::Copyright) => {
            if about.copyright.is_empty() {
                anyhow::bail!("Copyright information not found");
            }
            println!("{}", about.copyright);
        }
        None => {
            if about.generated.is_empty() {
                anyhow::bail!("Price list information not found");
            }
            println!("{} {}", "Last price update:".bold(), about.generated.cyan());
            if !about.url.is_empty() {
                println!("{} {}", "Source:".bold(), about.url);
            }
        }
    }
    Ok(())
}
