use super::print_price;
use crate::cli::StorageCommands;
use anyhow::Result;
use colored::Colorize;
use gcosts::pricing::PriceCatalog;
use gcosts::report::styled_table;

/// Execute a storage subcommand
pub fn execute(catalog: &PriceCatalog, resource: StorageCommands) -> Result<()> {
    let StorageCommands::Bucket { class, args } = resource;

    match (class.as_deref(), args.region.as_deref()) {
        (Some(class), Some(region)) => {
            catalog.check_region(region)?;
            let cost = catalog.bucket_cost(class, region)?;
            print_price("Price per GiB per month:", cost.monthly()?);
            if catalog.storage.retrieval.contains_key(class) {
                let retrieval = catalog.retrieval_cost(class, region)?;
                print_price("Retrieval price per GiB:", retrieval.monthly()?);
            }
        }
        (Some(class), None) => {
            if !catalog.storage.bucket.contains_key(class) {
                return Err(gcosts::error::PricingError::not_found("storage class", class).into());
            }
            println!("{} Storage class {} found", "✓".green(), class.cyan());
        }
        (None, _) => {
            let mut table = styled_table(&["Storage Class", "Retrieval Fee"]);
            for name in catalog.storage.bucket.keys() {
                let fee = if catalog.storage.retrieval.contains_key(name) {
                    "yes"
                } else {
                    "no"
                };
                table.add_row(vec![name.as_str(), fee]);
            }
            println!("{table}");
        }
    }
    Ok(())
}
