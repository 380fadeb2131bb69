use crate::cli::{RegionArgs, RegionCommands};
use anyhow::Result;
use colored::Colorize;
use gcosts::pricing::PriceCatalog;
use gcosts::report::styled_table;

/// Execute the region command
///
/// With `--region` the location is checked against all region kinds,
/// otherwise the selected kind is listed.
pub fn execute(catalog: &PriceCatalog, kind: Option<RegionCommands>, args: RegionArgs) -> Result<()> {
    let (region, listing) = match kind {
        None => (args.region, Listing::Single),
        Some(RegionCommands::Dual(args)) => (args.region, Listing::Dual),
        Some(RegionCommands::Multi(args)) => (args.region, Listing::Multi),
    };

    if let Some(region) = region {
        let kind = catalog.check_region(&region)?;
        println!("{} Google Cloud {}: {}", "✓".green(), kind, region.cyan());
        return Ok(());
    }

    let table = match listing {
        Listing::Single => {
            let mut table = styled_table(&["Region", "Location"]);
            for (name, region) in &catalog.region {
                table.add_row(vec![name.as_str(), region.location.as_str()]);
            }
            table
        }
        Listing::Dual => {
            let mut table = styled_table(&["Region", "Regions"]);
            for (name, region) in &catalog.dual_region {
                table.add_row(vec![name.clone(), region.regions.join(", ")]);
            }
            table
        }
        Listing::Multi => {
            let mut table = styled_table(&["Region", "Description"]);
            for (name, region) in &catalog.multi_region {
                table.add_row(vec![name.as_str(), region.description.as_str()]);
            }
            table
        }
    };
    println!("{table}");
    Ok(())
}

enum Listing {
    Single,
    Dual,
    Multi,
}
