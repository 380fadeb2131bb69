use super::print_price;
use crate::cli::MonitoringCommands;
use anyhow::Result;
use gcosts::pricing::PriceCatalog;

/// Execute a monitoring subcommand
pub fn execute(catalog: &PriceCatalog, resource: MonitoringCommands) -> Result<()> {
    let MonitoringCommands::Data(args) = resource;
    catalog.check_region(&args.region)?;

    let tiers = catalog.monitoring_tiers();
    let costs = catalog.tiered_costs(tiers, "monitoring data", &args.region)?;
    for (label, cost) in tiers.labels.iter().zip(costs) {
        print_price(&format!("Price per MiB ({label}) per month:"), cost.monthly()?);
    }
    Ok(())
}
