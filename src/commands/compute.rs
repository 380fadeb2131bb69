use super::print_price;
use crate::cli::{ComputeCommands, NetworkItem};
use anyhow::Result;
use colored::Colorize;
use gcosts::pricing::{Commitment, Destination, PriceCatalog};
use gcosts::report::styled_table;
use std::collections::BTreeSet;

/// Execute a compute subcommand
pub fn execute(catalog: &PriceCatalog, resource: ComputeCommands) -> Result<()> {
    match resource {
        ComputeCommands::Instance { machine_type, args } => {
            instance(catalog, machine_type.as_deref(), args.region.as_deref())
        }
        ComputeCommands::Disk { disk_type, args } => {
            disk(catalog, disk_type.as_deref(), args.region.as_deref())
        }
        ComputeCommands::License { machine_type, os } => {
            license(catalog, machine_type.as_deref(), os.as_deref())
        }
        ComputeCommands::Network { item } => {
            let (item, region) = item.split();
            network(catalog, item, region)
        }
    }
}

fn instance(catalog: &PriceCatalog, machine_type: Option<&str>, region: Option<&str>) -> Result<()> {
    match (machine_type, region) {
        (Some(machine_type), Some(region)) => {
            catalog.check_region(region)?;
            let cost = catalog.instance_cost(machine_type, region)?;
            print_price("Price per month:       ", cost.monthly()?);
            print_price(
                "1Y CUD price per month:",
                cost.monthly_committed(Commitment::OneYear)?,
            );
            print_price(
                "3Y CUD price per month:",
                cost.monthly_committed(Commitment::ThreeYears)?,
            );
            print_price("Spot price per month:  ", cost.monthly_spot()?);
            if let Ok(hour) = cost.hourly() {
                print_price("Price per hour:        ", hour);
                print_price("Spot price per hour:   ", cost.hourly_spot()?);
            }
        }
        (Some(machine_type), None) => {
            let instance = catalog.machine_type(machine_type)?;
            println!(
                "{} Machine type {}: {} vCPU, {} GiB RAM",
                "✓".green(),
                machine_type.cyan(),
                instance.cpu,
                instance.ram
            );
        }
        (None, _) => {
            let mut table = styled_table(&["Machine Type", "vCPU", "RAM (GiB)"]);
            for (name, instance) in &catalog.compute.instance {
                table.add_row(vec![name.clone(), instance.cpu.to_string(), instance.ram.to_string()]);
            }
            println!("{table}");
        }
    }
    Ok(())
}

fn disk(catalog: &PriceCatalog, disk_type: Option<&str>, region: Option<&str>) -> Result<()> {
    match (disk_type, region) {
        (Some(disk_type), Some(region)) => {
            catalog.check_region(region)?;
            let cost = catalog.disk_cost(disk_type, region)?;
            print_price("Price per GiB per month:", cost.monthly()?);
        }
        (Some(disk_type), None) => {
            catalog.disk_type(disk_type)?;
            println!("{} Disk type {} found", "✓".green(), disk_type.cyan());
        }
        (None, _) => {
            let mut table = styled_table(&["Disk Type", "Kind"]);
            for (name, disk) in &catalog.compute.storage {
                table.add_row(vec![name.as_str(), disk.kind.as_str()]);
            }
            println!("{table}");
        }
    }
    Ok(())
}

fn license(catalog: &PriceCatalog, machine_type: Option<&str>, os: Option<&str>) -> Result<()> {
    if let (Some(machine_type), Some(os)) = (machine_type, os) {
        let cost = catalog.license_cost(machine_type, os)?;
        print_price("Price per license per month:       ", cost.monthly()?);
        print_price(
            "1Y CUD price per license per month:",
            cost.monthly_committed(Commitment::OneYear)?,
        );
        print_price(
            "3Y CUD price per license per month:",
            cost.monthly_committed(Commitment::ThreeYears)?,
        );
        return Ok(());
    }

    let systems: BTreeSet<&String> = match machine_type {
        Some(machine_type) => catalog
            .compute
            .license
            .get(machine_type)
            .ok_or_else(|| anyhow::anyhow!("No licenses for machine type '{}'", machine_type))?
            .cost
            .keys()
            .collect(),
        None => catalog
            .compute
            .license
            .values()
            .flat_map(|license| license.cost.keys())
            .collect(),
    };

    let mut table = styled_table(&["Operating System Licenses"]);
    for os in systems {
        table.add_row(vec![os.as_str()]);
    }
    println!("{table}");
    Ok(())
}

fn network(catalog: &PriceCatalog, item: NetworkItem, region: &str) -> Result<()> {
    catalog.check_region(region)?;
    match item {
        NetworkItem::Ip => {
            print_price("Price per used IP per month:  ", catalog.ip_vm_cost(region)?.monthly()?);
            print_price("Price per unused IP per month:", catalog.ip_unused_cost(region)?.monthly()?);
        }
        NetworkItem::Vpn => {
            print_price("Price per tunnel per month:", catalog.vpn_tunnel_cost(region)?.monthly()?);
        }
        NetworkItem::Nat => {
            print_price("Price per gateway per month:", catalog.nat_gateway_cost(region)?.monthly()?);
        }
        NetworkItem::NatData => {
            print_price("Price per processed GiB:", catalog.nat_data_cost(region)?.monthly()?);
        }
        NetworkItem::Egress => egress(catalog, Destination::World, region)?,
        NetworkItem::EgressChina => egress(catalog, Destination::China, region)?,
        NetworkItem::EgressAustralia => egress(catalog, Destination::Australia, region)?,
    }
    Ok(())
}

fn egress(catalog: &PriceCatalog, destination: Destination, region: &str) -> Result<()> {
    let tiers = catalog.egress_tiers(destination);
    let costs = catalog.tiered_costs(tiers, "internet egress traffic", region)?;
    println!("{} {}", "Internet egress traffic to".bold(), destination.label().cyan());
    for (label, cost) in tiers.labels.iter().zip(costs) {
        print_price(&format!("Price per GiB ({label}) per month:"), cost.monthly()?);
    }
    Ok(())
}
