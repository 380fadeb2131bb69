use crate::error::PricingError;
use crate::pricing::models::{
    Cost, Destination, DiskType, MachineType, PriceCatalog, RegionalCost, TierTables,
};
use std::fmt;
use tracing::debug;

/// Which region catalog matched a location name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Single,
    Dual,
    Multi,
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "region"),
            Self::Dual => write!(f, "dual-region"),
            Self::Multi => write!(f, "multi-region"),
        }
    }
}

fn regional<'a>(
    table: &'a RegionalCost,
    kind: &'static str,
    key: &str,
    region: &str,
) -> Result<&'a Cost, PricingError> {
    match table.get(region) {
        Some(cost) => {
            debug!("{} '{}' in region '{}' found", kind, key, region);
            Ok(cost)
        }
        None => Err(PricingError::not_found_in_region(kind, key, region)),
    }
}

impl PriceCatalog {
    /// Check a location against single, dual and multi regions
    pub fn check_region(&self, region: &str) -> Result<RegionKind, PricingError> {
        let kind = if self.region.contains_key(region) {
            RegionKind::Single
        } else if self.dual_region.contains_key(region) {
            RegionKind::Dual
        } else if self.multi_region.contains_key(region) {
            RegionKind::Multi
        } else {
            return Err(PricingError::not_found("region", region));
        };
        debug!("Google Cloud {} '{}' found", kind, region);
        Ok(kind)
    }

    pub fn machine_type(&self, machine_type: &str) -> Result<&MachineType, PricingError> {
        self.compute
            .instance
            .get(machine_type)
            .ok_or_else(|| PricingError::not_found("machine type", machine_type))
    }

    pub fn instance_cost(&self, machine_type: &str, region: &str) -> Result<&Cost, PricingError> {
        let instance = self.machine_type(machine_type)?;
        regional(&instance.cost, "machine type", machine_type, region)
    }

    pub fn disk_type(&self, disk_type: &str) -> Result<&DiskType, PricingError> {
        self.compute
            .storage
            .get(disk_type)
            .ok_or_else(|| PricingError::not_found("disk type", disk_type))
    }

    pub fn disk_cost(&self, disk_type: &str, region: &str) -> Result<&Cost, PricingError> {
        let disk = self.disk_type(disk_type)?;
        regional(&disk.cost, "disk type", disk_type, region)
    }

    /// License price for an operating system on a machine type.
    /// Licenses are not regional.
    pub fn license_cost(&self, machine_type: &str, os: &str) -> Result<&Cost, PricingError> {
        let license = self
            .compute
            .license
            .get(machine_type)
            .ok_or_else(|| PricingError::not_found("license for machine type", machine_type))?;
        match license.cost.get(os) {
            Some(cost) => {
                debug!("License '{}' for machine type '{}' found", os, machine_type);
                Ok(cost)
            }
            None => Err(PricingError::NotFound {
                kind: "license",
                key: format!("{} ({})", os, machine_type),
                region: None,
            }),
        }
    }

    pub fn bucket_cost(&self, class: &str, region: &str) -> Result<&Cost, PricingError> {
        let bucket = self
            .storage
            .bucket
            .get(class)
            .ok_or_else(|| PricingError::not_found("storage class", class))?;
        regional(&bucket.cost, "storage class", class, region)
    }

    pub fn retrieval_cost(&self, class: &str, region: &str) -> Result<&Cost, PricingError> {
        let retrieval = self
            .storage
            .retrieval
            .get(class)
            .ok_or_else(|| PricingError::not_found("storage class with retrieval fee", class))?;
        regional(&retrieval.cost, "storage class with retrieval fee", class, region)
    }

    /// External IP attached to a running VM
    pub fn ip_vm_cost(&self, region: &str) -> Result<&Cost, PricingError> {
        regional(&self.compute.network.ip.vm.cost, "external IP", "vm", region)
    }

    /// External IP reserved but not in use
    pub fn ip_unused_cost(&self, region: &str) -> Result<&Cost, PricingError> {
        regional(&self.compute.network.ip.unused.cost, "external IP", "unused", region)
    }

    pub fn vpn_tunnel_cost(&self, region: &str) -> Result<&Cost, PricingError> {
        regional(&self.compute.network.vpn.tunnel.cost, "VPN", "tunnel", region)
    }

    pub fn nat_gateway_cost(&self, region: &str) -> Result<&Cost, PricingError> {
        regional(&self.compute.network.nat.gateway.cost, "NAT", "gateway", region)
    }

    pub fn nat_data_cost(&self, region: &str) -> Result<&Cost, PricingError> {
        regional(&self.compute.network.nat.data.cost, "NAT", "data", region)
    }

    pub fn monitoring_tiers(&self) -> TierTables<'_> {
        self.monitoring.data.cost.tables()
    }

    pub fn egress_tiers(&self, destination: Destination) -> TierTables<'_> {
        let internet = &self.compute.network.traffic.egress.internet;
        match destination {
            Destination::World => internet.cost.tables(),
            Destination::China => internet.china.cost.tables(),
            Destination::Australia => internet.australia.cost.tables(),
        }
    }

    /// Cost entries of all three bands for a region
    pub fn tiered_costs<'a>(
        &self,
        tiers: TierTables<'a>,
        kind: &'static str,
        region: &str,
    ) -> Result<[&'a Cost; 3], PricingError> {
        let [t1, t2, t3] = tiers.tables;
        let [l1, l2, l3] = tiers.labels;
        Ok([
            regional(t1, kind, l1, region)?,
            regional(t2, kind, l2, region)?,
            regional(t3, kind, l3, region)?,
        ])
    }
}
