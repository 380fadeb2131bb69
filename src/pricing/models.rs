use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Price figures for one SKU in one region
///
/// Every field is optional in the price file. `month` is the baseline that
/// all calculations fall back to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cost {
    pub hour: Option<f64>,
    pub hour_spot: Option<f64>,
    pub month: Option<f64>,
    pub month_1y: Option<f64>,
    pub month_3y: Option<f64>,
    pub month_spot: Option<f64>,
}

/// Region name to cost entry
pub type RegionalCost = BTreeMap<String, Cost>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CostTable {
    pub cost: RegionalCost,
}

/// Price catalog metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub copyright: String,
    pub generated: String,
    pub timestamp: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    pub location: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DualRegion {
    pub regions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiRegion {
    pub description: String,
}

/// Compute Engine machine type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineType {
    pub cpu: f64,
    pub ram: f64,
    pub cost: RegionalCost,
}

/// Persistent disk type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskType {
    #[serde(rename = "type")]
    pub kind: String,
    pub cost: RegionalCost,
}

/// Operating system licenses for one machine type, keyed by OS name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct License {
    pub cost: BTreeMap<String, Cost>,
}

/// Three volume bands for internet egress traffic (GiB)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrafficTiers {
    #[serde(rename = "0-1")]
    pub first: RegionalCost,
    #[serde(rename = "1-10")]
    pub second: RegionalCost,
    #[serde(rename = "10n")]
    pub third: RegionalCost,
}

/// Three volume bands for monitoring data (MiB)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringTiers {
    #[serde(rename = "0-100000")]
    pub first: RegionalCost,
    #[serde(rename = "100000-250000")]
    pub second: RegionalCost,
    #[serde(rename = "250000n")]
    pub third: RegionalCost,
}

/// Borrowed view over three band tables with a label per band
#[derive(Debug, Clone, Copy)]
pub struct TierTables<'a> {
    pub labels: [&'static str; 3],
    pub tables: [&'a RegionalCost; 3],
}

impl TrafficTiers {
    pub fn tables(&self) -> TierTables<'_> {
        TierTables {
            labels: ["0-1 TiB", "1-10 TiB", "10n TiB"],
            tables: [&self.first, &self.second, &self.third],
        }
    }
}

impl MonitoringTiers {
    pub fn tables(&self) -> TierTables<'_> {
        TierTables {
            labels: ["0-100,000 MiB", "100,000-250,000 MiB", "250,000n MiB"],
            tables: [&self.first, &self.second, &self.third],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TieredCostTable<T> {
    pub cost: T,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Monitoring {
    pub data: TieredCostTable<MonitoringTiers>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Storage {
    pub bucket: BTreeMap<String, CostTable>,
    pub retrieval: BTreeMap<String, CostTable>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IpCosts {
    pub unused: CostTable,
    pub vm: CostTable,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VpnCosts {
    pub tunnel: CostTable,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NatCosts {
    pub gateway: CostTable,
    pub data: CostTable,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InternetEgress {
    pub cost: TrafficTiers,
    pub china: TieredCostTable<TrafficTiers>,
    pub australia: TieredCostTable<TrafficTiers>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Egress {
    pub internet: InternetEgress,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Traffic {
    pub egress: Egress,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Network {
    pub ip: IpCosts,
    pub vpn: VpnCosts,
    pub nat: NatCosts,
    pub traffic: Traffic,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Compute {
    pub storage: BTreeMap<String, DiskType>,
    pub instance: BTreeMap<String, MachineType>,
    pub license: BTreeMap<String, License>,
    pub network: Network,
}

/// The whole price file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceCatalog {
    pub about: About,
    pub region: BTreeMap<String, Region>,
    #[serde(rename = "dual-region")]
    pub dual_region: BTreeMap<String, DualRegion>,
    #[serde(rename = "multi-region")]
    pub multi_region: BTreeMap<String, MultiRegion>,
    pub monitoring: Monitoring,
    pub storage: Storage,
    pub compute: Compute,
}

/// Egress destination class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    World,
    China,
    Australia,
}

impl Destination {
    /// Line item type for this destination
    pub fn line_type(&self) -> &'static str {
        match self {
            Self::World => "traffic",
            Self::China => "traffic-cn",
            Self::Australia => "traffic-au",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::World => "worldwide",
            Self::China => "China",
            Self::Australia => "Australia",
        }
    }
}
