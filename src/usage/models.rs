use serde::{Deserialize, Serialize};

/// Compute Engine instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceUsage {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub machine_type: String,
    pub region: Option<String>,
    pub discount: f64,
    /// Committed use term in years (0, 1 or 3)
    pub commitment: i64,
    pub spot: bool,
    pub terminated: bool,
    /// Operating system license, e.g. `win` or `sles`
    pub os: Option<String>,
    #[serde(rename = "external-ip")]
    pub external_ip: u32,
    pub disks: Vec<DiskUsage>,
    pub buckets: Vec<BucketUsage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskUsage {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub disk_type: String,
    pub region: Option<String>,
    pub discount: f64,
    /// Provisioned size in GiB
    pub data: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketUsage {
    pub name: Option<String>,
    pub class: String,
    pub region: Option<String>,
    pub discount: f64,
    /// Stored data in GiB
    pub data: f64,
    /// Retrieved data in GiB
    pub retrieval: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VpnTunnelUsage {
    pub name: Option<String>,
    pub region: Option<String>,
    pub discount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NatGatewayUsage {
    pub name: Option<String>,
    pub region: Option<String>,
    pub discount: f64,
    /// Processed data in GiB
    pub data: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringUsage {
    pub name: Option<String>,
    pub region: Option<String>,
    pub discount: f64,
    /// Ingested data in MiB
    pub data: f64,
}

/// Internet egress traffic in GiB per destination class
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrafficUsage {
    pub name: Option<String>,
    pub region: Option<String>,
    pub discount: f64,
    pub world: f64,
    pub china: f64,
    pub australia: f64,
}

/// One usage file. Project, region and discount are defaults for every
/// record in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageFile {
    pub project: Option<String>,
    pub region: Option<String>,
    pub discount: f64,
    pub instances: Vec<InstanceUsage>,
    pub disks: Vec<DiskUsage>,
    pub buckets: Vec<BucketUsage>,
    #[serde(rename = "vpn-tunnels")]
    pub vpn_tunnels: Vec<VpnTunnelUsage>,
    #[serde(rename = "nat-gateways")]
    pub nat_gateways: Vec<NatGatewayUsage>,
    pub monitoring: Vec<MonitoringUsage>,
    pub traffic: Vec<TrafficUsage>,
}
