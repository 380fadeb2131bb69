//! User-authored usage files describing the resources to price.

pub mod files;
pub mod models;

pub use files::{list_usage_files, load_usage_file, parse_usage};
pub use models::{
    BucketUsage, DiskUsage, InstanceUsage, MonitoringUsage, NatGatewayUsage, TrafficUsage,
    UsageFile, VpnTunnelUsage,
};
