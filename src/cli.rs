use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gcosts",
    version,
    about = "Calculate and save the costs of Google Cloud Platform products and resources",
    long_about = "Calculate estimated monthly costs of Google Cloud Platform products and resources.\n\
                  Prices come from a YAML price list, resources from YAML usage files."
)]
pub struct Cli {
    #[command(flatten)]
    pub pricing: PricingArgs,

    /// Configuration file path (default: gcosts.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the price list comes from
#[derive(Args, Debug, Clone, Default)]
pub struct PricingArgs {
    /// YAML file with GCP pricing information
    #[arg(short, long, global = true)]
    pub pricing: Option<PathBuf>,

    /// Download and cache the pricing file automatically
    #[arg(long, global = true)]
    pub download: bool,

    /// URL for the pricing file if different than default
    #[arg(long, global = true)]
    pub pricing_file_url: Option<String>,

    /// Force redownload of the pricing file even if it is cached
    #[arg(long, global = true)]
    pub force_redownload: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Calculate costs of all usage files in a directory
    #[command(visible_alias = "calculate", alias = "calculator")]
    Calc {
        /// Directory with YAML usage files
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Export results to CSV file
        #[arg(short = 'e', long)]
        csv: Option<PathBuf>,

        /// Overwrite an existing CSV file without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Google Cloud regions
    Region {
        #[command(subcommand)]
        kind: Option<RegionCommands>,

        #[command(flatten)]
        args: RegionArgs,
    },

    /// Price list information
    About {
        #[command(subcommand)]
        action: Option<AboutCommands>,
    },

    /// Google Compute Engine prices
    Compute {
        #[command(subcommand)]
        resource: ComputeCommands,
    },

    /// Google Cloud Storage prices
    Storage {
        #[command(subcommand)]
        resource: StorageCommands,
    },

    /// Google Cloud Monitoring prices
    Monitoring {
        #[command(subcommand)]
        resource: MonitoringCommands,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct RegionArgs {
    /// Google Cloud region
    #[arg(short, long)]
    pub region: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum RegionCommands {
    /// Google Cloud dual-regions
    Dual(RegionArgs),
    /// Google Cloud multi-regions
    Multi(RegionArgs),
}

#[derive(Subcommand, Debug, Clone)]
pub enum AboutCommands {
    /// Copyright information of the price list
    Copyright,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ComputeCommands {
    /// Google Compute Engine instances
    Instance {
        /// Machine type
        #[arg(short = 't', long = "type")]
        machine_type: Option<String>,

        #[command(flatten)]
        args: RegionArgs,
    },

    /// Google Compute Engine storage disks
    #[command(alias = "storage")]
    Disk {
        /// Disk type
        #[arg(short = 't', long = "type")]
        disk_type: Option<String>,

        #[command(flatten)]
        args: RegionArgs,
    },

    /// Google Compute Engine operating system licenses
    License {
        /// Machine type
        #[arg(short = 't', long = "type")]
        machine_type: Option<String>,

        /// Operating system license
        #[arg(short = 'l', long)]
        os: Option<String>,
    },

    /// Google Compute Engine network prices
    Network {
        #[command(subcommand)]
        item: NetworkCommands,
    },
}

/// Network prices for one region
#[derive(Args, Debug, Clone)]
pub struct RequiredRegion {
    /// Google Cloud region
    #[arg(short, long)]
    pub region: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkItem {
    Ip,
    Vpn,
    Nat,
    NatData,
    Egress,
    EgressChina,
    EgressAustralia,
}

#[derive(Subcommand, Debug, Clone)]
pub enum NetworkCommands {
    /// External public IP
    Ip(RequiredRegion),
    /// Cloud VPN tunnel
    #[command(alias = "vpn-tunnel")]
    Vpn(RequiredRegion),
    /// Cloud NAT gateway
    #[command(alias = "nat-gateway")]
    Nat(RequiredRegion),
    /// Data processed by Cloud NAT
    NatData(RequiredRegion),
    /// Internet egress traffic
    Egress(RequiredRegion),
    /// Internet egress traffic to China
    EgressChina(RequiredRegion),
    /// Internet egress traffic to Australia
    EgressAustralia(RequiredRegion),
}

impl NetworkCommands {
    pub fn split(&self) -> (NetworkItem, &str) {
        match self {
            Self::Ip(r) => (NetworkItem::Ip, &r.region),
            Self::Vpn(r) => (NetworkItem::Vpn, &r.region),
            Self::Nat(r) => (NetworkItem::Nat, &r.region),
            Self::NatData(r) => (NetworkItem::NatData, &r.region),
            Self::Egress(r) => (NetworkItem::Egress, &r.region),
            Self::EgressChina(r) => (NetworkItem::EgressChina, &r.region),
            Self::EgressAustralia(r) => (NetworkItem::EgressAustralia, &r.region),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum StorageCommands {
    /// Google Cloud Storage buckets
    Bucket {
        /// Storage class
        #[arg(short, long)]
        class: Option<String>,

        #[command(flatten)]
        args: RegionArgs,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum MonitoringCommands {
    /// Cloud Monitoring data ingestion
    Data(RequiredRegion),
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parsing_calc() {
        let args = vec!["gcosts", "calc", "--dir", "usage", "-e", "out.csv", "--yes"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Calc { dir, csv, yes } => {
                assert_eq!(dir, Some(PathBuf::from("usage")));
                assert_eq!(csv, Some(PathBuf::from("out.csv")));
                assert!(yes);
            }
            _ => panic!("Expected Calc command"),
        }
    }

    #[test]
    fn test_cli_parsing_calc_aliases() {
        for alias in ["calculate", "calculator"] {
            let cli = Cli::try_parse_from(vec!["gcosts", alias]).unwrap();
            assert!(matches!(cli.command, Commands::Calc { .. }));
        }
    }

    #[test]
    fn test_cli_parsing_global_pricing_flags() {
        let args = vec![
            "gcosts",
            "region",
            "-p",
            "prices.yml",
            "--download",
            "--pricing-file-url",
            "http://localhost/pricing.yml",
            "--force-redownload",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.pricing.pricing, Some(PathBuf::from("prices.yml")));
        assert!(cli.pricing.download);
        assert!(cli.pricing.force_redownload);
        assert_eq!(
            cli.pricing.pricing_file_url.as_deref(),
            Some("http://localhost/pricing.yml")
        );
    }

    #[test]
    fn test_cli_parsing_region_dual() {
        let cli = Cli::try_parse_from(vec!["gcosts", "region", "dual", "-r", "eur4"]).unwrap();

        match cli.command {
            Commands::Region {
                kind: Some(RegionCommands::Dual(args)),
                ..
            } => assert_eq!(args.region.as_deref(), Some("eur4")),
            _ => panic!("Expected Region dual command"),
        }
    }

    #[test]
    fn test_cli_parsing_compute_instance() {
        let args = vec!["gcosts", "compute", "instance", "-t", "e2-micro", "-r", "us-east1"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Compute {
                resource: ComputeCommands::Instance { machine_type, args },
            } => {
                assert_eq!(machine_type.as_deref(), Some("e2-micro"));
                assert_eq!(args.region.as_deref(), Some("us-east1"));
            }
            _ => panic!("Expected Compute instance command"),
        }
    }

    #[test]
    fn test_cli_parsing_network_requires_region() {
        assert!(Cli::try_parse_from(vec!["gcosts", "compute", "network", "egress"]).is_err());

        let args = vec!["gcosts", "compute", "network", "egress-china", "-r", "us-east1"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Compute {
                resource: ComputeCommands::Network { item },
            } => assert_eq!(item.split(), (NetworkItem::EgressChina, "us-east1")),
            _ => panic!("Expected Compute network command"),
        }
    }

    #[test]
    fn test_cli_parsing_storage_bucket_class() {
        let args = vec!["gcosts", "storage", "bucket", "-c", "NEARLINE", "--config", "my.toml"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
        match cli.command {
            Commands::Storage {
                resource: StorageCommands::Bucket { class, .. },
            } => assert_eq!(class.as_deref(), Some("NEARLINE")),
            _ => panic!("Expected Storage bucket command"),
        }
    }

    #[test]
    fn test_cli_parsing_config_show() {
        let cli = Cli::try_parse_from(vec!["gcosts", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigCommands::Show
            }
        ));
    }
}
