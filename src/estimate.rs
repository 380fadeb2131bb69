use crate::error::PricingError;
use crate::pricing::{Commitment, CostCalculator, Discount, InstanceSpec, Modifiers, PriceCatalog, Target};
use crate::report::LineItems;
use crate::usage::{list_usage_files, load_usage_file, BucketUsage, DiskUsage, UsageFile};
use std::path::{Path, PathBuf};
use tracing::info;

/// Project, region and discount used when a usage file does not set them
#[derive(Debug, Clone, PartialEq)]
pub struct Defaults {
    pub project: String,
    pub region: String,
    /// 0 means no discount
    pub discount: f64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            project: "default-project-id".to_string(),
            region: "us-central1".to_string(),
            discount: 0.0,
        }
    }
}

/// Resolved file level settings
#[derive(Debug, Clone, Copy)]
struct Scope<'s> {
    region: &'s str,
    discount: f64,
}

impl<'s> Scope<'s> {
    /// Record values win over the scope; an empty region or zero discount
    /// counts as unset.
    fn target(&self, name: Option<&'s str>, region: Option<&'s str>, discount: f64) -> Target<'s> {
        let region = match region {
            Some(region) if !region.is_empty() => region,
            _ => self.region,
        };
        let discount = if discount > 0.0 { discount } else { self.discount };
        Target {
            name,
            region,
            discount: Discount::resolve(discount),
        }
    }
}

/// Runs usage files through the calculator and collects line items
pub struct Estimator<'a> {
    catalog: &'a PriceCatalog,
    defaults: Defaults,
}

impl<'a> Estimator<'a> {
    pub fn new(catalog: &'a PriceCatalog, defaults: Defaults) -> Self {
        Self { catalog, defaults }
    }

    /// Price every usage file in `dir`
    pub fn run_dir(&self, dir: impl AsRef<Path>) -> Result<LineItems, PricingError> {
        let files = list_usage_files(dir)?;
        self.run_files(&files)
    }

    /// Price the given files in order. The first failing lookup aborts.
    pub fn run_files(&self, files: &[PathBuf]) -> Result<LineItems, PricingError> {
        let mut items = LineItems::new();
        for path in files {
            let usage = load_usage_file(path)?;
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            self.price_file(&mut items, &usage, &name)?;
        }
        Ok(items)
    }

    /// Price one parsed usage file into `items`
    pub fn price_file(
        &self,
        items: &mut LineItems,
        usage: &UsageFile,
        file: &str,
    ) -> Result<f64, PricingError> {
        info!("Processing usage file '{}'", file);

        let project = match usage.project.as_deref() {
            Some(project) if !project.is_empty() => project,
            _ => self.defaults.project.as_str(),
        };
        let scope = Scope {
            region: match usage.region.as_deref() {
                Some(region) if !region.is_empty() => region,
                _ => self.defaults.region.as_str(),
            },
            discount: if usage.discount > 0.0 {
                usage.discount
            } else {
                self.defaults.discount
            },
        };
        self.catalog.check_region(scope.region)?;

        let calculator = CostCalculator::new(self.catalog, project, file);
        let mut total = 0.0;

        for record in &usage.monitoring {
            let target = self.checked(scope.target(record.name.as_deref(), record.region.as_deref(), record.discount))?;
            total += calculator.price_monitoring(items, &target, record.data)?;
        }

        for record in &usage.vpn_tunnels {
            let target = self.checked(scope.target(record.name.as_deref(), record.region.as_deref(), record.discount))?;
            total += calculator.price_vpn_tunnel(items, &target)?;
        }

        for record in &usage.nat_gateways {
            let target = self.checked(scope.target(record.name.as_deref(), record.region.as_deref(), record.discount))?;
            total += calculator.price_nat_gateway(items, &target, record.data)?;
        }

        for record in &usage.traffic {
            let target = self.checked(scope.target(record.name.as_deref(), record.region.as_deref(), record.discount))?;
            total += calculator.price_traffic(items, &target, record.world, record.china, record.australia)?;
        }

        let mut attached_disks: Vec<&DiskUsage> = Vec::new();
        let mut attached_buckets: Vec<&BucketUsage> = Vec::new();

        for record in &usage.instances {
            let target = self.checked(scope.target(record.name.as_deref(), record.region.as_deref(), record.discount))?;
            let spec = InstanceSpec {
                machine_type: &record.machine_type,
                modifiers: Modifiers {
                    commitment: Commitment::from_years(record.commitment),
                    terminated: record.terminated,
                    spot: record.spot,
                },
                os: record.os.as_deref(),
                external_ips: record.external_ip,
            };
            total += calculator.price_instance(items, &target, &spec)?;

            // attached resources fall back to the file settings, not the instance's
            attached_disks.extend(&record.disks);
            attached_buckets.extend(&record.buckets);
        }

        for record in usage.disks.iter().chain(attached_disks) {
            let target = self.checked(scope.target(record.name.as_deref(), record.region.as_deref(), record.discount))?;
            total += calculator.price_disk(items, &target, &record.disk_type, record.data)?;
        }

        for record in usage.buckets.iter().chain(attached_buckets) {
            let target = self.checked(scope.target(record.name.as_deref(), record.region.as_deref(), record.discount))?;
            total += calculator.price_bucket(items, &target, &record.class, record.data, record.retrieval)?;
        }

        info!("Usage file '{}' priced at ${:.2} per month", file, total);
        Ok(total)
    }

    fn checked<'t>(&self, target: Target<'t>) -> Result<Target<'t>, PricingError> {
        self.catalog.check_region(target.region)?;
        Ok(target)
    }
}
