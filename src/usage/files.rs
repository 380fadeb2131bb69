use crate::error::PricingError;
use crate::usage::models::UsageFile;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// YAML usage files in `dir`, sorted by file name.
///
/// Any regular file whose name contains `.yml` is picked up.
pub fn list_usage_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, PricingError> {
    let dir = dir.as_ref();
    info!("Directory with YAML usage files: '{}'", dir.display());

    let entries = std::fs::read_dir(dir).map_err(|e| PricingError::from_io(e, dir))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        if name.to_string_lossy().contains(".yml") {
            debug!("YAML usage file '{}' found", name.to_string_lossy());
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

pub fn parse_usage(yaml: &str, origin: impl AsRef<Path>) -> Result<UsageFile, PricingError> {
    serde_yaml::from_str(yaml).map_err(|source| {
        warn!(
            "Usage file '{}' could not be processed. Make sure it is not another YAML file (like the price list).",
            origin.as_ref().display()
        );
        PricingError::Parse {
            path: origin.as_ref().to_path_buf(),
            source,
        }
    })
}

pub fn load_usage_file(path: impl AsRef<Path>) -> Result<UsageFile, PricingError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| PricingError::from_io(e, path))?;
    parse_usage(&content, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const USAGE: &str = r#"
project: my-project
region: europe-west4
discount: 0.9
instances:
  - name: web
    type: e2-standard-2
    commitment: 1
    os: win
    external-ip: 1
    disks:
      - name: web-boot
        type: pd-balanced
        data: 20
vpn-tunnels:
  - name: office
nat-gateways:
  - data: 100
traffic:
  - world: 1500
    china: 20
"#;

    #[test]
    fn test_parse_usage_file() {
        let usage = parse_usage(USAGE, "usage.yml").unwrap();
        assert_eq!(usage.project.as_deref(), Some("my-project"));
        assert_eq!(usage.discount, 0.9);

        let instance = &usage.instances[0];
        assert_eq!(instance.machine_type, "e2-standard-2");
        assert_eq!(instance.commitment, 1);
        assert_eq!(instance.external_ip, 1);
        assert!(!instance.spot);
        assert_eq!(instance.disks[0].disk_type, "pd-balanced");
        assert_eq!(instance.disks[0].data, 20.0);

        assert_eq!(usage.vpn_tunnels[0].name.as_deref(), Some("office"));
        assert_eq!(usage.nat_gateways[0].data, 100.0);
        assert_eq!(usage.traffic[0].world, 1500.0);
        assert_eq!(usage.traffic[0].australia, 0.0);
    }

    #[test]
    fn test_parse_rejects_price_list_shape() {
        let err = parse_usage("instances: {e2-micro: {cost: {}}}", "pricing.yml").unwrap_err();
        assert!(matches!(err, PricingError::Parse { .. }));
    }

    #[test]
    fn test_list_usage_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.yml"), "").unwrap();
        std::fs::write(dir.path().join("a.yml"), "").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();
        std::fs::create_dir(dir.path().join("nested.yml")).unwrap();

        let files = list_usage_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.yml", "b.yml"]);
    }

    #[test]
    fn test_list_missing_dir() {
        let err = list_usage_files("/definitely/not/here").unwrap_err();
        assert!(matches!(err, PricingError::FileNotFound { .. }));
    }
}
