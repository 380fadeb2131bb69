use crate::error::PricingError;
use crate::pricing::models::PriceCatalog;
use sha2::{Digest, Sha256};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Published price list maintained alongside the calculator
pub const DEFAULT_PRICING_URL: &str =
    "https://github.com/Cyclenerd/google-cloud-pricing-cost-calculator/raw/master/pricing.yml";

/// Parse the YAML price catalog. `origin` names the source in errors.
pub fn parse_catalog(yaml: &str, origin: impl AsRef<Path>) -> Result<PriceCatalog, PricingError> {
    serde_yaml::from_str(yaml).map_err(|source| PricingError::Parse {
        path: origin.as_ref().to_path_buf(),
        source,
    })
}

/// Read and parse the price catalog from disk
pub fn load_catalog(path: impl AsRef<Path>) -> Result<PriceCatalog, PricingError> {
    let path = path.as_ref();
    info!("YAML file with GCP pricing information: '{}'", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| PricingError::from_io(e, path))?;
    let catalog = parse_catalog(&content, path)?;

    debug!(
        "Loaded {} regions, {} machine types, {} disk types, {} storage classes",
        catalog.region.len(),
        catalog.compute.instance.len(),
        catalog.compute.storage.len(),
        catalog.storage.bucket.len()
    );
    Ok(catalog)
}

/// Download the price file from a remote URL
pub async fn download_pricing_from_url(url: &str) -> Result<String, PricingError> {
    info!("Downloading pricing file from: {}", url);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| PricingError::Download(format!("Failed to build HTTP client: {}", e)))?;

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(PricingError::Download(format!(
            "Failed to download pricing file: HTTP {}",
            response.status()
        )));
    }

    let content = response
        .text()
        .await
        .map_err(|e| PricingError::Download(format!("Failed to read response: {}", e)))?;

    debug!("Downloaded {} bytes of pricing data", content.len());
    Ok(content)
}

/// Calculate SHA256 hash of content
pub fn calculate_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_catalog() {
        let yaml = r#"
about:
  generated: "2024-05-01"
region:
  us-central1:
    location: Iowa
"#;
        let catalog = parse_catalog(yaml, "pricing.yml").unwrap();
        assert_eq!(catalog.about.generated, "2024-05-01");
        assert_eq!(catalog.region["us-central1"].location, "Iowa");
        assert!(catalog.compute.instance.is_empty());
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse_catalog("region: [unclosed", "broken.yml").unwrap_err();
        assert!(matches!(err, PricingError::Parse { .. }));
        assert!(err.to_string().contains("broken.yml"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_catalog("/definitely/not/here/pricing.yml").unwrap_err();
        assert!(matches!(err, PricingError::FileNotFound { .. }));
    }

    #[test]
    fn test_calculate_hash() {
        assert_eq!(
            calculate_hash("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
