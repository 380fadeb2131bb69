use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading price and usage data or pricing resources
#[derive(Debug, Error)]
pub enum PricingError {
    /// Input file or directory does not exist
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// Malformed YAML input
    #[error("Failed to parse '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Unknown region, machine type, storage class or SKU
    #[error("{kind} '{key}' not found{}", region_suffix(.region))]
    NotFound {
        kind: &'static str,
        key: String,
        region: Option<String>,
    },

    /// Mandatory price figure absent from a cost entry
    #[error("Price per {what} not found")]
    MissingPrice { what: &'static str },

    /// Price file download failed
    #[error("Download failed: {0}")]
    Download(String),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

fn region_suffix(region: &Option<String>) -> String {
    match region {
        Some(region) => format!(" in region '{}'", region),
        None => String::new(),
    }
}

impl PricingError {
    pub fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
            region: None,
        }
    }

    pub fn not_found_in_region(
        kind: &'static str,
        key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
            region: Some(region.into()),
        }
    }

    /// Map an I/O error on `path` to `FileNotFound` when the file is missing
    pub fn from_io(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path: path.into() }
        } else {
            Self::Io(err)
        }
    }

    /// Process exit code reported by the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. } | Self::Io(_) => 9,
            Self::Parse { .. } | Self::Csv(_) => 8,
            Self::NotFound { .. } | Self::MissingPrice { .. } => 1,
            Self::Download(_) | Self::Http(_) => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = PricingError::not_found_in_region("machine type", "n2-standard-4", "mars-east1");
        assert_eq!(
            error.to_string(),
            "machine type 'n2-standard-4' not found in region 'mars-east1'"
        );

        let error = PricingError::not_found("region", "mars-east1");
        assert_eq!(error.to_string(), "region 'mars-east1' not found");
    }

    #[test]
    fn test_missing_price_display() {
        let error = PricingError::MissingPrice { what: "month" };
        assert_eq!(error.to_string(), "Price per month not found");
    }

    #[test]
    fn test_from_io_maps_missing_file() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = PricingError::from_io(io, "pricing.yml");
        assert!(matches!(error, PricingError::FileNotFound { .. }));
        assert_eq!(error.exit_code(), 9);

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(
            PricingError::from_io(io, "pricing.yml"),
            PricingError::Io(_)
        ));
    }
}
