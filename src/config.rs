use crate::pricing::DEFAULT_PRICING_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "gcosts";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Values used when neither a usage file nor a record sets them
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_project")]
    pub project: String,
    #[serde(default = "default_region")]
    pub region: String,
    /// 0 means no discount
    #[serde(default)]
    pub discount: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            project: default_project(),
            region: default_region(),
            discount: 0.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PricingConfig {
    #[serde(default = "default_pricing_file")]
    pub file: PathBuf,
    #[serde(default = "default_pricing_url")]
    pub url: String,
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            file: default_pricing_file(),
            url: default_pricing_url(),
            cache_dir: default_cache_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    #[serde(default = "default_csv")]
    pub csv: PathBuf,
    #[serde(default = "default_usage_dir")]
    pub usage_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            csv: default_csv(),
            usage_dir: default_usage_dir(),
        }
    }
}

fn default_project() -> String {
    "default-project-id".to_string()
}

fn default_region() -> String {
    "us-central1".to_string()
}

fn default_pricing_file() -> PathBuf {
    PathBuf::from("pricing.yml")
}

fn default_pricing_url() -> String {
    DEFAULT_PRICING_URL.to_string()
}

fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("gcosts")
}

fn default_csv() -> PathBuf {
    PathBuf::from("costs.csv")
}

fn default_usage_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Load `gcosts.toml` (or `path`) and `GCOSTS__*` environment overrides.
///
/// The default file is optional, an explicit path is not.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(CONFIG_FILE).required(false),
    };

    let config = config::Config::builder()
        .add_source(file)
        .add_source(config::Environment::with_prefix("GCOSTS").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if !(0.0..=1.0).contains(&cfg.defaults.discount) {
        anyhow::bail!(
            "Default discount must be between 0 and 1, got {}",
            cfg.defaults.discount
        );
    }

    if cfg.pricing.url.trim().is_empty() {
        anyhow::bail!("Pricing URL cannot be empty");
    }

    if cfg.defaults.region.trim().is_empty() {
        anyhow::bail!("Default region cannot be empty");
    }

    Ok(())
}
