use crate::error::PricingError;
use crate::pricing::loader::{calculate_hash, download_pricing_from_url};
use chrono::{Datelike, Local, NaiveDate};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Cache file for the ISO week containing `date`, e.g. `pricing_202418.yml`
pub fn cached_pricing_path(cache_dir: &Path, date: NaiveDate) -> PathBuf {
    let week = date.iso_week();
    cache_dir.join(format!("pricing_{}{:02}.yml", week.year(), week.week()))
}

/// Keeps a weekly cached copy of the remote price file
pub struct PricingUpdater {
    remote_url: String,
    cache_dir: PathBuf,
    fallback: PathBuf,
    force: bool,
}

impl PricingUpdater {
    pub fn new(
        remote_url: impl Into<String>,
        cache_dir: impl Into<PathBuf>,
        fallback: impl Into<PathBuf>,
        force: bool,
    ) -> Self {
        Self {
            remote_url: remote_url.into(),
            cache_dir: cache_dir.into(),
            fallback: fallback.into(),
            force,
        }
    }

    /// Path of the price file to use this week.
    ///
    /// Reuses this week's cache unless a refresh is forced. A failed download
    /// falls back to the local price file.
    pub async fn ensure_pricing_file(&self) -> PathBuf {
        self.ensure_pricing_file_on(Local::now().date_naive()).await
    }

    pub async fn ensure_pricing_file_on(&self, today: NaiveDate) -> PathBuf {
        let cached = cached_pricing_path(&self.cache_dir, today);

        if !self.force && cached.is_file() {
            info!("Using cached pricing file: {}", cached.display());
            return cached;
        }

        match self.refresh(&cached).await {
            Ok(()) => cached,
            Err(e) => {
                warn!("Failed to download pricing file: {}", e);
                warn!("Falling back to pricing file: {}", self.fallback.display());
                self.fallback.clone()
            }
        }
    }

    /// Download into `cached`, reporting whether a forced refresh changed it
    async fn refresh(&self, cached: &Path) -> Result<(), PricingError> {
        let content = download_pricing_from_url(&self.remote_url).await?;

        if let Ok(previous) = tokio::fs::read_to_string(cached).await {
            if calculate_hash(&previous) == calculate_hash(&content) {
                info!("Pricing data unchanged");
            } else {
                info!("Pricing data changed");
            }
        }

        tokio::fs::create_dir_all(&self.cache_dir)
            .await
            .map_err(|e| PricingError::from_io(e, &self.cache_dir))?;
        tokio::fs::write(cached, content)
            .await
            .map_err(|e| PricingError::from_io(e, cached))?;

        info!("Pricing file downloaded successfully to: {}", cached.display());
        Ok(())
    }
}
