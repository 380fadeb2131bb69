pub mod calculator;
pub mod catalog;
pub mod cost;
pub mod loader;
pub mod models;
pub mod tiered;
pub mod updater;

pub use calculator::{CostCalculator, InstanceSpec, Modifiers, Target};
pub use catalog::RegionKind;
pub use cost::{Commitment, Discount};
pub use loader::{download_pricing_from_url, load_catalog, parse_catalog, DEFAULT_PRICING_URL};
pub use models::{Cost, Destination, PriceCatalog};
pub use tiered::{tiered_cost, Bands, MONITORING_BANDS, TRAFFIC_BANDS};
pub use updater::{cached_pricing_path, PricingUpdater};
