//! Volume based price bands.
//!
//! A quantity is spread over three contiguous bands `[0, first]`,
//! `(first, second]` and `(second, ∞)`. Each band is billed at its own unit
//! price and the partial costs are summed.

/// Upper bounds of the first two bands. The third band is unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bands {
    pub first: f64,
    pub second: f64,
    pub unit: &'static str,
}

/// Cloud Monitoring data, in MiB
pub const MONITORING_BANDS: Bands = Bands {
    first: 100_000.0,
    second: 250_000.0,
    unit: "MiB",
};

/// Internet egress traffic, in GiB (1 TiB and 10 TiB)
pub const TRAFFIC_BANDS: Bands = Bands {
    first: 1024.0,
    second: 10240.0,
    unit: "GiB",
};

/// Cost of `quantity` over `bands` with one unit price per band.
///
/// A quantity exactly on a boundary stays in the lower band.
pub fn tiered_cost(quantity: f64, bands: &Bands, prices: [f64; 3]) -> f64 {
    let [p1, p2, p3] = prices;
    let range1 = bands.first;
    let range2 = bands.second - bands.first;

    if quantity > bands.second {
        (quantity - bands.second) * p3 + range2 * p2 + range1 * p1
    } else if quantity > bands.first {
        (quantity - bands.first) * p2 + range1 * p1
    } else {
        quantity * p1
    }
}
