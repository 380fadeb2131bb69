use crate::error::PricingError;
use crate::pricing::models::Cost;
use std::fmt;
use tracing::warn;

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

impl Cost {
    /// Monthly on-demand price, mandatory for every calculation
    pub fn monthly(&self) -> Result<f64, PricingError> {
        positive(self.month).ok_or(PricingError::MissingPrice { what: "month" })
    }

    /// Monthly committed use price, falling back to the on-demand price
    pub fn monthly_committed(&self, commitment: Commitment) -> Result<f64, PricingError> {
        let (price, label) = match commitment {
            Commitment::None => return self.monthly(),
            Commitment::OneYear => (self.month_1y, "1Y"),
            Commitment::ThreeYears => (self.month_3y, "3Y"),
        };
        match positive(price) {
            Some(price) => Ok(price),
            None => {
                warn!("{} CUD price per month not found! Apply normal monthly price.", label);
                self.monthly()
            }
        }
    }

    pub fn monthly_spot(&self) -> Result<f64, PricingError> {
        match positive(self.month_spot) {
            Some(price) => Ok(price),
            None => {
                warn!("Spot price per month not found! Apply normal monthly price.");
                self.monthly()
            }
        }
    }

    pub fn hourly(&self) -> Result<f64, PricingError> {
        positive(self.hour).ok_or(PricingError::MissingPrice { what: "hour" })
    }

    pub fn hourly_spot(&self) -> Result<f64, PricingError> {
        match positive(self.hour_spot) {
            Some(price) => Ok(price),
            None => {
                warn!("Spot price per hour not found! Apply normal hour price.");
                self.hourly()
            }
        }
    }
}

/// Committed use term
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Commitment {
    #[default]
    None,
    OneYear,
    ThreeYears,
}

impl Commitment {
    /// Accepts 0, 1 or 3 years. Anything else means no commitment.
    pub fn from_years(years: i64) -> Self {
        match years {
            0 => Self::None,
            1 => Self::OneYear,
            3 => Self::ThreeYears,
            other => {
                warn!("Invalid commitment: '{}' years, using no commitment", other);
                Self::None
            }
        }
    }

    pub fn years(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::OneYear => 1,
            Self::ThreeYears => 3,
        }
    }
}

/// Price multiplier applied after all other modifiers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Discount(f64);

impl Default for Discount {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Discount {
    /// Resolve a raw discount where zero or a negative value means "not set"
    pub fn resolve(input: f64) -> Self {
        if input > 0.0 {
            if input > 1.0 {
                warn!("Discount {:.2} is greater than 1.0 and increases the price", input);
            }
            Self(input)
        } else {
            Self::default()
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn apply(&self, price: f64) -> f64 {
        price * self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == 1.0
    }

    /// Human readable note, empty for the default discount
    pub fn annotation(&self) -> String {
        if self.is_default() {
            String::new()
        } else {
            format!("({:.2} discount applied)", self.0)
        }
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
