use crate::error::PricingError;
use crate::pricing::cost::{Commitment, Discount};
use crate::pricing::models::{Cost, Destination, PriceCatalog};
use crate::pricing::tiered::{tiered_cost, Bands, MONITORING_BANDS, TRAFFIC_BANDS};
use crate::report::{LineItem, LineItems};
use tracing::info;

/// Modifiers a resource kind takes into account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Honours {
    pub commitment: bool,
    pub terminated: bool,
    pub spot: bool,
}

impl Honours {
    pub const NONE: Self = Self {
        commitment: false,
        terminated: false,
        spot: false,
    };
    pub const ALL: Self = Self {
        commitment: true,
        terminated: true,
        spot: true,
    };
}

/// How one resource kind is priced and reported
#[derive(Debug, Clone, Copy)]
pub struct RateCard {
    /// Value of the `Resource` column; `None` uses the type instead
    pub resource: Option<&'static str>,
    /// Fixed `Type/Class` column value, `None` uses the looked up key
    pub kind: Option<&'static str>,
    pub default_name: &'static str,
    pub honours: Honours,
    pub label: &'static str,
}

pub const VM: RateCard = RateCard {
    resource: Some("vm"),
    kind: None,
    default_name: "default-instance-name",
    honours: Honours::ALL,
    label: "VM",
};

/// The `Resource` column of a license is the operating system
pub const LICENSE: RateCard = RateCard {
    resource: None,
    kind: None,
    default_name: "default-instance-name",
    honours: Honours {
        commitment: true,
        terminated: true,
        spot: false,
    },
    label: "license",
};

pub const EXTERNAL_IP: RateCard = RateCard {
    resource: Some("network"),
    kind: Some("ip"),
    default_name: "default-instance-name",
    honours: Honours::NONE,
    label: "IP",
};

pub const DISK: RateCard = RateCard {
    resource: Some("disk"),
    kind: None,
    default_name: "default-disk-name",
    honours: Honours::NONE,
    label: "disk",
};

pub const BUCKET: RateCard = RateCard {
    resource: Some("bucket"),
    kind: None,
    default_name: "default-bucket-name",
    honours: Honours::NONE,
    label: "bucket",
};

pub const RETRIEVAL: RateCard = RateCard {
    resource: Some("retrieval"),
    kind: None,
    default_name: "default-bucket-name",
    honours: Honours::NONE,
    label: "retrieval",
};

pub const VPN_TUNNEL: RateCard = RateCard {
    resource: Some("network"),
    kind: Some("vpn-tunnel"),
    default_name: "default-vpn-tunnel",
    honours: Honours::NONE,
    label: "VPN tunnel",
};

pub const NAT_GATEWAY: RateCard = RateCard {
    resource: Some("network"),
    kind: Some("nat-gateway"),
    default_name: "default-nat-gateway",
    honours: Honours::NONE,
    label: "NAT gateway",
};

pub const MONITORING: RateCard = RateCard {
    resource: Some("monitoring"),
    kind: Some("data"),
    default_name: "default-monitoring-name",
    honours: Honours::NONE,
    label: "monitoring data",
};

pub const TRAFFIC: RateCard = RateCard {
    resource: Some("network"),
    kind: None,
    default_name: "default-internet-traffic",
    honours: Honours::NONE,
    label: "internet egress traffic",
};

/// Usage state of a resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub commitment: Commitment,
    pub terminated: bool,
    pub spot: bool,
}

/// Price basis selected from the modifiers, highest priority first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceMode {
    Committed(Commitment),
    Terminated,
    Spot,
    OnDemand,
}

impl PriceMode {
    /// Commitment beats terminated, which beats spot, which beats on-demand
    pub fn select(honours: Honours, modifiers: &Modifiers) -> Self {
        if honours.commitment && modifiers.commitment != Commitment::None {
            Self::Committed(modifiers.commitment)
        } else if honours.terminated && modifiers.terminated {
            Self::Terminated
        } else if honours.spot && modifiers.spot {
            Self::Spot
        } else {
            Self::OnDemand
        }
    }

    fn unit_price(&self, cost: &Cost) -> Result<f64, PricingError> {
        match self {
            Self::Committed(commitment) => cost.monthly_committed(*commitment),
            Self::Terminated => Ok(0.0),
            Self::Spot => cost.monthly_spot(),
            Self::OnDemand => cost.monthly(),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Self::Committed(Commitment::OneYear) => "1Y CUD price",
            Self::Committed(Commitment::ThreeYears) => "3Y CUD price",
            Self::Terminated => "Price (terminated)",
            Self::Spot => "Spot price",
            Self::Committed(Commitment::None) | Self::OnDemand => "Price",
        }
    }
}

/// Quantity and the cost entries it is billed against
#[derive(Debug, Clone, Copy)]
pub enum Rate<'a> {
    /// `quantity` units at one price. Use 1.0 for a flat monthly fee.
    Flat { cost: &'a Cost, quantity: f64 },
    Tiered {
        costs: [&'a Cost; 3],
        quantity: f64,
        bands: &'static Bands,
    },
}

/// Monthly price of one resource after modifiers and discount
pub fn evaluate(
    card: &RateCard,
    rate: Rate<'_>,
    modifiers: &Modifiers,
    discount: Discount,
) -> Result<f64, PricingError> {
    let mode = PriceMode::select(card.honours, modifiers);
    if mode == PriceMode::Terminated {
        return Ok(0.0);
    }

    let price = match rate {
        Rate::Flat { cost, quantity } => mode.unit_price(cost)? * quantity,
        Rate::Tiered {
            costs,
            quantity,
            bands,
        } => {
            let [c1, c2, c3] = costs;
            let prices = [
                mode.unit_price(c1)?,
                mode.unit_price(c2)?,
                mode.unit_price(c3)?,
            ];
            tiered_cost(quantity, bands, prices)
        }
    };
    Ok(discount.apply(price))
}

/// Where a resource lives and what it is called
#[derive(Debug, Clone, Copy)]
pub struct Target<'s> {
    pub name: Option<&'s str>,
    pub region: &'s str,
    pub discount: Discount,
}

impl<'s> Target<'s> {
    fn name_or(&self, card: &RateCard) -> &'s str {
        match self.name {
            Some(name) if !name.is_empty() => name,
            _ => card.default_name,
        }
    }
}

/// Compute Engine instance usage
#[derive(Debug, Clone, Copy)]
pub struct InstanceSpec<'s> {
    pub machine_type: &'s str,
    pub modifiers: Modifiers,
    pub os: Option<&'s str>,
    pub external_ips: u32,
}

/// Report columns of one priced resource
#[derive(Debug, Clone, Copy)]
struct Entry<'k> {
    resource: &'k str,
    kind: &'k str,
    cost: f64,
    data: f64,
    commitment: Commitment,
}

impl<'k> Entry<'k> {
    fn new(card: &RateCard, key: &'k str, cost: f64, data: f64) -> Self {
        Self {
            resource: card.resource.unwrap_or(key),
            kind: card.kind.unwrap_or(key),
            cost,
            data,
            commitment: Commitment::None,
        }
    }
}

/// Prices usage records against a catalog and records line items
pub struct CostCalculator<'a> {
    catalog: &'a PriceCatalog,
    project: &'a str,
    file: &'a str,
}

impl<'a> CostCalculator<'a> {
    pub fn new(catalog: &'a PriceCatalog, project: &'a str, file: &'a str) -> Self {
        Self {
            catalog,
            project,
            file,
        }
    }

    fn record(&self, items: &mut LineItems, card: &RateCard, target: &Target<'_>, entry: Entry<'_>) {
        items.push(LineItem {
            project: self.project.to_string(),
            region: target.region.to_string(),
            resource: entry.resource.to_string(),
            kind: entry.kind.to_string(),
            name: target.name_or(card).to_string(),
            cost: entry.cost,
            data: entry.data,
            commitment: entry.commitment.years(),
            discount: target.discount.value(),
            file: self.file.to_string(),
        });
    }

    /// Compute, license and external IP price of an instance
    pub fn price_instance(
        &self,
        items: &mut LineItems,
        target: &Target<'_>,
        spec: &InstanceSpec<'_>,
    ) -> Result<f64, PricingError> {
        let vm = self.price_vm(items, target, spec.machine_type, &spec.modifiers)?;
        let license = match spec.os {
            Some(os) if !os.is_empty() => {
                self.price_license(items, target, spec.machine_type, os, &spec.modifiers)?
            }
            _ => 0.0,
        };
        let ip = self.price_external_ip(items, target, spec.external_ips, spec.modifiers.terminated)?;
        Ok(vm + license + ip)
    }

    pub fn price_vm(
        &self,
        items: &mut LineItems,
        target: &Target<'_>,
        machine_type: &str,
        modifiers: &Modifiers,
    ) -> Result<f64, PricingError> {
        let cost = self.catalog.instance_cost(machine_type, target.region)?;
        let price = evaluate(&VM, Rate::Flat { cost, quantity: 1.0 }, modifiers, target.discount)?;
        self.log(&VM, target, PriceMode::select(VM.honours, modifiers), price);
        let entry = Entry {
            commitment: modifiers.commitment,
            ..Entry::new(&VM, machine_type, price, 0.0)
        };
        self.record(items, &VM, target, entry);
        Ok(price)
    }

    /// Operating system license. The `Resource` column holds the OS and the
    /// region is left empty since licenses are not regional.
    pub fn price_license(
        &self,
        items: &mut LineItems,
        target: &Target<'_>,
        machine_type: &str,
        os: &str,
        modifiers: &Modifiers,
    ) -> Result<f64, PricingError> {
        let cost = self.catalog.license_cost(machine_type, os)?;
        let price = evaluate(&LICENSE, Rate::Flat { cost, quantity: 1.0 }, modifiers, target.discount)?;
        self.log(&LICENSE, target, PriceMode::select(LICENSE.honours, modifiers), price);
        let entry = Entry {
            resource: os,
            kind: machine_type,
            cost: price,
            data: 0.0,
            commitment: modifiers.commitment,
        };
        let global = Target {
            region: "",
            ..*target
        };
        self.record(items, &LICENSE, &global, entry);
        Ok(price)
    }

    /// External IPs of an instance. A terminated instance keeps its IPs
    /// reserved and pays the unused IP price.
    pub fn price_external_ip(
        &self,
        items: &mut LineItems,
        target: &Target<'_>,
        count: u32,
        terminated: bool,
    ) -> Result<f64, PricingError> {
        if count == 0 {
            return Ok(0.0);
        }
        let cost = if terminated {
            self.catalog.ip_unused_cost(target.region)?
        } else {
            self.catalog.ip_vm_cost(target.region)?
        };
        let quantity = f64::from(count);
        let price = evaluate(
            &EXTERNAL_IP,
            Rate::Flat { cost, quantity },
            &Modifiers::default(),
            target.discount,
        )?;
        info!(
            "Price '{}' {} {}IP per month: ${:.2} {}",
            target.name_or(&EXTERNAL_IP),
            count,
            if terminated { "unused " } else { "" },
            price,
            target.discount.annotation()
        );
        self.record(items, &EXTERNAL_IP, target, Entry::new(&EXTERNAL_IP, "ip", price, quantity));
        Ok(price)
    }

    pub fn price_disk(
        &self,
        items: &mut LineItems,
        target: &Target<'_>,
        disk_type: &str,
        data: f64,
    ) -> Result<f64, PricingError> {
        let cost = self.catalog.disk_cost(disk_type, target.region)?;
        self.price_volume(items, &DISK, target, cost, disk_type, data)
    }

    /// Cloud Storage bucket plus its retrieval fee when `retrieval` is set.
    /// Returns the sum of both.
    pub fn price_bucket(
        &self,
        items: &mut LineItems,
        target: &Target<'_>,
        class: &str,
        data: f64,
        retrieval: f64,
    ) -> Result<f64, PricingError> {
        let cost = self.catalog.bucket_cost(class, target.region)?;
        let mut price = self.price_volume(items, &BUCKET, target, cost, class, data)?;
        if retrieval > 0.0 {
            let cost = self.catalog.retrieval_cost(class, target.region)?;
            price += self.price_volume(items, &RETRIEVAL, target, cost, class, retrieval)?;
        }
        Ok(price)
    }

    fn price_volume(
        &self,
        items: &mut LineItems,
        card: &RateCard,
        target: &Target<'_>,
        cost: &Cost,
        key: &str,
        data: f64,
    ) -> Result<f64, PricingError> {
        let price = evaluate(
            card,
            Rate::Flat {
                cost,
                quantity: data,
            },
            &Modifiers::default(),
            target.discount,
        )?;
        info!(
            "Price '{}' {} {:.2} GiB per month: ${:.2} {}",
            target.name_or(card),
            card.label,
            data,
            price,
            target.discount.annotation()
        );
        self.record(items, card, target, Entry::new(card, key, price, data));
        Ok(price)
    }

    pub fn price_vpn_tunnel(
        &self,
        items: &mut LineItems,
        target: &Target<'_>,
    ) -> Result<f64, PricingError> {
        let cost = self.catalog.vpn_tunnel_cost(target.region)?;
        let price = evaluate(
            &VPN_TUNNEL,
            Rate::Flat { cost, quantity: 1.0 },
            &Modifiers::default(),
            target.discount,
        )?;
        self.log(&VPN_TUNNEL, target, PriceMode::OnDemand, price);
        self.record(items, &VPN_TUNNEL, target, Entry::new(&VPN_TUNNEL, "vpn-tunnel", price, 0.0));
        Ok(price)
    }

    /// Gateway fee plus processed data, reported as one line item
    pub fn price_nat_gateway(
        &self,
        items: &mut LineItems,
        target: &Target<'_>,
        data: f64,
    ) -> Result<f64, PricingError> {
        let gateway = self.catalog.nat_gateway_cost(target.region)?;
        let processed = self.catalog.nat_data_cost(target.region)?;
        let none = Modifiers::default();
        let price = evaluate(
            &NAT_GATEWAY,
            Rate::Flat {
                cost: gateway,
                quantity: 1.0,
            },
            &none,
            target.discount,
        )? + evaluate(
            &NAT_GATEWAY,
            Rate::Flat {
                cost: processed,
                quantity: data,
            },
            &none,
            target.discount,
        )?;
        self.log(&NAT_GATEWAY, target, PriceMode::OnDemand, price);
        self.record(items, &NAT_GATEWAY, target, Entry::new(&NAT_GATEWAY, "nat-gateway", price, data));
        Ok(price)
    }

    /// Cloud Monitoring data in MiB
    pub fn price_monitoring(
        &self,
        items: &mut LineItems,
        target: &Target<'_>,
        data: f64,
    ) -> Result<f64, PricingError> {
        if data <= 0.0 {
            return Ok(0.0);
        }
        let costs =
            self.catalog
                .tiered_costs(self.catalog.monitoring_tiers(), "monitoring data", target.region)?;
        let rate = Rate::Tiered {
            costs,
            quantity: data,
            bands: &MONITORING_BANDS,
        };
        self.price_tiered(items, &MONITORING, target, "data", rate)
    }

    /// Internet egress traffic in GiB, one line item per destination class
    pub fn price_traffic(
        &self,
        items: &mut LineItems,
        target: &Target<'_>,
        world: f64,
        china: f64,
        australia: f64,
    ) -> Result<f64, PricingError> {
        let mut total = 0.0;
        for (destination, quantity) in [
            (Destination::World, world),
            (Destination::China, china),
            (Destination::Australia, australia),
        ] {
            total += self.price_egress(items, target, destination, quantity)?;
        }
        info!(
            "Price '{}' total internet egress traffic per month: ${:.2} {}",
            target.name_or(&TRAFFIC),
            total,
            target.discount.annotation()
        );
        Ok(total)
    }

    /// Egress traffic to one destination class. The quantity is banded on
    /// its own volume, independent of the other destinations.
    pub fn price_egress(
        &self,
        items: &mut LineItems,
        target: &Target<'_>,
        destination: Destination,
        quantity: f64,
    ) -> Result<f64, PricingError> {
        if quantity <= 0.0 {
            return Ok(0.0);
        }
        let costs = self.catalog.tiered_costs(
            self.catalog.egress_tiers(destination),
            "internet egress traffic",
            target.region,
        )?;
        let rate = Rate::Tiered {
            costs,
            quantity,
            bands: &TRAFFIC_BANDS,
        };
        self.price_tiered(items, &TRAFFIC, target, destination.line_type(), rate)
    }

    fn price_tiered(
        &self,
        items: &mut LineItems,
        card: &RateCard,
        target: &Target<'_>,
        key: &str,
        rate: Rate<'_>,
    ) -> Result<f64, PricingError> {
        let (quantity, unit) = match rate {
            Rate::Tiered { quantity, bands, .. } => (quantity, bands.unit),
            Rate::Flat { quantity, .. } => (quantity, "units"),
        };
        let price = evaluate(card, rate, &Modifiers::default(), target.discount)?;
        info!(
            "Price '{}' {:.2} {} {} ({}) per month: ${:.2} {}",
            target.name_or(card),
            quantity,
            unit,
            card.label,
            key,
            price,
            target.discount.annotation()
        );
        self.record(items, card, target, Entry::new(card, key, price, quantity));
        Ok(price)
    }

    fn log(&self, card: &RateCard, target: &Target<'_>, mode: PriceMode, price: f64) {
        info!(
            "{} '{}' {} per month: ${:.2} {}",
            mode.describe(),
            target.name_or(card),
            card.label,
            price,
            target.discount.annotation()
        );
    }
}
