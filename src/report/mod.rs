//! Cost report: the ordered list of priced resources, its table rendering
//! and the CSV export.

pub mod export;
pub mod table;

pub use export::{export_csv, read_csv, CSV_HEADER};
pub use table::{render_table, styled_table};

use serde::{Deserialize, Serialize};

/// One row of the cost report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub project: String,
    pub region: String,
    pub resource: String,
    /// Machine type, disk type, storage class or network item kind
    pub kind: String,
    pub name: String,
    pub cost: f64,
    pub data: f64,
    pub commitment: u8,
    pub discount: f64,
    pub file: String,
}

/// Append-only collection of line items in pricing order
#[derive(Debug, Clone, Default)]
pub struct LineItems {
    items: Vec<LineItem>,
}

impl LineItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item. Items without a positive cost are dropped.
    pub fn push(&mut self, item: LineItem) -> bool {
        if item.cost > 0.0 {
            self.items.push(item);
            true
        } else {
            false
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line item costs
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.cost).sum()
    }

    pub fn into_vec(self) -> Vec<LineItem> {
        self.items
    }
}

impl<'a> IntoIterator for &'a LineItems {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
pub(crate) fn sample_item(name: &str, cost: f64) -> LineItem {
    LineItem {
        project: "my-project".to_string(),
        region: "europe-west4".to_string(),
        resource: "vm".to_string(),
        kind: "e2-standard-2".to_string(),
        name: name.to_string(),
        cost,
        data: 0.0,
        commitment: 0,
        discount: 1.0,
        file: "usage.yml".to_string(),
    }
}
