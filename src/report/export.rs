use crate::error::PricingError;
use crate::report::{LineItem, LineItems};
use std::io::{Read, Write};
use tracing::info;

pub const CSV_HEADER: [&str; 10] = [
    "Project",
    "Region",
    "Resource",
    "Type/Class",
    "Name",
    "Cost",
    "Data",
    "CUD",
    "Discount",
    "File",
];

const DELIMITER: u8 = b';';

/// Write all line items as `;` separated CSV with a header row
pub fn export_csv<W: Write>(items: &LineItems, writer: W) -> Result<(), PricingError> {
    let mut csv = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_writer(writer);

    csv.write_record(CSV_HEADER)?;
    for item in items {
        csv.write_record(&[
            item.project.clone(),
            item.region.clone(),
            item.resource.clone(),
            item.kind.clone(),
            item.name.clone(),
            format!("{:.6}", item.cost),
            format!("{:.6}", item.data),
            item.commitment.to_string(),
            format!("{:.6}", item.discount),
            item.file.clone(),
        ])?;
    }
    csv.flush()?;

    info!("Exported {} line items", items.len());
    Ok(())
}

fn parse_number<T: std::str::FromStr>(value: &str, column: &str) -> Result<T, PricingError> {
    value.trim().parse().map_err(|_| {
        PricingError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("invalid {} value '{}'", column, value),
        ))
    })
}

/// Read a cost report previously written by [`export_csv`]
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<LineItem>, PricingError> {
    let mut csv = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .from_reader(reader);

    let mut items = Vec::new();
    for record in csv.records() {
        let record = record?;
        let field = |index: usize| record.get(index).unwrap_or_default();
        items.push(LineItem {
            project: field(0).to_string(),
            region: field(1).to_string(),
            resource: field(2).to_string(),
            kind: field(3).to_string(),
            name: field(4).to_string(),
            cost: parse_number(field(5), "Cost")?,
            data: parse_number(field(6), "Data")?,
            commitment: parse_number(field(7), "CUD")?,
            discount: parse_number(field(8), "Discount")?,
            file: field(9).to_string(),
        });
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::sample_item;

    #[test]
    fn test_export_header_and_format() {
        let mut items = LineItems::new();
        items.push(sample_item("web", 53.9));

        let mut out = Vec::new();
        export_csv(&items, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "Project;Region;Resource;Type/Class;Name;Cost;Data;CUD;Discount;File"
        );
        assert_eq!(
            lines.next().unwrap(),
            "my-project;europe-west4;vm;e2-standard-2;web;53.900000;0.000000;0;1.000000;usage.yml"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_export_then_read_back() {
        let mut items = LineItems::new();
        items.push(sample_item("web", 53.9));
        let mut disk = sample_item("data; disk", 4.0);
        disk.resource = "disk".to_string();
        disk.data = 100.0;
        items.push(disk);

        let mut out = Vec::new();
        export_csv(&items, &mut out).unwrap();
        let parsed = read_csv(out.as_slice()).unwrap();

        let expected: Vec<_> = items
            .iter()
            .map(|i| (i.name.clone(), i.cost, i.region.clone()))
            .collect();
        let actual: Vec<_> = parsed
            .iter()
            .map(|i| (i.name.clone(), i.cost, i.region.clone()))
            .collect();
        assert_eq!(actual, expected);
        assert_eq!(parsed[1].data, 100.0);
    }

    #[test]
    fn test_read_rejects_bad_numbers() {
        let input = "Project;Region;Resource;Type/Class;Name;Cost;Data;CUD;Discount;File\n\
                     p;r;vm;t;n;abc;0;0;1;f\n";
        assert!(read_csv(input.as_bytes()).is_err());
    }
}
