use crate::report::LineItems;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Truncate a string to at most `max_chars` characters
fn truncate(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

/// Empty table with a highlighted header row
pub fn styled_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        headers
            .iter()
            .map(|header| Cell::new(header).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
    table
}

/// Build the cost table shown after a calculation run
pub fn render_table(items: &LineItems) -> Table {
    let mut table = styled_table(&["Name", "Res.", "Type/Class", "Cost", "CUD", "Disc."]);

    for item in items {
        table.add_row(vec![
            Cell::new(truncate(&item.name, 30)),
            Cell::new(truncate(&item.resource, 10)),
            Cell::new(truncate(&item.kind, 25)),
            Cell::new(format!("{:.2}", item.cost)).set_alignment(CellAlignment::Right),
            Cell::new(item.commitment),
            Cell::new(format!("{:.2}", item.discount)).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}
