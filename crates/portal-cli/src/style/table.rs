//! comfy-table layouts for matrices and key/value listings.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn colored(cell: Cell, color: Color) -> Cell {
    if super::no_color() { cell } else { cell.fg(color) }
}

/// A yes/no cell for permission grids.
pub fn mark(allowed: bool, yes: &str, no: &str) -> Cell {
    if allowed {
        colored(Cell::new(yes), Color::Green)
    } else {
        colored(Cell::new(no), Color::DarkGrey)
    }
}

/// Builds a table with a bold header row.
pub fn grid_table(columns: &[&str], rows: Vec<Vec<Cell>>) -> Table {
    let mut table = base_table();
    table.set_header(columns.iter().map(|column| {
        let cell = Cell::new(column);
        if super::no_color() {
            cell
        } else {
            cell.add_attribute(Attribute::Bold).fg(Color::Cyan)
        }
    }));
    for row in rows {
        table.add_row(row);
    }
    table
}

pub fn print_grid_table(columns: &[&str], rows: Vec<Vec<Cell>>) {
    println!("{}", grid_table(columns, rows));
}

/// Two-column key/value table with dimmed keys.
pub fn info_table(entries: &[(&str, &str)]) -> Table {
    let mut table = base_table();
    for (key, value) in entries {
        table.add_row(vec![colored(Cell::new(key), Color::DarkGrey), Cell::new(value)]);
    }
    table
}

pub fn print_info_table(entries: &[(&str, &str)]) {
    println!("{}", info_table(entries));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_table_renders_headers_and_rows() {
        super::super::set_no_color(true);
        let table = grid_table(
            &["Permission", "admin"],
            vec![vec![Cell::new("team.remove"), mark(true, "✓", "")]],
        );
        let rendered = table.to_string();
        assert!(rendered.contains("Permission"));
        assert!(rendered.contains("team.remove"));
        assert!(rendered.contains('✓'));
    }
}
