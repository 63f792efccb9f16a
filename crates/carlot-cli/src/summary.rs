use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use carlot_cli::types::BuildOutcome;

/// Print the per-city build summary to stdout.
pub fn print_summary(outcome: &BuildOutcome) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("City"),
        header_cell("Input Rows"),
        header_cell("Records"),
        header_cell("Dropped"),
        header_cell("Output"),
    ]);
    apply_table_style(&mut table);
    for index in 1..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut total_inputs = 0usize;
    let mut total_records = 0usize;
    let mut total_failures = 0usize;
    for city in &outcome.cities {
        total_inputs += city.input_rows;
        total_records += city.records;
        total_failures += city.failures;
        table.add_row(vec![
            Cell::new(&city.city)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(city.input_rows),
            Cell::new(city.records),
            failure_cell(city.failures),
            Cell::new(city.output_path.display()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_inputs).add_attribute(Attribute::Bold),
        Cell::new(total_records).add_attribute(Attribute::Bold),
        failure_cell(total_failures).add_attribute(Attribute::Bold),
        match &outcome.combined_path {
            Some(path) => Cell::new(path.display()),
            None => dim_cell("-"),
        },
    ]);
    println!("{table}");

    if let Some(path) = &outcome.combined_path {
        println!(
            "Combined: {} rows -> {}",
            outcome.combined_rows,
            path.display()
        );
    }
    if !outcome.missing.is_empty() {
        eprintln!("Missing source files:");
        for city in &outcome.missing {
            eprintln!("- {city}");
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn failure_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
