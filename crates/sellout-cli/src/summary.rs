//! Run summary rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sellout_core::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    println!("Period: {}", summary.period);
    if summary.dry_run {
        println!("Output: {} (dry run, not written)", summary.output_key);
    } else {
        println!("Output: {}", summary.output_key);
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Files found"),
        header_cell("Loaded"),
        header_cell("Skipped"),
        header_cell("Input rows"),
        header_cell("Published rows"),
    ]);
    apply_table_style(&mut table);
    for index in 0..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(summary.files_found),
        Cell::new(summary.files_loaded),
        skipped_cell(summary.skipped.len()),
        Cell::new(summary.input_rows),
        Cell::new(summary.published_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if !summary.skipped.is_empty() {
        let mut skipped = Table::new();
        skipped.set_header(vec![header_cell("Skipped file"), header_cell("Error")]);
        apply_table_style(&mut skipped);
        for file in &summary.skipped {
            skipped.add_row(vec![
                Cell::new(&file.key).fg(Color::Yellow),
                Cell::new(&file.error),
            ]);
        }
        println!();
        println!("Skipped files:");
        println!("{skipped}");
    }
}

pub fn apply_table_style(table: &mut Table) {
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

fn skipped_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
