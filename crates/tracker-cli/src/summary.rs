use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use tracker_model::{TrackerErrorCode, TrackerErrorReport};
use tracker_validate::HookSummary;

use crate::types::ValidateResult;

pub fn print_summary(result: &ValidateResult) {
    println!("Fixture: {}", result.fixture.display());
    println!("Import strategy: {}", result.import_strategy.as_str());
    println!("Enrollments: {}", result.enrollments);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Hook"),
        header_cell("Order"),
        header_cell("Status"),
        header_cell("Errors"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for hook in &result.report.hooks {
        table.add_row(vec![
            Cell::new(&hook.hook)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(hook.order),
            status_cell(hook),
            count_cell(hook.error_count),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        count_cell(result.report.error_count()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_error_table(&result.report.error_reports);
}

fn print_error_table(reports: &[TrackerErrorReport]) {
    if reports.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Enrollment"),
        header_cell("Code"),
        header_cell("Hook"),
        header_cell("Message"),
    ]);
    apply_error_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for report in reports {
        table.add_row(vec![
            Cell::new(report.line_number),
            Cell::new(&report.uid),
            code_cell(report.error_code),
            Cell::new(&report.validation_hook).fg(Color::DarkGrey),
            Cell::new(report.message()),
        ]);
    }
    println!();
    println!("Errors:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_error_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Fixed(14)),
            ColumnConstraint::UpperBoundary(Width::Fixed(7)),
            ColumnConstraint::UpperBoundary(Width::Fixed(36)),
            ColumnConstraint::UpperBoundary(Width::Percentage(60)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(hook: &HookSummary) -> Cell {
    if hook.skipped {
        dim_cell("skipped")
    } else if hook.error_count > 0 {
        Cell::new("failed").fg(Color::Red)
    } else {
        Cell::new("passed").fg(Color::Green)
    }
}

fn code_cell(code: TrackerErrorCode) -> Cell {
    match code {
        TrackerErrorCode::E1015 | TrackerErrorCode::E1016 => Cell::new(code)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        _ => Cell::new(code).fg(Color::Yellow),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
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
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
