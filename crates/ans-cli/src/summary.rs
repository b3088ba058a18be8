//! Terminal table rendering for command output.

use std::collections::BTreeMap;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ans_analysis::{ColumnSummary, GroupMean};

pub fn print_metric_catalog(catalog: &[(String, Option<&str>)]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Description")]);
    apply_table_style(&mut table);
    for (column, description) in catalog {
        table.add_row(vec![
            Cell::new(column).fg(Color::Blue).add_attribute(Attribute::Bold),
            match description {
                Some(text) => Cell::new(text),
                None => dim_cell("no description available"),
            },
        ]);
    }
    println!("{table}");
}

pub fn print_stat_summaries(cohort_rows: usize, summaries: &[ColumnSummary]) {
    println!("Cohort: {cohort_rows} sample row(s)");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell("Count"),
        header_cell("Mean"),
        header_cell("Std"),
        header_cell("Min"),
        header_cell("Max"),
    ]);
    apply_table_style(&mut table);
    for idx in 1..=5 {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    for summary in summaries {
        table.add_row(vec![
            Cell::new(&summary.column)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.count),
            value_cell(summary.mean),
            value_cell(summary.std),
            value_cell(summary.min),
            value_cell(summary.max),
        ]);
    }
    println!("{table}");
}

pub fn print_group_means(metric: &str, means: &[GroupMean]) {
    println!("Average {metric} per landmark");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Landmark"),
        header_cell("Samples"),
        header_cell(&format!("Avg {metric}")),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for group in means {
        table.add_row(vec![
            Cell::new(&group.key),
            Cell::new(group.count),
            value_cell(group.mean),
        ]);
    }
    println!("{table}");
}

pub fn print_network_comparison(rows: &[(&str, Option<f64>, Option<f64>)]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell("Wi-Fi"),
        header_cell("Cellular"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (title, wifi, cellular) in rows {
        table.add_row(vec![
            Cell::new(title).fg(Color::Blue).add_attribute(Attribute::Bold),
            value_cell(*wifi),
            value_cell(*cellular),
        ]);
    }
    println!("{table}");
}

pub fn print_network_landmark_means(title: &str, wifi: &[GroupMean], cellular: &[GroupMean]) {
    println!("{title} per landmark");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Landmark"),
        header_cell("Wi-Fi"),
        header_cell("Cellular"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    // Both lists are keyed by the same landmark set; index one of them.
    let cellular_by_key: BTreeMap<&str, Option<f64>> = cellular
        .iter()
        .map(|group| (group.key.as_str(), group.mean))
        .collect();
    for group in wifi {
        table.add_row(vec![
            Cell::new(&group.key),
            value_cell(group.mean),
            value_cell(
                cellular_by_key
                    .get(group.key.as_str())
                    .copied()
                    .flatten(),
            ),
        ]);
    }
    println!("{table}");
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format!("{value:.2}")),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
