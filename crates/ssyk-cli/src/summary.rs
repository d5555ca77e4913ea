use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ssyk_model::{Code, Level, LevelStats, Taxonomy};
use ssyk_output::TaxonomyReport;

use crate::types::RunResult;

/// One-line coverage summary of a level, as logged and printed.
///
/// `Level N: translated T / C (missing M)` followed by either a sample of
/// unmatched codes or a note that every code matched.
pub fn level_report_line(level: Level, stats: &LevelStats) -> String {
    format!(
        "Level {}: translated {} / {} (missing {}) | {}",
        level.number(),
        stats.translated,
        stats.total_codes,
        stats.missing(),
        unmatched_text(stats)
    )
}

fn unmatched_text(stats: &LevelStats) -> String {
    if stats.all_matched() {
        "all codes matched".to_string()
    } else {
        format!("unmatched codes sample: {}", unmatched_sample(stats))
    }
}

fn unmatched_sample(stats: &LevelStats) -> String {
    let codes: Vec<&str> = stats
        .unmatched_sample()
        .into_iter()
        .map(Code::as_str)
        .collect();
    format!("{codes:?}")
}

/// Report lines of every translated level, in level order.
pub fn taxonomy_report_lines(report: &TaxonomyReport) -> Vec<String> {
    report
        .levels
        .iter()
        .map(|(level, stats)| level_report_line(*level, stats))
        .collect()
}

/// Builds the coverage table of one translated taxonomy.
pub fn taxonomy_table(report: &TaxonomyReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Level"),
        header_cell("Column"),
        header_cell("Translated"),
        header_cell("Codes"),
        header_cell("Missing"),
        header_cell("Unmatched codes sample"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for (level, stats) in &report.levels {
        let sample = if stats.all_matched() {
            Cell::new("all codes matched").fg(Color::Green)
        } else {
            Cell::new(unmatched_sample(stats)).fg(Color::Yellow)
        };
        table.add_row(vec![
            Cell::new(level.number()),
            Cell::new(report.taxonomy.level_column(*level)),
            Cell::new(stats.translated),
            Cell::new(stats.total_codes),
            missing_cell(stats.missing()),
            sample,
        ]);
    }
    table
}

/// Prints the coverage of one translated taxonomy.
pub fn print_taxonomy_summary(report: &TaxonomyReport) {
    println!("{} ({} rows)", report.taxonomy, report.rows);
    println!("Input: {}", report.input.display());
    if report.levels.is_empty() {
        println!("No {} level columns found", report.taxonomy.key());
    } else {
        for line in taxonomy_report_lines(report) {
            println!("{line}");
        }
        println!("{}", taxonomy_table(report));
    }
    if let Some(path) = &report.output {
        println!("Wrote: {}", path.display());
    }
    println!();
}

pub fn print_run_summary(result: &RunResult) {
    if result.dry_run {
        println!("Dry run: no translated tables written");
    }
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }
}

/// Static layout of every taxonomy level.
pub fn levels_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Taxonomy",
        "Level",
        "Column",
        "Section",
        "Digits",
        "Skip rows",
    ]);
    apply_table_style(&mut table);
    for taxonomy in Taxonomy::all() {
        for level in Level::ALL {
            let spec = taxonomy.level_spec(level);
            table.add_row(vec![
                Cell::new(taxonomy.display_name()),
                Cell::new(level.number()),
                Cell::new(taxonomy.level_column(level)),
                Cell::new(spec.section),
                Cell::new(spec.digits),
                Cell::new(taxonomy.section_skip_rows()),
            ]);
        }
    }
    table
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
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn missing_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
