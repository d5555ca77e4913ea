use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use ssyk_ingest::read_table;
use ssyk_model::Taxonomy;
use ssyk_output::{TaxonomyReport, output_path, write_csv, write_report_json};
use ssyk_standards::{default_source_path, load_from_workbook};
use ssyk_transform::translate_frame;

use crate::cli::TranslateArgs;
use crate::summary::{levels_table, print_taxonomy_summary};
use crate::types::RunResult;

/// Input table extensions in lookup order.
const INPUT_EXTENSIONS: &[&str] = &["xlsx", "csv"];

pub fn run_levels() -> Result<()> {
    println!("{}", levels_table());
    Ok(())
}

/// File stem of the survey table for `taxonomy` (e.g. `daioe_ssyk96`).
pub fn input_stem(taxonomy: Taxonomy) -> String {
    format!("daioe_{}", taxonomy.key())
}

/// Locates the survey table of `taxonomy` in `dir`, preferring the workbook.
pub fn resolve_input(dir: &Path, taxonomy: Taxonomy) -> Result<PathBuf> {
    let stem = input_stem(taxonomy);
    for extension in INPUT_EXTENSIONS {
        let candidate = dir.join(format!("{stem}.{extension}"));
        if candidate.is_file() {
            return Ok(candidate);
        }
    }
    bail!(
        "no {} input table in {} (expected {stem}.xlsx or {stem}.csv)",
        taxonomy,
        dir.display()
    )
}

pub fn run_translate(args: &TranslateArgs) -> Result<RunResult> {
    let mut result = RunResult {
        dry_run: args.dry_run,
        ..RunResult::default()
    };
    for taxonomy in args.taxonomy.taxonomies() {
        let report = translate_taxonomy(taxonomy, args)?;
        print_taxonomy_summary(&report);
        result.report.push(report);
    }
    if let Some(path) = &args.report {
        write_report_json(&result.report, path)
            .with_context(|| format!("write report {}", path.display()))?;
        result.report_path = Some(path.clone());
    }
    Ok(result)
}

/// Reads, translates and writes the survey table of one taxonomy.
pub fn translate_taxonomy(taxonomy: Taxonomy, args: &TranslateArgs) -> Result<TaxonomyReport> {
    let span = info_span!("taxonomy", taxonomy = taxonomy.key());
    let _guard = span.enter();

    let input = resolve_input(&args.original_dir(), taxonomy)?;
    let df = read_table(&input).with_context(|| format!("read {}", input.display()))?;

    let source = default_source_path(&args.translation_dir(), taxonomy);
    let table = load_from_workbook(&source, taxonomy)
        .with_context(|| format!("load {taxonomy} translation table"))?;

    let (translated, levels) = translate_frame(&df, taxonomy, &table)
        .with_context(|| format!("translate {}", input.display()))?;

    let output = if args.dry_run {
        None
    } else {
        let path = output_path(&args.output_dir(), &input);
        write_csv(&translated, &path).with_context(|| format!("write {}", path.display()))?;
        Some(path)
    };

    info!(
        rows = translated.height(),
        levels = levels.len(),
        dry_run = args.dry_run,
        "translated input table"
    );
    Ok(TaxonomyReport {
        taxonomy,
        input,
        output,
        rows: translated.height(),
        levels,
    })
}
