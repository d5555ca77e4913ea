//! CLI argument definitions for the SSYK translator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use ssyk_model::Taxonomy;

/// Default directory holding the survey tables, relative to the base directory.
pub const ORIGINAL_DIR: &str = "01_original_data";
/// Default directory holding the translation workbooks.
pub const TRANSLATION_DIR: &str = "02_translation_files";
/// Default directory receiving translated tables.
pub const OUTPUT_DIR: &str = "03_translated_files";

#[derive(Parser)]
#[command(
    name = "ssyk-translate",
    version,
    about = "SSYK Translator - Annotate occupation codes with English titles",
    long_about = "Translate SSYK96 and SSYK2012 occupation codes in survey tables.\n\n\
                  Each `<taxonomy>_<level>` column is rewritten as `<code> <English title>`\n\
                  where the code is known, and a per-level coverage report is printed."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Translate the survey tables of one or both taxonomies.
    Translate(TranslateArgs),

    /// List the taxonomy levels and their translation workbook sections.
    Levels,
}

#[derive(Parser, Debug, Clone)]
pub struct TranslateArgs {
    /// Project directory containing the data folders.
    #[arg(long = "base-dir", value_name = "DIR", default_value = ".")]
    pub base_dir: PathBuf,

    /// Survey tables directory (default: <BASE_DIR>/01_original_data).
    #[arg(long = "original-dir", value_name = "DIR")]
    pub original_dir: Option<PathBuf>,

    /// Translation workbooks directory (default: <BASE_DIR>/02_translation_files).
    #[arg(long = "translation-dir", value_name = "DIR")]
    pub translation_dir: Option<PathBuf>,

    /// Output directory (default: <BASE_DIR>/03_translated_files).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Taxonomy to translate.
    #[arg(long = "taxonomy", value_enum, default_value = "all")]
    pub taxonomy: TaxonomyArg,

    /// Write a JSON coverage report to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Translate and report without writing translated tables.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl TranslateArgs {
    /// Arguments with every directory defaulted under `base_dir`.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            original_dir: None,
            translation_dir: None,
            output_dir: None,
            taxonomy: TaxonomyArg::All,
            report: None,
            dry_run: false,
        }
    }

    pub fn original_dir(&self) -> PathBuf {
        self.original_dir
            .clone()
            .unwrap_or_else(|| self.base_dir.join(ORIGINAL_DIR))
    }

    pub fn translation_dir(&self) -> PathBuf {
        self.translation_dir
            .clone()
            .unwrap_or_else(|| self.base_dir.join(TRANSLATION_DIR))
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| self.base_dir.join(OUTPUT_DIR))
    }
}

/// CLI taxonomy choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TaxonomyArg {
    Ssyk96,
    Ssyk2012,
    All,
}

impl TaxonomyArg {
    /// Selected taxonomies in processing order.
    pub fn taxonomies(self) -> Vec<Taxonomy> {
        match self {
            Self::Ssyk96 => vec![Taxonomy::Ssyk96],
            Self::Ssyk2012 => vec![Taxonomy::Ssyk2012],
            Self::All => Taxonomy::all().to_vec(),
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
