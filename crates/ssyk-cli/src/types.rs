use std::path::PathBuf;

use ssyk_output::RunReport;

#[derive(Debug, Default)]
pub struct RunResult {
    /// Per-taxonomy outcomes in processing order.
    pub report: RunReport,
    /// JSON report written for this run.
    pub report_path: Option<PathBuf>,
    pub dry_run: bool,
}
