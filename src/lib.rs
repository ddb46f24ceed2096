pub mod checks;
pub mod errors;
pub mod evaluate;
pub mod logging;
pub mod options;
pub mod report;
pub mod source;
pub mod validate;

use std::path::Path;

use errors::Result;
use options::{CheckOrder, GradeOptions};

pub use checks::{load_checks, parse_checks};
pub use errors::GradeError;
pub use evaluate::evaluate;
pub use options::DocumentSource;
pub use report::{render, write_report, Report};

/// Load the checks, load the document, and evaluate every check.
pub async fn grade(opts: &GradeOptions) -> Result<Report> {
    let checks = load_checks(&opts.checks)?;
    let document = opts.source.load(opts).await?;
    evaluate(&document, &checks, opts.order)
}

/// Synchronous shortcut for grading a local HTML file.
pub fn check_html_file(html: &Path, checks: &Path, order: CheckOrder) -> Result<Report> {
    let checks = load_checks(checks)?;
    let document = source::load_file(html)?;
    evaluate(&document, &checks, order)
}
