use scraper::{Html, Selector};

use crate::errors::{GradeError, Result};
use crate::options::CheckOrder;
use crate::report::Report;

/// Test every selector in `checks` against `document`.
///
/// A selector is present when it matches at least one element. Any selector
/// that fails to parse aborts the run, so a report is never partial.
pub fn evaluate(document: &Html, checks: &[String], order: CheckOrder) -> Result<Report> {
    let mut ordered: Vec<&str> = checks.iter().map(String::as_str).collect();
    if order == CheckOrder::Sorted {
        // UTF-16 code unit order, the order the grader has always printed
        ordered.sort_by(|a, b| a.encode_utf16().cmp(b.encode_utf16()));
    }

    let mut report = Report::default();
    for check in ordered {
        let selector = Selector::parse(check).map_err(|e| GradeError::Selector {
            selector: check.to_string(),
            reason: e.to_string(),
        })?;
        let present = document.select(&selector).next().is_some();
        tracing::debug!(selector = check, present, "checked");
        report.insert(check, present);
    }
    Ok(report)
}
