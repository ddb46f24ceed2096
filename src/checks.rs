use std::path::Path;

use serde_json::Value;

use crate::errors::{GradeError, Result};

/// Read a checks file: a JSON array of selector strings.
pub fn load_checks(path: &Path) -> Result<Vec<String>> {
    let raw = std::fs::read(path).map_err(|source| GradeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let checks = parse_checks(&raw)?;
    tracing::info!(path = %path.display(), count = checks.len(), "loaded checks");
    Ok(checks)
}

/// Parse checks from raw JSON bytes, keeping file order.
pub fn parse_checks(raw: &[u8]) -> Result<Vec<String>> {
    let value: Value = serde_json::from_slice(raw)?;
    let items = match value {
        Value::Array(items) => items,
        other => return Err(GradeError::ChecksNotArray { found: kind(&other) }),
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(s) => Ok(s),
            _ => Err(GradeError::CheckNotString { index }),
        })
        .collect()
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_file_order_and_duplicates() {
        let checks = parse_checks(br#"["h2", "h1", "h2"]"#).unwrap();
        assert_eq!(checks, vec!["h2", "h1", "h2"]);
    }

    #[test]
    fn empty_array_is_fine() {
        assert!(parse_checks(b"[]").unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let err = parse_checks(b"[\"h1\",").unwrap_err();
        assert!(matches!(err, GradeError::ChecksParse(_)), "got {err:?}");
    }

    #[test]
    fn object_is_rejected() {
        let err = parse_checks(br#"{"h1": true}"#).unwrap_err();
        assert!(matches!(err, GradeError::ChecksNotArray { found: "an object" }));
        assert_eq!(
            err.to_string(),
            "checks file must contain a JSON array of selectors, found an object"
        );
    }

    #[test]
    fn non_string_entry_is_rejected() {
        let err = parse_checks(br#"["h1", 3]"#).unwrap_err();
        assert!(matches!(err, GradeError::CheckNotString { index: 1 }));
    }

    #[test]
    fn unreadable_file_reports_path() {
        let err = load_checks(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, GradeError::Read { .. }));
        assert!(err.to_string().contains("definitely/not/here.json"));
    }
}
