use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{GradeError, Result};

// Same loose shape the grader has always accepted: scheme, optional
// userinfo, host, optional port and path. Unanchored.
const URL_PATTERN: &str = r"(ftp|http|https)://(\w+:{0,1}\w*@)?(\S+)(:[0-9]+)?(/|/([\w#!:.?+=&%@!\-/]))?";

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URL_PATTERN).expect("URL pattern is a valid regex"));

/// Fail with [`GradeError::MissingFile`] unless `path` exists.
pub fn assert_file_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(GradeError::MissingFile(path.to_path_buf()))
    }
}

/// Fail with [`GradeError::InvalidUrl`] unless `url` has a URL shape and
/// parses as a whole.
pub fn assert_url_valid(url: &str) -> Result<()> {
    if URL_RE.is_match(url) && reqwest::Url::parse(url).is_ok() {
        Ok(())
    } else {
        Err(GradeError::InvalidUrl(url.to_string()))
    }
}
