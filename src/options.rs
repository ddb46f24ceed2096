use std::path::PathBuf;
use std::time::Duration;

pub const CHECKSFILE_DEFAULT: &str = "checks.json";
pub const HTMLFILE_DEFAULT: &str = "index.html";
pub const URL_DEFAULT: &str = "http://google.com";
pub const RETRY_DELAY_DEFAULT: Duration = Duration::from_secs(5);

/// Order in which checks are evaluated, and therefore printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckOrder {
    /// Lexicographic order of the selector strings.
    #[default]
    Sorted,
    /// Order of appearance in the checks file.
    Insertion,
}

/// Where the HTML comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Url(String),
}

impl Default for DocumentSource {
    fn default() -> Self {
        DocumentSource::File(PathBuf::from(HTMLFILE_DEFAULT))
    }
}

/// Everything a grading run needs, resolved from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradeOptions {
    pub checks: PathBuf,
    pub source: DocumentSource,
    pub order: CheckOrder,
    /// Wait before the single retry of a failed fetch.
    pub retry_delay: Duration,
}

impl Default for GradeOptions {
    fn default() -> Self {
        Self {
            checks: PathBuf::from(CHECKSFILE_DEFAULT),
            source: DocumentSource::default(),
            order: CheckOrder::default(),
            retry_delay: RETRY_DELAY_DEFAULT,
        }
    }
}
