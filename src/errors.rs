use std::path::PathBuf;

use thiserror::Error;

// Everything that can stop a grading run.
#[derive(Debug, Error)]
pub enum GradeError {
    // The checks file or HTML file named on the command line is absent
    #[error("{} does not exist. Exiting.", .0.display())]
    MissingFile(PathBuf),

    // The --url value does not look like an ftp/http/https URL
    #[error("{0} is not a valid URL. Exiting.")]
    InvalidUrl(String),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Checks file content is not JSON at all
    #[error("checks file is not valid JSON: {0}")]
    ChecksParse(#[from] serde_json::Error),

    #[error("checks file must contain a JSON array of selectors, found {found}")]
    ChecksNotArray { found: &'static str },

    #[error("check at index {index} is not a string")]
    CheckNotString { index: usize },

    #[error("invalid selector {selector:?}: {reason}")]
    Selector { selector: String, reason: String },

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to write report: {0}")]
    Output(#[source] std::io::Error),
}

impl GradeError {
    /// True for the two user-input mistakes the CLI reports with exit code 1.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, GradeError::MissingFile(_) | GradeError::InvalidUrl(_))
    }
}

pub type Result<T> = std::result::Result<T, GradeError>;
