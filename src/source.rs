use std::future::Future;
use std::path::Path;
use std::time::Duration;

use scraper::Html;

use crate::errors::{GradeError, Result};
use crate::options::{DocumentSource, GradeOptions};

/// Parse HTML text into a queryable document.
pub fn parse_html(text: &str) -> Html {
    Html::parse_document(text)
}

/// Read a local HTML file. Invalid UTF-8 is replaced rather than rejected.
pub fn load_file(path: &Path) -> Result<Html> {
    let raw = std::fs::read(path).map_err(|source| GradeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = raw.len(), "read html file");
    Ok(parse_html(&String::from_utf8_lossy(&raw)))
}

/// Plain HTTP GET returning the response body.
#[derive(Clone, Debug, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetch `url`. An error status still yields its body; only transport
    /// failures are errors.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "server answered with a non-success status");
        }
        Ok(response.text().await?)
    }
}

/// Run `attempt`; if it fails with a network error, wait `delay` and run it
/// exactly once more. The second outcome is final.
pub async fn fetch_with_retry<F, Fut>(mut attempt: F, delay: Duration) -> Result<String>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<String>>,
{
    match attempt().await {
        // Builder errors come from the URL itself, never from the network
        Err(GradeError::Network(e)) if !e.is_builder() => {
            tracing::warn!("Error: {e}");
            tracing::warn!(?delay, "retrying once");
            tokio::time::sleep(delay).await;
            attempt().await
        }
        other => other,
    }
}

impl DocumentSource {
    /// Produce the document this source points at.
    pub async fn load(&self, opts: &GradeOptions) -> Result<Html> {
        match self {
            DocumentSource::File(path) => load_file(path),
            DocumentSource::Url(url) => {
                let fetcher = HttpFetcher::default();
                let body = fetch_with_retry(|| fetcher.fetch(url), opts.retry_delay).await?;
                tracing::info!(%url, bytes = body.len(), "fetched html");
                Ok(parse_html(&body))
            }
        }
    }
}
