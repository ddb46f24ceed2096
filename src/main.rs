use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use html_grader::errors::Result;
use html_grader::options::{CheckOrder, GradeOptions, CHECKSFILE_DEFAULT, HTMLFILE_DEFAULT, URL_DEFAULT};
use html_grader::validate::{assert_file_exists, assert_url_valid};
use html_grader::{grade, logging, write_report, DocumentSource};

/// Check an HTML file or URL for the presence of required tags and attributes.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to checks.json
    #[arg(short, long = "checks", value_name = "check_file", default_value = CHECKSFILE_DEFAULT)]
    checks: PathBuf,
    /// Path to index.html
    #[arg(short, long = "file", value_name = "html_file", default_value = HTMLFILE_DEFAULT)]
    file: PathBuf,
    /// URL to index.html; fetches instead of reading --file
    #[arg(short, long, value_name = "url", num_args = 0..=1, default_missing_value = URL_DEFAULT)]
    url: Option<String>,
    /// Report checks in file order instead of sorted
    #[arg(long)]
    keep_order: bool,
    /// Seconds to wait before retrying a failed fetch
    #[arg(long, value_name = "secs", default_value_t = 5)]
    retry_delay: u64,
    /// More logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    // Check user-supplied paths and URL, then build the run options.
    fn into_options(self) -> Result<GradeOptions> {
        assert_file_exists(&self.checks)?;
        let source = match self.url {
            Some(url) => {
                assert_url_valid(&url)?;
                DocumentSource::Url(url)
            }
            None => {
                assert_file_exists(&self.file)?;
                DocumentSource::File(self.file)
            }
        };
        Ok(GradeOptions {
            checks: self.checks,
            source,
            order: if self.keep_order { CheckOrder::Insertion } else { CheckOrder::Sorted },
            retry_delay: Duration::from_secs(self.retry_delay),
        })
    }
}

async fn run(opts: GradeOptions) -> Result<()> {
    let report = grade(&opts).await?;
    write_report(std::io::stdout().lock(), &report)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Parse CLI arguments.
    let args = Args::parse();
    logging::init(args.verbose);

    let opts = match args.into_options() {
        Ok(opts) => opts,
        Err(e) => {
            println!("{e}");
            return ExitCode::from(1);
        }
    };
    tracing::debug!(?opts, "starting");

    match run(opts).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_argument_error() => {
            println!("{e}");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
