use anyhow::{Context, Result};
use clap::ArgMatches;
use semconvdiff_core::compare::{CompareOptions, execute_compare};
use semconvdiff_core::report::{ReportFormat, generate_report, save_report};
use semconvdiff_scanner::{RetryPolicy, SourceConfig};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info};

/// Build compare options from parsed command-line arguments
pub fn compare_options_from_args(args: &ArgMatches) -> CompareOptions {
    let old_version = args.get_one::<String>("v1").unwrap().clone();
    let new_version = args.get_one::<String>("v2").unwrap().clone();
    let listing_url = args.get_one::<String>("listing-url").unwrap();
    let raw_url = args.get_one::<String>("raw-url").unwrap();
    let extension = args.get_one::<String>("extension").unwrap();
    let retries = *args.get_one::<u32>("retries").unwrap();
    let timeout = *args.get_one::<u64>("timeout").unwrap();

    let source = SourceConfig::default()
        .with_listing_base_url(listing_url)
        .with_raw_base_url(raw_url)
        .with_extension(extension)
        .with_retry(RetryPolicy::new(retries))
        .with_timeout(Duration::from_secs(timeout));

    CompareOptions {
        old_version,
        new_version,
        source,
    }
}

/// Expand a leading `~` in a user supplied output path
pub fn resolve_output_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// Write the report to `output`, or to stdout when no path is given
pub fn write_report(report: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            save_report(report, path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report saved to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(report.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write report to stdout")?;
        }
    }
    Ok(())
}

pub async fn run_compare(args: &ArgMatches) -> Result<()> {
    let options = compare_options_from_args(args);
    let format = args
        .get_one::<String>("format")
        .and_then(|f| ReportFormat::from_str(f))
        .unwrap_or(ReportFormat::Text);
    let output = args
        .get_one::<String>("output")
        .map(|raw| resolve_output_path(raw));

    let comparison = execute_compare(options).await?;
    let report = generate_report(&comparison, format).context("Failed to render report")?;

    write_report(&report, output.as_deref())
}

pub async fn handle_compare(args: &ArgMatches) {
    if let Err(e) = run_compare(args).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
