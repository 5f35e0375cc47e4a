use semconvdiff::handlers::*;
use semconvdiff::{command_argument_builder, normalize_args};
use semconvdiff_scanner::config::{DEFAULT_LISTING_BASE_URL, DEFAULT_TIMEOUT_SECS};
use std::ffi::OsString;
use std::time::Duration;
use tempfile::tempdir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn parse(args: &[&str]) -> clap::ArgMatches {
    command_argument_builder()
        .try_get_matches_from(normalize_args(args.iter().copied()))
        .unwrap()
}

#[test]
fn test_normalize_single_dash_version_flags() {
    let args = normalize_args(["semconvdiff", "-v1", "v1.25.0", "-v2=v1.26.0", "-q"]);
    let expected: Vec<OsString> = ["semconvdiff", "--v1", "v1.25.0", "--v2=v1.26.0", "-q"]
        .into_iter()
        .map(OsString::from)
        .collect();
    assert_eq!(args, expected);
}

#[test]
fn test_normalize_leaves_other_args_alone() {
    let args = normalize_args(["semconvdiff", "--v1", "v1", "-v", "-v10", "v2"]);
    let expected: Vec<OsString> = ["semconvdiff", "--v1", "v1", "-v", "-v10", "v2"]
        .into_iter()
        .map(OsString::from)
        .collect();
    assert_eq!(args, expected);
}

#[test]
fn test_default_arguments() {
    let matches = parse(&["semconvdiff"]);
    let options = compare_options_from_args(&matches);

    assert_eq!(options.old_version, "v1");
    assert_eq!(options.new_version, "v2");
    assert_eq!(options.source.listing_base_url, DEFAULT_LISTING_BASE_URL);
    assert_eq!(options.source.extension, ".go");
    assert_eq!(options.source.retry.max_attempts, 6);
    assert_eq!(options.source.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    assert!(!matches.get_flag("quiet"));
}

#[test]
fn test_single_dash_versions_parse() {
    let matches = parse(&["semconvdiff", "-v1", "v1.25.0", "-v2", "v1.26.0"]);
    let options = compare_options_from_args(&matches);

    assert_eq!(options.old_version, "v1.25.0");
    assert_eq!(options.new_version, "v1.26.0");
}

#[test]
fn test_zero_retries_rejected() {
    let result = command_argument_builder()
        .try_get_matches_from(normalize_args(["semconvdiff", "--retries", "0"]));
    assert!(result.is_err());
}

#[test]
fn test_unknown_format_rejected() {
    let result = command_argument_builder()
        .try_get_matches_from(normalize_args(["semconvdiff", "--format", "csv"]));
    assert!(result.is_err());
}

#[test]
fn test_resolve_output_path_plain() {
    assert_eq!(
        resolve_output_path("report.txt"),
        std::path::PathBuf::from("report.txt")
    );
}

#[test]
fn test_resolve_output_path_tilde() {
    let resolved = resolve_output_path("~/report.txt");
    assert!(!resolved.to_string_lossy().starts_with('~'));
    assert!(resolved.ends_with("report.txt"));
}

#[test]
fn test_write_report_to_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("diff.txt");

    write_report("Constant Name | a | b\n", Some(&path))?;

    assert_eq!(std::fs::read_to_string(&path)?, "Constant Name | a | b\n");
    Ok(())
}

#[test]
fn test_write_report_to_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("diff.txt");

    let err = write_report("x", Some(&path)).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to write report"));
}

#[tokio::test]
async fn test_run_compare_writes_json_report() -> Result<(), Box<dyn std::error::Error>> {
    let mock_server = MockServer::start().await;

    for (version, value) in [("old", "http.method"), ("new", "http.request.method")] {
        Mock::given(method("GET"))
            .and(path(format!("/blob/{}", version)))
            .respond_with(ResponseTemplate::new(200).set_body_string(format!(
                r#"<a href="/repo/blob/{}/trace.go">trace.go</a>"#,
                version
            )))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("/raw/{}/trace.go", version)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(format!("const AttributeHTTPMethod = \"{}\"\n", value)),
            )
            .mount(&mock_server)
            .await;
    }

    let dir = tempdir()?;
    let output = dir.path().join("diff.json");
    let listing_url = format!("{}/blob", mock_server.uri());
    let raw_url = format!("{}/raw", mock_server.uri());
    let output_arg = output.to_string_lossy().to_string();

    let matches = parse(&[
        "semconvdiff",
        "-v1",
        "old",
        "-v2",
        "new",
        "--listing-url",
        &listing_url,
        "--raw-url",
        &raw_url,
        "--format",
        "json",
        "--output",
        &output_arg,
    ]);

    run_compare(&matches).await?;

    let report: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&output)?)?;
    assert_eq!(report["old_version"], "old");
    assert_eq!(report["new_version"], "new");
    assert_eq!(report["changes"][0]["name"], "AttributeHTTPMethod");
    assert_eq!(report["changes"][0]["old_value"], "http.method");
    assert_eq!(report["changes"][0]["new_value"], "http.request.method");
    Ok(())
}

#[tokio::test]
async fn test_run_compare_fails_on_invalid_listing_url() {
    let matches = parse(&["semconvdiff", "--listing-url", "not a url"]);
    let err = run_compare(&matches).await.unwrap_err();
    assert!(err.to_string().contains("Invalid configuration"));
}
