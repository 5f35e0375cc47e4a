use crate::CLAP_STYLING;
use clap::arg;
use semconvdiff_scanner::config::{
    DEFAULT_EXTENSION, DEFAULT_LISTING_BASE_URL, DEFAULT_RAW_BASE_URL,
};
use std::ffi::OsString;

/// Flags that are also accepted with a single leading dash (`-v1 v1.26.0`)
const SINGLE_DASH_LONG_FLAGS: [&str; 2] = ["v1", "v2"];

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("semconvdiff")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("semconvdiff")
        .about("Compare semantic-convention constants between two upstream releases")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Only log errors").required(false))
        .arg(
            arg!(--"v1" <VERSION>)
                .required(false)
                .help("Version 1 to compare")
                .default_value("v1"),
        )
        .arg(
            arg!(--"v2" <VERSION>)
                .required(false)
                .help("Version 2 to compare")
                .default_value("v2"),
        )
        .arg(
            arg!(--"listing-url" <URL>)
                .required(false)
                .help("Base URL of the HTML directory listing, suffixed with /<VERSION>")
                .default_value(DEFAULT_LISTING_BASE_URL),
        )
        .arg(
            arg!(--"raw-url" <URL>)
                .required(false)
                .help("Base URL of the raw file content, suffixed with /<VERSION>/<FILE>")
                .default_value(DEFAULT_RAW_BASE_URL),
        )
        .arg(
            arg!(--"extension" <EXT>)
                .required(false)
                .help("Only linked files ending in this extension are scanned")
                .default_value(DEFAULT_EXTENSION),
        )
        .arg(
            arg!(--"retries" <ATTEMPTS>)
                .required(false)
                .help("Maximum number of directory listing attempts per version")
                .value_parser(clap::value_parser!(u32).range(1..))
                .default_value("6"),
        )
        .arg(
            arg!(--"timeout" <SECONDS>)
                .required(false)
                .help("Request timeout in seconds")
                .value_parser(clap::value_parser!(u64).range(1..))
                .default_value("30"),
        )
        .arg(
            arg!(-f --"format" <FORMAT>)
                .required(false)
                .help("Report format: text, json")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            arg!(-o --"output" <PATH>)
                .required(false)
                .help("Save report to file (default: print to stdout)"),
        )
}

/// Rewrite `-v1`/`-v2` (and `-v1=x`) into their `--` form so clap, which
/// only knows single-character short flags, can parse them.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let promoted = arg.to_str().and_then(|s| {
                let flag = s.strip_prefix('-')?;
                if flag.starts_with('-') {
                    return None;
                }
                let name = flag.split_once('=').map_or(flag, |(name, _)| name);
                SINGLE_DASH_LONG_FLAGS
                    .contains(&name)
                    .then(|| OsString::from(format!("-{}", s)))
            });
            promoted.unwrap_or(arg)
        })
        .collect()
}
