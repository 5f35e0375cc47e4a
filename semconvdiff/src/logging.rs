//! Console logging: every event is printed to stdout behind a colored level tag.

use colored::{ColoredString, Colorize};
use std::fmt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

const CRATE_TARGETS: [&str; 3] = ["semconvdiff", "semconvdiff_core", "semconvdiff_scanner"];

/// `Info found files: [...]` style lines, no timestamps or targets
pub struct LevelTagFormat;

impl<S, N> FormatEvent<S, N> for LevelTagFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "{} ", level_tag(event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

pub fn level_tag(level: &Level) -> ColoredString {
    match *level {
        Level::ERROR => "Error".red(),
        Level::WARN => "Warn".yellow(),
        Level::INFO => "Info".green(),
        _ => "Debug".yellow(),
    }
}

/// Directives used when `RUST_LOG` is not set. Dependencies only log warnings.
pub fn default_directives(quiet: bool) -> String {
    let level = if quiet { "error" } else { "debug" };
    let mut directives = vec![if quiet { "error" } else { "warn" }.to_string()];
    directives.extend(
        CRATE_TARGETS
            .iter()
            .map(|target| format!("{}={}", target, level)),
    );
    directives.join(",")
}

pub fn init_logging(quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .event_format(LevelTagFormat)
        .init();
}
