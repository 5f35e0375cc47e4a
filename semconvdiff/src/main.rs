use semconvdiff::logging::init_logging;
use semconvdiff::{command_argument_builder, handle_compare, normalize_args};

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let matches = cmd.get_matches_from(normalize_args(std::env::args_os()));

    init_logging(matches.get_flag("quiet"));

    handle_compare(&matches).await;
}
