pub mod commands;
pub mod handlers;
pub mod logging;

// Re-export commonly used handler functions for convenience
pub use commands::{command_argument_builder, normalize_args};
pub use handlers::{compare_options_from_args, handle_compare, run_compare, write_report};

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
