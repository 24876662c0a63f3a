// Command handlers module
pub mod fetch;
pub mod version;

use clap::{Arg, ArgAction, Command};

// Re-exports for cleaner imports
pub use fetch::execute as fetch;
pub use version::execute as version;

/// Command-line definition
pub fn cli() -> Command {
    Command::new("omnifetch")
        .about("Show system information next to a distribution logo")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("ascii-distro")
                .long("ascii-distro")
                .alias("ascii_distro")
                .value_name("NAME")
                .help("Use the logo of NAME instead of the detected one"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("MS")
                .help("Timeout for each external command, in milliseconds (default: 5000)")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue),
        )
}
