use anyhow::Result;

use omnifetch::commands;
use omnifetch::core::FetchConfig;

fn main() -> Result<()> {
    omnifetch::init_logging();

    let matches = commands::cli().get_matches();

    if matches.get_flag("version") {
        return commands::version();
    }

    let config = FetchConfig::from_matches(&matches)?;
    if !config.color {
        colored::control::set_override(false);
    }

    commands::fetch(&config)
}
