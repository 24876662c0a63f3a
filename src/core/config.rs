use crate::platform::command::DEFAULT_TIMEOUT;
use anyhow::Result;
use clap::ArgMatches;
use std::time::Duration;

/// Runtime settings for one fetch, built from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Logo name requested with `--ascii-distro`
    pub logo_override: Option<String>,
    /// Per-command timeout for external probes
    pub command_timeout: Duration,
    pub color: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            logo_override: None,
            command_timeout: DEFAULT_TIMEOUT,
            color: true,
        }
    }
}

impl FetchConfig {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let mut config = FetchConfig::default();

        config.logo_override = matches
            .get_one::<String>("ascii-distro")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        if let Some(&millis) = matches.get_one::<u64>("timeout") {
            if millis == 0 {
                anyhow::bail!("--timeout must be greater than zero");
            }
            config.command_timeout = Duration::from_millis(millis);
        }

        config.color = !matches.get_flag("no-color");

        Ok(config)
    }
}
