use crate::core::logo::select_logo;
use crate::core::system_info::collect_report;
use crate::core::FetchConfig;
use crate::platform::{self, CommandRunner, PlatformProbes};
use crate::ui::{self, Report, Style};
use anyhow::Result;
use std::io::{self, Write};

/// Gather and lay out the report for `probes`.
///
/// The logo warning, if any, is passed to `on_warning` before the probes
/// run, since the CPU sample blocks for a while.
pub fn build_report<F>(probes: &dyn PlatformProbes, config: &FetchConfig, on_warning: F) -> Report
where
    F: FnOnce(&str),
{
    let style = Style {
        color: config.color,
    };

    let os_name = probes.os_name().unwrap_or_else(|e| {
        log::debug!("OS name unavailable for logo detection: {}", e);
        String::new()
    });
    let selection = select_logo(config.logo_override.as_deref(), &os_name, probes.family());
    log::debug!("selected logo '{}'", selection.entry.key);
    if let Some(warning) = &selection.warning {
        on_warning(warning);
    }

    let system = collect_report(probes);
    Report::new(selection.entry.lines(), system.lines(style), style)
}

pub fn execute(config: &FetchConfig) -> Result<()> {
    let probes = platform::detect(CommandRunner::new(config.command_timeout));
    let report = build_report(probes.as_ref(), config, |warning| {
        ui::warn(warning, config.color)
    });

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", report)?;
    stdout.flush()?;
    Ok(())
}
