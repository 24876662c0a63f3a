//! macOS probe provider.

use super::{common, linux::join_present, packages, power, CommandRunner, OsFamily, PlatformProbes};
use crate::core::system_info::types::PackageCount;
use crate::error::{FetchError, Result};

pub struct MacProbes {
    runner: CommandRunner,
}

impl MacProbes {
    pub fn new(runner: CommandRunner) -> Self {
        Self { runner }
    }

    fn displays_report(&self) -> Result<String> {
        self.runner.run("system_profiler", &["SPDisplaysDataType"])
    }

    fn pmset_battery(&self) -> Result<String> {
        let output = self.runner.run("pmset", &["-g", "batt"])?;
        parse_pmset_battery(&output).ok_or_else(|| FetchError::not_found("InternalBattery in pmset output"))
    }
}

impl PlatformProbes for MacProbes {
    fn family(&self) -> OsFamily {
        OsFamily::MacOs
    }

    fn runner(&self) -> &CommandRunner {
        &self.runner
    }

    fn os_name(&self) -> Result<String> {
        let name = self.runner.run_non_empty("sw_vers", &["-productName"]);
        let version = self.runner.run_non_empty("sw_vers", &["-productVersion"]);
        match (name, version) {
            (Ok(name), Ok(version)) => Ok(format!("{} {}", name, version)),
            _ => common::os_long_version(),
        }
    }

    fn host_model(&self) -> Result<String> {
        let model = self.runner.run_non_empty("sysctl", &["-n", "hw.model"]).ok();
        join_present(&[Some("Apple".to_string()), model])
            .ok_or_else(|| FetchError::not_found("hw.model"))
    }

    fn package_count(&self) -> Result<PackageCount> {
        packages::count_installed(&self.runner, packages::MACOS_MANAGERS)
    }

    fn resolution(&self) -> Result<String> {
        let report = self.displays_report()?;
        parse_profiler_resolution(&report).ok_or_else(|| FetchError::not_found("Resolution in system_profiler"))
    }

    fn gpu(&self) -> Result<String> {
        let report = self.displays_report()?;
        profiler_field(&report, "Chipset Model:").ok_or_else(|| FetchError::not_found("Chipset Model in system_profiler"))
    }

    fn battery(&self) -> Result<String> {
        self.pmset_battery().or_else(|e| {
            log::debug!("pmset battery unavailable: {}", e);
            power::first_battery()
        })
    }
}

/// Value of the first `Key: value` line starting with `key`
pub fn profiler_field(report: &str, key: &str) -> Option<String> {
    report
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(key))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// `Resolution: 2560 x 1600 Retina` -> `2560x1600 Retina`;
/// `Resolution: 3024 x 1964 (UI Looks like: ...)` keeps only the first token
pub fn parse_profiler_resolution(report: &str) -> Option<String> {
    let mut resolution = profiler_field(report, "Resolution:")?;
    if resolution.contains("UI") {
        resolution = resolution.split(' ').next().unwrap_or_default().to_string();
    }
    Some(resolution.replacen(" x ", "x", 1))
}

/// `-InternalBattery-0 (id=123)\t85%; charging; 1:02 remaining` -> `85% [charging]`
pub fn parse_pmset_battery(output: &str) -> Option<String> {
    output
        .lines()
        .filter(|line| line.contains("InternalBattery"))
        .find_map(|line| {
            let (_, status) = line.split_once('\t')?;
            let parts: Vec<&str> = status.split(';').collect();
            if parts.len() > 2 {
                Some(format!("{} [{}]", parts[0].trim(), parts[1].trim()))
            } else {
                None
            }
        })
}
