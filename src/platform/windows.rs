//! Windows probe provider.
//!
//! WMI data is read through `wmic` and PowerShell so the provider needs no
//! Windows-only linkage.

use super::{env, CommandRunner, OsFamily, PlatformProbes};
use crate::error::{FetchError, Result};
use std::path::Path;

/// Kernel family reported when `ver` gives nothing usable
pub const NT_KERNEL: &str = "NT";
pub const SHELL_FALLBACK: &str = "PowerShell/CMD";

const RESOLUTION_QUERY: &str = "Get-WmiObject -Class Win32_VideoController | \
     Select-Object -Property VideoModeDescription, CurrentHorizontalResolution, CurrentVerticalResolution | \
     Format-List";
const GPU_QUERY: &str = "(Get-CimInstance Win32_VideoController | Select-Object -First 1).Name";

pub struct WindowsProbes {
    runner: CommandRunner,
}

impl WindowsProbes {
    pub fn new(runner: CommandRunner) -> Self {
        Self { runner }
    }

    fn powershell(&self, command: &str) -> Result<String> {
        self.runner.run("powershell", &["-NoProfile", "-Command", command])
    }
}

impl PlatformProbes for WindowsProbes {
    fn family(&self) -> OsFamily {
        OsFamily::Windows
    }

    fn runner(&self) -> &CommandRunner {
        &self.runner
    }

    fn kernel_version(&self) -> Result<String> {
        match self.runner.run_non_empty("cmd", &["/C", "ver"]) {
            Ok(version) => Ok(version),
            Err(e) => {
                log::debug!("ver failed: {}", e);
                Ok(NT_KERNEL.to_string())
            }
        }
    }

    fn shell(&self) -> Result<String> {
        env::shell(env::system_lookup).or_else(|_| Ok(SHELL_FALLBACK.to_string()))
    }

    fn resolution(&self) -> Result<String> {
        let output = self.powershell(RESOLUTION_QUERY)?;
        parse_resolution_list(&output).ok_or_else(|| FetchError::not_found("current resolution in WMI output"))
    }

    fn gpu(&self) -> Result<String> {
        let wmic = self
            .runner
            .run("wmic", &["path", "win32_VideoController", "get", "name"])
            .and_then(|output| {
                parse_wmic_name(&output).ok_or_else(|| FetchError::not_found("name in wmic output"))
            });

        wmic.or_else(|e| {
            log::debug!("wmic GPU query failed: {}", e);
            self.powershell(GPU_QUERY)
                .and_then(|name| first_non_empty_line(&name).ok_or_else(|| FetchError::not_found("GPU name")))
        })
    }

    fn disk_path(&self) -> &Path {
        Path::new("C:\\")
    }
}

fn first_non_empty_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

/// `wmic ... get name` prints a `Name` header, then one row per adapter
pub fn parse_wmic_name(output: &str) -> Option<String> {
    let mut lines = output.lines().map(str::trim).filter(|line| !line.is_empty());
    lines.next()?;
    lines.next().map(str::to_string)
}

/// `CurrentHorizontalResolution : 1920` / `CurrentVerticalResolution : 1080` -> `1920x1080`
pub fn parse_resolution_list(output: &str) -> Option<String> {
    let value_of = |key: &str| {
        output
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with(key))
            .filter_map(|line| line.split_once(':'))
            .map(|(_, value)| value.trim())
            .find(|value| !value.is_empty())
    };

    let horizontal = value_of("CurrentHorizontalResolution")?;
    let vertical = value_of("CurrentVerticalResolution")?;
    Some(format!("{}x{}", horizontal, vertical))
}
