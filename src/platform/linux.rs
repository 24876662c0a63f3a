//! Linux probe provider.
//!
//! Reads release and hardware data from pseudo-files and shells out to
//! `lspci` and `xrandr` for the display side.

use super::{common, fs, network, power, CommandRunner, OsFamily, PlatformProbes};
use crate::core::system_info::types::LocalAddress;
use crate::error::{FetchError, Result};
use std::path::{Path, PathBuf};

const GPU_CLASSES: [&str; 3] = [
    "VGA compatible controller",
    "3D controller",
    "Display controller",
];

/// Locations of the pseudo-files the provider reads
#[derive(Debug, Clone)]
pub struct LinuxPaths {
    pub os_release: PathBuf,
    pub dmi_dir: PathBuf,
    pub power_supply_dir: PathBuf,
    pub net_dir: PathBuf,
}

impl Default for LinuxPaths {
    fn default() -> Self {
        Self {
            os_release: PathBuf::from(fs::OS_RELEASE),
            dmi_dir: PathBuf::from("/sys/class/dmi/id"),
            power_supply_dir: PathBuf::from("/sys/class/power_supply"),
            net_dir: PathBuf::from(network::SYS_CLASS_NET),
        }
    }
}

impl LinuxPaths {
    /// Same layout rooted somewhere other than `/`
    pub fn rooted_at(root: &Path) -> Self {
        let defaults = Self::default();
        let reroot = |p: &Path| root.join(p.strip_prefix("/").unwrap_or(p));
        Self {
            os_release: reroot(&defaults.os_release),
            dmi_dir: reroot(&defaults.dmi_dir),
            power_supply_dir: reroot(&defaults.power_supply_dir),
            net_dir: reroot(&defaults.net_dir),
        }
    }
}

pub struct LinuxProbes {
    runner: CommandRunner,
    paths: LinuxPaths,
}

impl LinuxProbes {
    pub fn new(runner: CommandRunner) -> Self {
        Self::with_paths(runner, LinuxPaths::default())
    }

    pub fn with_paths(runner: CommandRunner, paths: LinuxPaths) -> Self {
        Self { runner, paths }
    }

    /// First `BAT*` entry under the power-supply class directory
    pub fn sysfs_battery(&self) -> Result<String> {
        read_sysfs_battery(&self.paths.power_supply_dir)
    }

    pub fn lspci_gpu(&self) -> Result<String> {
        let output = self.runner.run("lspci", &[])?;
        parse_lspci_gpu(&output).ok_or_else(|| FetchError::not_found("display controller in lspci"))
    }
}

impl PlatformProbes for LinuxProbes {
    fn family(&self) -> OsFamily {
        OsFamily::Linux
    }

    fn runner(&self) -> &CommandRunner {
        &self.runner
    }

    fn os_name(&self) -> Result<String> {
        fs::read_pretty_name(&self.paths.os_release).or_else(|e| {
            log::debug!("os-release unavailable: {}", e);
            common::os_long_version()
        })
    }

    fn host_model(&self) -> Result<String> {
        let dmi = &self.paths.dmi_dir;
        let vendor = fs::read_trimmed(dmi.join("sys_vendor")).ok();
        let model = fs::read_trimmed(dmi.join("product_name"))
            .or_else(|_| fs::read_trimmed(dmi.join("product_version")))
            .ok();

        join_present(&[vendor, model]).ok_or_else(|| FetchError::not_found("DMI product data"))
    }

    fn resolution(&self) -> Result<String> {
        let output = self.runner.run("xrandr", &["--current"])?;
        parse_xrandr_current(&output).ok_or_else(|| FetchError::not_found("active xrandr mode"))
    }

    fn gpu(&self) -> Result<String> {
        self.lspci_gpu()
    }

    fn battery(&self) -> Result<String> {
        self.sysfs_battery().or_else(|e| {
            log::debug!("sysfs battery unavailable: {}", e);
            power::first_battery()
        })
    }

    fn local_ip(&self) -> Result<LocalAddress> {
        network::local_ip(Some(&self.paths.net_dir))
    }
}

/// Join the present parts with a space
pub fn join_present(parts: &[Option<String>]) -> Option<String> {
    let joined = parts
        .iter()
        .flatten()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!joined.is_empty()).then_some(joined)
}

/// Description of the first display controller in `lspci` output
pub fn parse_lspci_gpu(output: &str) -> Option<String> {
    output
        .lines()
        .filter(|line| GPU_CLASSES.iter().any(|class| line.contains(class)))
        .find_map(|line| {
            let description = line.rsplit(": ").next()?.trim();
            (line.contains(": ") && !description.is_empty()).then(|| description.to_string())
        })
}

/// Active mode from `xrandr --current`, e.g. `1920x1080`
pub fn parse_xrandr_current(output: &str) -> Option<String> {
    output
        .lines()
        .filter(|line| line.contains('*'))
        .find_map(|line| line.split_whitespace().next().map(str::to_string))
}

pub fn read_sysfs_battery(power_supply_dir: &Path) -> Result<String> {
    let mut names: Vec<String> = std::fs::read_dir(power_supply_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with("BAT"))
        .collect();
    names.sort();

    names
        .iter()
        .find_map(|name| {
            let dir = power_supply_dir.join(name);
            let capacity = fs::read_trimmed(dir.join("capacity")).ok()?;
            let status = fs::read_trimmed(dir.join("status")).ok()?;
            Some(format!("{}% [{}]", capacity, status))
        })
        .ok_or_else(|| FetchError::not_found("battery under power_supply"))
}
