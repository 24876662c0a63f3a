//! Android probe provider (Termux and similar environments).
//!
//! System properties come from `getprop`; anything Android shares with
//! Linux is delegated to an inner [`LinuxProbes`].

use super::{command::is_available, common, linux::LinuxProbes, CommandRunner, OsFamily, PlatformProbes};
use crate::core::system_info::types::LocalAddress;
use crate::error::{FetchError, Result};
use serde::Deserialize;
use std::path::Path;

/// `termux-battery-status` JSON payload (only the fields we print)
#[derive(Debug, Deserialize)]
pub struct TermuxBattery {
    pub percentage: f64,
    pub status: String,
    pub health: String,
}

pub struct AndroidProbes {
    linux: LinuxProbes,
}

impl AndroidProbes {
    pub fn new(runner: CommandRunner) -> Self {
        Self {
            linux: LinuxProbes::new(runner),
        }
    }

    pub fn getprop(&self, key: &str) -> Result<String> {
        self.linux.runner().run_non_empty("getprop", &[key])
    }

    fn termux_battery(&self) -> Result<String> {
        if !is_available("termux-battery-status") {
            return Err(FetchError::CommandNotFound("termux-battery-status".to_string()));
        }
        let output = self.linux.runner().run("termux-battery-status", &[])?;
        parse_termux_battery(&output)
    }
}

impl PlatformProbes for AndroidProbes {
    fn family(&self) -> OsFamily {
        OsFamily::Android
    }

    fn runner(&self) -> &CommandRunner {
        self.linux.runner()
    }

    fn os_name(&self) -> Result<String> {
        match self.getprop("ro.build.version.release") {
            Ok(version) => Ok(format!("Android {}", version)),
            Err(_) => Ok("Android".to_string()),
        }
    }

    fn host_model(&self) -> Result<String> {
        let manufacturer = self.getprop("ro.product.manufacturer").ok();
        let model = self.getprop("ro.product.model").ok();
        super::linux::join_present(&[manufacturer, model])
            .ok_or_else(|| FetchError::not_found("product properties"))
    }

    fn resolution(&self) -> Result<String> {
        let output = self.runner().run("wm", &["size"])?;
        parse_wm_size(&output).ok_or_else(|| FetchError::not_found("physical size in wm output"))
    }

    fn cpu_model(&self) -> Result<String> {
        self.getprop("ro.board.platform").or_else(|_| common::cpu_model())
    }

    fn gpu(&self) -> Result<String> {
        self.getprop("ro.board.platform").or_else(|_| self.linux.lspci_gpu())
    }

    fn disk_path(&self) -> &Path {
        Path::new("/data")
    }

    fn battery(&self) -> Result<String> {
        self.termux_battery().or_else(|e| {
            log::debug!("termux battery unavailable: {}", e);
            self.linux.sysfs_battery()
        })
    }

    fn local_ip(&self) -> Result<LocalAddress> {
        self.linux.local_ip()
    }
}

pub fn parse_termux_battery(json: &str) -> Result<String> {
    let battery: TermuxBattery = serde_json::from_str(json)?;
    Ok(format!(
        "{:.0}% [{}, {}]",
        battery.percentage, battery.status, battery.health
    ))
}

/// `Physical size: 1080x2400` -> `1080x2400`
pub fn parse_wm_size(output: &str) -> Option<String> {
    output
        .lines()
        .find_map(|line| line.split_once("Physical size:"))
        .map(|(_, size)| size.trim().to_string())
        .filter(|size| !size.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_termux_battery() {
        let json = r#"{
  "health": "GOOD",
  "percentage": 78,
  "plugged": "UNPLUGGED",
  "status": "DISCHARGING",
  "temperature": 29.5,
  "current": -412000
}"#;
        assert_eq!(parse_termux_battery(json).unwrap(), "78% [DISCHARGING, GOOD]");
    }

    #[test]
    fn test_parse_termux_battery_rejects_garbage() {
        assert!(matches!(
            parse_termux_battery("not json"),
            Err(FetchError::Json(_))
        ));
        assert!(parse_termux_battery(r#"{"percentage": 50}"#).is_err());
    }

    #[test]
    fn test_parse_wm_size() {
        let output = "Physical size: 1080x2400\nOverride size: 720x1600";
        assert_eq!(parse_wm_size(output).as_deref(), Some("1080x2400"));
        assert_eq!(parse_wm_size("Override size: 720x1600"), None);
    }
}
