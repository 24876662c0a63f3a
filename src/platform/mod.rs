//! Platform query layer.
//!
//! One probe provider per OS family, chosen once at startup. Every provider
//! implements [`PlatformProbes`]; the trait's default methods carry the
//! cross-platform behavior and a provider overrides only what differs on its
//! platform. Probes return `Err` for anything they cannot determine and never
//! panic.

pub mod android;
pub mod command;
pub mod common;
pub mod desktop;
pub mod env;
pub mod fs;
pub mod generic;
pub mod linux;
pub mod macos;
pub mod network;
pub mod packages;
pub mod power;
pub mod windows;

use crate::core::system_info::types::{Identity, LocalAddress, PackageCount, Usage};
use crate::error::{FetchError, Result};
use std::fmt;
use std::path::Path;

// Re-exports for cleaner imports
pub use android::AndroidProbes;
pub use command::CommandRunner;
pub use generic::GenericProbes;
pub use linux::{LinuxPaths, LinuxProbes};
pub use macos::MacProbes;
pub use windows::WindowsProbes;

/// Coarse operating-system family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Linux,
    Android,
    MacOs,
    Windows,
    Other,
}

impl OsFamily {
    /// Detect the family of the running host.
    ///
    /// `ANDROID_ROOT` marks Android even though it reports itself as Linux.
    pub fn detect() -> Self {
        Self::from_parts(env::is_android(env::system_lookup), std::env::consts::OS)
    }

    pub fn from_parts(android: bool, target_os: &str) -> Self {
        if android {
            return OsFamily::Android;
        }
        match target_os {
            "android" => OsFamily::Android,
            "linux" => OsFamily::Linux,
            "macos" => OsFamily::MacOs,
            "windows" => OsFamily::Windows,
            _ => OsFamily::Other,
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OsFamily::Linux => "Linux",
            OsFamily::Android => "Android",
            OsFamily::MacOs => "macOS",
            OsFamily::Windows => "Windows",
            OsFamily::Other => "Other",
        };
        f.write_str(name)
    }
}

/// Uniform set of host queries.
pub trait PlatformProbes {
    fn family(&self) -> OsFamily;

    /// Runner used for every external command of this provider
    fn runner(&self) -> &CommandRunner;

    fn os_name(&self) -> Result<String> {
        common::os_long_version()
    }

    /// Vendor and model of the machine
    fn host_model(&self) -> Result<String> {
        Err(FetchError::unsupported("host model"))
    }

    fn kernel_version(&self) -> Result<String> {
        common::kernel_version()
    }

    fn uptime_secs(&self) -> Result<u64> {
        common::uptime_secs()
    }

    fn package_count(&self) -> Result<PackageCount> {
        packages::count_installed(self.runner(), packages::UNIX_MANAGERS)
    }

    fn desktop_environment(&self) -> Result<String> {
        env::desktop_environment(env::system_lookup)
    }

    fn shell(&self) -> Result<String> {
        env::shell(env::system_lookup)
    }

    fn terminal(&self) -> Result<String> {
        env::terminal(env::system_lookup)
    }

    fn resolution(&self) -> Result<String> {
        Err(FetchError::unsupported("display resolution"))
    }

    fn theme(&self) -> Result<String> {
        desktop::gsettings_value(self.runner(), desktop::GTK_THEME_KEY)
    }

    fn icons(&self) -> Result<String> {
        desktop::gsettings_value(self.runner(), desktop::ICON_THEME_KEY)
    }

    fn cpu_model(&self) -> Result<String> {
        common::cpu_model()
    }

    fn cpu_count(&self) -> usize {
        common::cpu_count()
    }

    /// Momentary utilization in percent; blocks for the sampling window
    fn cpu_usage(&self) -> Result<f32> {
        common::cpu_usage(common::CPU_SAMPLE_WINDOW)
    }

    fn gpu(&self) -> Result<String> {
        Err(FetchError::unsupported("GPU"))
    }

    fn memory(&self) -> Result<Usage> {
        common::memory()
    }

    /// Path whose filesystem is reported as "Disk"
    fn disk_path(&self) -> &Path {
        Path::new("/")
    }

    fn disk(&self) -> Result<Usage> {
        common::disk_usage(self.disk_path())
    }

    fn battery(&self) -> Result<String> {
        power::first_battery()
    }

    fn locale(&self) -> Result<String> {
        env::locale(env::system_lookup)
    }

    fn local_ip(&self) -> Result<LocalAddress> {
        network::local_ip(None)
    }

    fn identity(&self) -> Identity {
        common::identity()
    }
}

/// Provider for the running host
pub fn detect(runner: CommandRunner) -> Box<dyn PlatformProbes> {
    provider_for(OsFamily::detect(), runner)
}

pub fn provider_for(family: OsFamily, runner: CommandRunner) -> Box<dyn PlatformProbes> {
    log::debug!("using {} probe provider", family);
    match family {
        OsFamily::Linux => Box::new(LinuxProbes::new(runner)),
        OsFamily::Android => Box::new(AndroidProbes::new(runner)),
        OsFamily::MacOs => Box::new(MacProbes::new(runner)),
        OsFamily::Windows => Box::new(WindowsProbes::new(runner)),
        OsFamily::Other => Box::new(GenericProbes::new(runner)),
    }
}
