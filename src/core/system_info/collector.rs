use crate::core::system_info::types::*;
use crate::error::Result;
use crate::platform::PlatformProbes;
use crate::ui::formatters::{format_gib_usage, format_percent, format_uptime};
use crate::ui::style::Style;
use log::debug;

/// Shown in place of the CPU usage when sampling fails
pub const USAGE_UNAVAILABLE: &str = "N/A";

/// Everything gathered for one report, in presentation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemReport {
    pub identity: Identity,
    pub attributes: Vec<Attribute>,
}

impl SystemReport {
    /// Attributes that survive the visibility filter
    pub fn visible(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter().filter(|attr| attr.is_shown())
    }

    /// Info column: identity, separator, then one `Label: value` line per shown attribute
    pub fn lines(&self, style: Style) -> Vec<String> {
        let mut lines = vec![
            style.identity(&self.identity.to_string()),
            style.separator(),
        ];
        lines.extend(self.visible().map(|attr| match attr.emphasis {
            Emphasis::Label => style.label_line(&attr.label, attr.value.as_display()),
            Emphasis::WholeLine => style.bold_line(&attr.label, attr.value.as_display()),
        }));
        lines
    }
}

/// Turn a probe result into a reading, logging the failure
fn reading<T: std::fmt::Display>(what: &str, result: Result<T>) -> Reading {
    if let Err(e) = &result {
        debug!("{} unavailable: {}", what, e);
    }
    Reading::from(result)
}

fn usage_reading(what: &str, result: Result<Usage>) -> Reading {
    reading(
        what,
        result.map(|usage| format_gib_usage(usage.used_bytes, usage.total_bytes)),
    )
}

fn cpu_line(probes: &dyn PlatformProbes) -> Reading {
    let model = reading("CPU model", probes.cpu_model());
    let usage = match probes.cpu_usage() {
        Ok(percent) => format_percent(percent),
        Err(e) => {
            debug!("CPU usage unavailable: {}", e);
            USAGE_UNAVAILABLE.to_string()
        }
    };
    Reading::Known(format!(
        "{} ({}) [{}]",
        model.as_display(),
        probes.cpu_count(),
        usage
    ))
}

fn local_ip_attribute(probes: &dyn PlatformProbes) -> Attribute {
    match probes.local_ip() {
        Ok(address) => {
            Attribute::when_known(address.label(), Reading::Known(address.addr.to_string()))
                .emphasize_whole_line()
        }
        Err(e) => {
            debug!("local IP unavailable: {}", e);
            Attribute::when_known("Local IP", Reading::Unavailable)
        }
    }
}

/// Run every probe once, in presentation order
pub fn collect_report(probes: &dyn PlatformProbes) -> SystemReport {
    let identity = probes.identity();

    let attributes = vec![
        Attribute::always("OS", reading("OS", probes.os_name())),
        Attribute::when_known("Host", reading("host model", probes.host_model())),
        Attribute::always("Kernel", reading("kernel", probes.kernel_version())),
        Attribute::always(
            "Uptime",
            reading("uptime", probes.uptime_secs().map(format_uptime)),
        ),
        Attribute::always("Packages", reading("packages", probes.package_count())),
        Attribute::when_known("DE", reading("desktop environment", probes.desktop_environment())),
        Attribute::always("Shell", reading("shell", probes.shell())),
        Attribute::when_known("Terminal", reading("terminal", probes.terminal())),
        Attribute::when_known("Resolution", reading("resolution", probes.resolution())),
        Attribute::when_known("Theme", reading("theme", probes.theme())),
        Attribute::when_known("Icons", reading("icons", probes.icons())),
        Attribute::always("CPU", cpu_line(probes)),
        Attribute::always("GPU", reading("GPU", probes.gpu())),
        Attribute::always("Memory", usage_reading("memory", probes.memory())),
        Attribute::always("Disk", usage_reading("disk", probes.disk())),
        Attribute::when_known("Battery", reading("battery", probes.battery())),
        Attribute::when_known("Locale", reading("locale", probes.locale())),
        local_ip_attribute(probes),
    ];

    SystemReport {
        identity,
        attributes,
    }
}
