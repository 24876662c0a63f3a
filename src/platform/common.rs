//! Cross-platform probes backed by `sysinfo`.

use crate::core::system_info::types::{Identity, Usage};
use crate::error::{FetchError, Result};
use std::path::Path;
use std::time::Duration;
use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, RefreshKind, System};

/// Sampling window for the momentary CPU utilization
pub const CPU_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

const FALLBACK_USER: &str = "fetcher";
const FALLBACK_HOST: &str = "localhost";

/// Long OS description from the host library, e.g. `Linux (Fedora 39)`
pub fn os_long_version() -> Result<String> {
    System::long_os_version()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| FetchError::not_found("OS version"))
}

pub fn kernel_version() -> Result<String> {
    System::kernel_version()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| FetchError::not_found("kernel version"))
}

pub fn uptime_secs() -> Result<u64> {
    match System::uptime() {
        0 => Err(FetchError::not_found("uptime")),
        secs => Ok(secs),
    }
}

pub fn cpu_model() -> Result<String> {
    let refresh = RefreshKind::nothing().with_cpu(CpuRefreshKind::everything());
    let sys = System::new_with_specifics(refresh);

    sys.cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .filter(|brand| !brand.is_empty())
        .ok_or_else(|| FetchError::not_found("CPU model"))
}

/// Number of logical CPUs available to this process
pub fn cpu_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Global CPU utilization in percent, sampled over `window`.
///
/// Blocks the calling thread for the whole window.
pub fn cpu_usage(window: Duration) -> Result<f32> {
    let refresh = RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing().with_cpu_usage());
    let mut sys = System::new_with_specifics(refresh);

    // Usage is a delta, so it needs two refreshes around the window
    sys.refresh_cpu_usage();
    std::thread::sleep(window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
    sys.refresh_cpu_usage();

    if sys.cpus().is_empty() {
        return Err(FetchError::not_found("CPU usage"));
    }
    let usage = sys.global_cpu_usage();
    if !usage.is_finite() {
        return Err(FetchError::parse(format!("CPU usage sample {usage}")));
    }
    Ok(usage)
}

pub fn memory() -> Result<Usage> {
    let refresh = RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram());
    let sys = System::new_with_specifics(refresh);

    let total = sys.total_memory();
    if total == 0 {
        return Err(FetchError::not_found("memory totals"));
    }
    Ok(Usage {
        used_bytes: sys.used_memory(),
        total_bytes: total,
    })
}

/// Usage of the filesystem holding `path`
pub fn disk_usage(path: &Path) -> Result<Usage> {
    let disks = Disks::new_with_refreshed_list();
    let mounts = disks.list().iter().map(|disk| {
        let total = disk.total_space();
        (
            disk.mount_point(),
            Usage {
                used_bytes: total.saturating_sub(disk.available_space()),
                total_bytes: total,
            },
        )
    });

    select_mount(mounts, path)
        .ok_or_else(|| FetchError::not_found(format!("filesystem for {}", path.display())))
}

/// Pick the mount whose mount point is the longest prefix of `target`.
///
/// Only the first disk with a given mount point is considered.
pub fn select_mount<'a, I>(mounts: I, target: &Path) -> Option<Usage>
where
    I: IntoIterator<Item = (&'a Path, Usage)>,
{
    let mut best: Option<(usize, Usage)> = None;
    for (mount, usage) in mounts {
        if usage.total_bytes == 0 || !target.starts_with(mount) {
            continue;
        }
        let depth = mount.components().count();
        if best.map_or(true, |(best_depth, _)| depth > best_depth) {
            best = Some((depth, usage));
        }
    }
    best.map(|(_, usage)| usage)
}

/// `user@hostname`; user is the home directory's base name
pub fn identity() -> Identity {
    let user = dirs::home_dir()
        .and_then(|home| home.file_name().map(|n| n.to_string_lossy().to_string()))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_USER.to_string());
    let hostname = System::host_name()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_HOST.to_string());

    Identity { user, hostname }
}
