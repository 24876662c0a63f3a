use omnifetch::core::system_info::{collect_report, Reading};
use omnifetch::platform::{provider_for, CommandRunner, LinuxPaths, LinuxProbes, OsFamily, PlatformProbes};
use omnifetch::ui::Style;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn linux_root() -> (TempDir, LinuxPaths) {
    let root = TempDir::new().unwrap();
    let paths = LinuxPaths::rooted_at(root.path());
    fs::create_dir_all(paths.os_release.parent().unwrap()).unwrap();
    fs::create_dir_all(&paths.dmi_dir).unwrap();
    fs::create_dir_all(&paths.power_supply_dir).unwrap();
    fs::create_dir_all(&paths.net_dir).unwrap();
    (root, paths)
}

fn runner() -> CommandRunner {
    CommandRunner::new(Duration::from_millis(2000))
}

#[test]
fn test_linux_report_from_fake_tree() {
    let (_root, paths) = linux_root();
    fs::write(
        &paths.os_release,
        "NAME=\"Ubuntu\"\nVERSION_ID=\"22.04\"\nPRETTY_NAME=\"Ubuntu 22.04.3 LTS\"\n",
    )
    .unwrap();
    fs::write(paths.dmi_dir.join("sys_vendor"), "Dell Inc.\n").unwrap();
    fs::write(paths.dmi_dir.join("product_name"), "XPS 13 9310\n").unwrap();

    let probes = LinuxProbes::with_paths(runner(), paths);
    let report = collect_report(&probes);
    let lines = report.lines(Style::plain());

    assert_eq!(lines[2], "OS: Ubuntu 22.04.3 LTS");
    assert_eq!(lines[3], "Host: Dell Inc. XPS 13 9310");
    assert!(lines[4].starts_with("Kernel: "));
    assert!(lines[5].starts_with("Uptime: "));
    assert!(lines.iter().any(|line| line.starts_with("CPU: ")));
}

#[test]
fn test_missing_sources_never_panic() {
    let root = TempDir::new().unwrap();
    let probes = LinuxProbes::with_paths(runner(), LinuxPaths::rooted_at(root.path()));

    assert!(probes.host_model().is_err());
    let report = collect_report(&probes);

    let host = report.attributes.iter().find(|a| a.label == "Host").unwrap();
    assert_eq!(host.value, Reading::Unavailable);
    assert!(!report.visible().any(|a| a.label == "Host"));

    // OS always has a line, even when os-release is missing
    assert!(report.visible().any(|a| a.label == "OS"));
}

#[test]
fn test_always_shown_attributes_present_on_any_provider() {
    let probes = provider_for(OsFamily::Other, runner());
    let report = collect_report(probes.as_ref());
    let labels: Vec<&str> = report.visible().map(|a| a.label.as_str()).collect();

    for label in ["OS", "Kernel", "Uptime", "Packages", "Shell", "CPU", "GPU", "Memory", "Disk"] {
        assert!(labels.contains(&label), "missing {}", label);
    }
    // Generic provider has no GPU probe
    let gpu = report.attributes.iter().find(|a| a.label == "GPU").unwrap();
    assert_eq!(gpu.value.as_display(), "Unknown");
}
