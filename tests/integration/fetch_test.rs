use omnifetch::commands::fetch::build_report;
use omnifetch::core::logo::find_by_name;
use omnifetch::core::system_info::Usage;
use omnifetch::platform::{CommandRunner, OsFamily, PlatformProbes};
use omnifetch::{FetchConfig, FetchError, Result};
use std::cell::RefCell;

/// Linux-looking host where only a handful of probes answer
struct StubHost {
    runner: CommandRunner,
    os: &'static str,
}

impl PlatformProbes for StubHost {
    fn family(&self) -> OsFamily {
        OsFamily::Linux
    }

    fn runner(&self) -> &CommandRunner {
        &self.runner
    }

    fn os_name(&self) -> Result<String> {
        Ok(self.os.to_string())
    }

    fn cpu_usage(&self) -> Result<f32> {
        Ok(12.5)
    }

    fn memory(&self) -> Result<Usage> {
        Ok(Usage {
            used_bytes: 1_073_741_824,
            total_bytes: 2_147_483_648,
        })
    }

    fn package_count(&self) -> Result<omnifetch::core::system_info::PackageCount> {
        Err(FetchError::CommandNotFound("dpkg".to_string()))
    }
}

fn stub(os: &'static str) -> StubHost {
    StubHost {
        runner: CommandRunner::default(),
        os,
    }
}

fn plain() -> FetchConfig {
    FetchConfig {
        color: false,
        ..FetchConfig::default()
    }
}

#[test]
fn test_detected_logo_in_first_column() {
    let report = build_report(&stub("Ubuntu 22.04.3 LTS"), &plain(), |_| panic!("no warning expected"));
    let ubuntu = find_by_name("Ubuntu").unwrap();
    let first_art_line = ubuntu.lines()[0];

    let rows = report.rows();
    assert!(rows[0].starts_with(&format!("  {}", first_art_line)));
    assert!(rows.iter().any(|row| row.ends_with("OS: Ubuntu 22.04.3 LTS")));
    assert!(rows.iter().any(|row| row.ends_with("Memory: 1.00 GiB / 2.00 GiB")));
    assert!(rows.iter().any(|row| row.ends_with("Packages: Unknown")));
    assert!(rows.iter().any(|row| row.contains("CPU: ") && row.ends_with("[12.50%]")));
}

#[test]
fn test_override_selects_requested_logo() {
    let config = FetchConfig {
        logo_override: Some("arch".to_string()),
        ..plain()
    };
    let report = build_report(&stub("Ubuntu 22.04.3 LTS"), &config, |_| panic!("no warning expected"));
    let arch = find_by_name("Arch").unwrap();
    assert_eq!(report.logo_width(), arch.lines().iter().map(|l| omnifetch::ui::visible_width(l)).max().unwrap());
    assert!(report.rows()[0].starts_with(&format!("  {}", arch.lines()[0])));
}

#[test]
fn test_unknown_override_reports_warning() {
    let config = FetchConfig {
        logo_override: Some("beos".to_string()),
        ..plain()
    };
    let warnings = RefCell::new(Vec::new());
    let report = build_report(&stub("Debian GNU/Linux 12 (bookworm)"), &config, |w| {
        warnings.borrow_mut().push(w.to_string())
    });

    assert_eq!(
        warnings.into_inner(),
        vec!["ASCII logo for 'beos' not found. Falling back to default.".to_string()]
    );
    let debian = find_by_name("Debian").unwrap();
    assert!(report.rows()[0].starts_with(&format!("  {}", debian.lines()[0])));
}
