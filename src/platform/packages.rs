//! Installed-package counting.

use crate::core::system_info::types::PackageCount;
use crate::error::{FetchError, Result};
use crate::platform::command::{is_available, CommandRunner};

/// How a manager's listing output is counted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFilter {
    /// Every non-empty line is one package
    NonEmpty,
    /// Only lines starting with this prefix are packages
    Prefix(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageManager {
    pub name: &'static str,
    pub args: &'static [&'static str],
    pub filter: LineFilter,
}

pub const DPKG: PackageManager = PackageManager {
    name: "dpkg",
    args: &["-l"],
    filter: LineFilter::Prefix("ii"),
};

pub const PACMAN: PackageManager = PackageManager {
    name: "pacman",
    args: &["-Q"],
    filter: LineFilter::NonEmpty,
};

pub const RPM: PackageManager = PackageManager {
    name: "rpm",
    args: &["-qa"],
    filter: LineFilter::NonEmpty,
};

pub const BREW: PackageManager = PackageManager {
    name: "brew",
    args: &["list", "--formula"],
    filter: LineFilter::NonEmpty,
};

/// Priority order on Linux-like systems
pub const UNIX_MANAGERS: &[PackageManager] = &[DPKG, PACMAN, RPM];

/// Priority order on macOS
pub const MACOS_MANAGERS: &[PackageManager] = &[DPKG, PACMAN, RPM, BREW];

pub fn count_lines(output: &str, filter: LineFilter) -> usize {
    output
        .lines()
        .filter(|line| match filter {
            LineFilter::NonEmpty => !line.trim().is_empty(),
            LineFilter::Prefix(prefix) => line.starts_with(prefix),
        })
        .count()
}

/// Count packages with the first manager in `managers` that is on `PATH`
/// and lists successfully.
pub fn count_installed(runner: &CommandRunner, managers: &[PackageManager]) -> Result<PackageCount> {
    for manager in managers.iter().filter(|m| is_available(m.name)) {
        match runner.run(manager.name, manager.args) {
            Ok(output) => {
                return Ok(PackageCount {
                    count: count_lines(&output, manager.filter),
                    manager: manager.name.to_string(),
                })
            }
            Err(e) => log::debug!("{} listing failed: {}", manager.name, e),
        }
    }
    Err(FetchError::not_found("package manager"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dpkg_counts_installed_rows_only() {
        let output = "\
Desired=Unknown/Install/Remove/Purge/Hold
| Status=Not/Inst/Conf-files/Unpacked/halF-conf/Half-inst/trig-aWait/Trig-pend
||/ Name           Version      Architecture Description
+++-==============-============-============-=================================
ii  adduser        3.118        all          add and remove users and groups
rc  oldpkg         1.0          amd64        removed but configured
ii  apt            2.6.1        amd64        commandline package manager";
        assert_eq!(count_lines(output, DPKG.filter), 2);
    }

    #[test]
    fn test_non_empty_lines() {
        let output = "bash 5.2.026-1\n\ncoreutils 9.5-1\nglibc 2.40-1\n";
        assert_eq!(count_lines(output, LineFilter::NonEmpty), 3);
        assert_eq!(count_lines("", LineFilter::NonEmpty), 0);
    }

    #[test]
    fn test_no_manager_is_unavailable() {
        let fake = PackageManager {
            name: "omnifetch-no-such-package-manager",
            args: &[],
            filter: LineFilter::NonEmpty,
        };
        let runner = CommandRunner::default();
        assert!(matches!(
            count_installed(&runner, &[fake]),
            Err(FetchError::NotFound(_))
        ));
    }

    #[test]
    fn test_priority_order() {
        let names: Vec<_> = MACOS_MANAGERS.iter().map(|m| m.name).collect();
        assert_eq!(names, ["dpkg", "pacman", "rpm", "brew"]);
        assert!(!UNIX_MANAGERS.contains(&BREW));
    }
}
