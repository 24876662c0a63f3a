//! Logo selection.
//!
//! The table is an ordered list checked top to bottom, so a key that is a
//! substring of another (`Linux` vs `Linux Mint`) must come after it. The
//! generic `Linux` entry stays last.

mod art;

use crate::platform::OsFamily;
use once_cell::sync::Lazy;

/// A distribution key and its trimmed art block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoEntry {
    pub key: &'static str,
    pub art: String,
}

impl LogoEntry {
    pub fn lines(&self) -> Vec<&str> {
        self.art.lines().collect()
    }
}

const TABLE: &[(&str, &str)] = &[
    ("CachyOS", art::CACHYOS),
    ("Zorin OS", art::ZORIN),
    ("OpenSUSE", art::OPENSUSE),
    ("elementary OS", art::ELEMENTARY),
    ("EndeavourOS", art::ENDEAVOUROS),
    ("Pop!_OS", art::POP_OS),
    ("Manjaro", art::MANJARO),
    ("Mint", art::MINT),
    ("Arch", art::ARCH),
    ("Fedora", art::FEDORA),
    ("Android", art::ANDROID),
    ("Ubuntu", art::UBUNTU),
    ("Debian", art::DEBIAN),
    ("NixOS", art::NIXOS),
    ("Gentoo", art::GENTOO),
    ("Pardus", art::PARDUS),
    ("Windows", art::WINDOWS),
    ("macOS", art::MACOS),
    ("aper", art::APER),
    ("Linux", art::TUX),
];

static LOGOS: Lazy<Vec<LogoEntry>> = Lazy::new(|| {
    TABLE
        .iter()
        .map(|&(key, art)| LogoEntry {
            key,
            art: trim_blank_lines(art),
        })
        .collect()
});

static PLACEHOLDER: Lazy<LogoEntry> = Lazy::new(|| LogoEntry {
    key: "aper",
    art: trim_blank_lines(art::APER),
});

/// Drop blank lines at the start and end, keeping indentation of the rest
pub fn trim_blank_lines(art: &str) -> String {
    let lines: Vec<&str> = art.lines().collect();
    let start = lines
        .iter()
        .position(|line| !line.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(start, |last| last + 1);
    lines[start..end].join("\n")
}

/// All logos in match order
pub fn logos() -> &'static [LogoEntry] {
    LOGOS.as_slice()
}

/// Case-insensitive exact lookup, used for explicit overrides
pub fn find_by_name(name: &str) -> Option<&'static LogoEntry> {
    let wanted = name.trim().to_lowercase();
    logos().iter().find(|entry| entry.key.to_lowercase() == wanted)
}

/// First entry whose key is contained in the OS description
pub fn detect(os_name: &str) -> Option<&'static LogoEntry> {
    let os_name = os_name.to_lowercase();
    logos()
        .iter()
        .find(|entry| os_name.contains(&entry.key.to_lowercase()))
}

/// Default logo for an OS family; `Other` gets the generic placeholder
pub fn family_default(family: OsFamily) -> &'static LogoEntry {
    let key = match family {
        OsFamily::Linux => "Linux",
        OsFamily::Android => "Android",
        OsFamily::MacOs => "macOS",
        OsFamily::Windows => "Windows",
        OsFamily::Other => return &*PLACEHOLDER,
    };
    find_by_name(key).unwrap_or(&*PLACEHOLDER)
}

/// Result of logo selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoSelection {
    pub entry: &'static LogoEntry,
    /// Set when an override was given but is not in the table
    pub warning: Option<String>,
}

impl LogoSelection {
    pub fn art(&self) -> &'static str {
        let entry: &'static LogoEntry = self.entry;
        &entry.art
    }
}

/// Choose the logo for the report.
///
/// A known override wins outright. An unknown one produces a warning and
/// falls through to detection from `os_name`, then to the family default.
pub fn select_logo(override_name: Option<&str>, os_name: &str, family: OsFamily) -> LogoSelection {
    let mut warning = None;

    if let Some(name) = override_name.filter(|name| !name.trim().is_empty()) {
        match find_by_name(name) {
            Some(entry) => return LogoSelection { entry, warning },
            None => {
                log::debug!("no logo named '{}'", name);
                warning = Some(format!(
                    "ASCII logo for '{}' not found. Falling back to default.",
                    name
                ));
            }
        }
    }

    let entry = detect(os_name).unwrap_or_else(|| family_default(family));
    LogoSelection { entry, warning }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_blank_lines_keeps_indentation() {
        let art = "\n\n   /\\\n  /  \\\n        \n";
        assert_eq!(trim_blank_lines(art), "   /\\\n  /  \\");
        assert_eq!(trim_blank_lines("\n \n"), "");
    }

    #[test]
    fn test_every_logo_is_trimmed() {
        for entry in logos() {
            let lines = entry.lines();
            assert!(!lines.is_empty(), "{} has no art", entry.key);
            assert!(!lines[0].trim().is_empty(), "{} starts blank", entry.key);
            assert!(!lines[lines.len() - 1].trim().is_empty(), "{} ends blank", entry.key);
        }
    }

    #[test]
    fn test_generic_linux_is_last() {
        assert_eq!(logos().last().map(|e| e.key), Some("Linux"));
    }

    #[test]
    fn test_specific_distro_beats_generic_linux() {
        assert_eq!(detect("Linux Mint 21.2").map(|e| e.key), Some("Mint"));
        assert_eq!(detect("Arch Linux").map(|e| e.key), Some("Arch"));
        assert_eq!(detect("Debian GNU/Linux 12 (bookworm)").map(|e| e.key), Some("Debian"));
        assert_eq!(detect("Some Unknown Linux").map(|e| e.key), Some("Linux"));
    }

    #[test]
    fn test_keys_are_not_shadowed() {
        // Every key must be matched by its own name, not an earlier entry
        for entry in logos() {
            assert_eq!(detect(entry.key).map(|e| e.key), Some(entry.key));
        }
    }

    #[test]
    fn test_family_defaults() {
        assert_eq!(family_default(OsFamily::Linux).key, "Linux");
        assert_eq!(family_default(OsFamily::MacOs).key, "macOS");
        assert_eq!(family_default(OsFamily::Windows).key, "Windows");
        assert_eq!(family_default(OsFamily::Other).art, trim_blank_lines(art::APER));
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let selection = select_logo(Some("  "), "Fedora Linux 39", OsFamily::Linux);
        assert_eq!(selection.entry.key, "Fedora");
        assert!(selection.warning.is_none());
    }
}
