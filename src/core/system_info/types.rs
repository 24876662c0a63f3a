use std::fmt;
use std::net::Ipv4Addr;

/// Sentinel shown when a probe could not determine its value
pub const UNKNOWN: &str = "Unknown";

/// Outcome of a single probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reading {
    Known(String),
    Unavailable,
}

impl Reading {
    pub fn is_known(&self) -> bool {
        matches!(self, Reading::Known(_))
    }

    /// The value, or the `Unknown` sentinel
    pub fn as_display(&self) -> &str {
        match self {
            Reading::Known(value) => value,
            Reading::Unavailable => UNKNOWN,
        }
    }
}

impl<T: fmt::Display, E> From<std::result::Result<T, E>> for Reading {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Reading::Known(value.to_string()),
            Err(_) => Reading::Unavailable,
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_display())
    }
}

/// When an attribute line is included in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Shown even when unavailable, with the sentinel value
    Always,
    /// Omitted entirely when unavailable
    WhenKnown,
}

/// Which part of an attribute line is emphasized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Label,
    /// Label and value together, for lines whose label carries data
    WholeLine,
}

/// One labelled line of host information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub label: String,
    pub value: Reading,
    pub visibility: Visibility,
    pub emphasis: Emphasis,
}

impl Attribute {
    pub fn new(label: impl Into<String>, value: Reading, visibility: Visibility) -> Self {
        Self {
            label: label.into(),
            value,
            visibility,
            emphasis: Emphasis::Label,
        }
    }

    pub fn emphasize_whole_line(mut self) -> Self {
        self.emphasis = Emphasis::WholeLine;
        self
    }

    pub fn always(label: impl Into<String>, value: Reading) -> Self {
        Self::new(label, value, Visibility::Always)
    }

    pub fn when_known(label: impl Into<String>, value: Reading) -> Self {
        Self::new(label, value, Visibility::WhenKnown)
    }

    pub fn is_shown(&self) -> bool {
        self.visibility == Visibility::Always || self.value.is_known()
    }
}

/// `user@hostname` header of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user: String,
    pub hostname: String,
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.user, self.hostname)
    }
}

/// Used and total bytes of a memory pool or filesystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    pub used_bytes: u64,
    pub total_bytes: u64,
}

/// First usable IPv4 address and the interface carrying it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAddress {
    pub interface: String,
    pub addr: Ipv4Addr,
}

impl LocalAddress {
    pub fn label(&self) -> String {
        format!("Local IP ({})", self.interface)
    }
}

impl fmt::Display for LocalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label(), self.addr)
    }
}

/// Installed package count reported by one package manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageCount {
    pub count: usize,
    pub manager: String,
}

impl fmt::Display for PackageCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.count, self.manager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_from_result() {
        let ok: Result<&str, ()> = Ok("GNOME");
        assert_eq!(Reading::from(ok), Reading::Known("GNOME".to_string()));

        let err: Result<&str, ()> = Err(());
        assert_eq!(Reading::from(err), Reading::Unavailable);
        assert_eq!(Reading::Unavailable.to_string(), UNKNOWN);
    }

    #[test]
    fn test_emphasis_defaults_to_label() {
        let attr = Attribute::always("Kernel", Reading::Known("6.8.0".into()));
        assert_eq!(attr.emphasis, Emphasis::Label);
        assert_eq!(attr.emphasize_whole_line().emphasis, Emphasis::WholeLine);
    }

    #[test]
    fn test_visibility_rules() {
        assert!(Attribute::always("OS", Reading::Unavailable).is_shown());
        assert!(!Attribute::when_known("DE", Reading::Unavailable).is_shown());
        assert!(Attribute::when_known("DE", Reading::Known("KDE".into())).is_shown());
    }

    #[test]
    fn test_package_count_display() {
        let count = PackageCount {
            count: 1834,
            manager: "dpkg".to_string(),
        };
        assert_eq!(count.to_string(), "1834 (dpkg)");
    }
}
