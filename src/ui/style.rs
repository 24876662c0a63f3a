// Line styling and escape-aware width

use colored::*;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_width::UnicodeWidthStr;

/// Fixed-width rule printed under the identity line
pub const SEPARATOR: &str = "-----------------";

static ANSI_ESCAPE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;?]*[A-Za-z]").ok());

/// Remove ANSI CSI sequences (colors, bold, reset)
pub fn strip_ansi(text: &str) -> String {
    match ANSI_ESCAPE.as_ref() {
        Some(re) => re.replace_all(text, "").into_owned(),
        None => text.to_string(),
    }
}

/// Printable width of `text` in terminal cells, ignoring escape sequences
pub fn visible_width(text: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(text).as_str())
}

/// Whether and how report lines are styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Style {
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// `Label: value` with the label in bold
    pub fn label_line(&self, label: &str, value: &str) -> String {
        let label = format!("{}:", label);
        if self.color {
            format!("{} {}", label.bold(), value)
        } else {
            format!("{} {}", label, value)
        }
    }

    /// `Label: value` with the whole line in bold
    pub fn bold_line(&self, label: &str, value: &str) -> String {
        let line = format!("{}: {}", label, value);
        if self.color {
            line.bold().to_string()
        } else {
            line
        }
    }

    pub fn identity(&self, text: &str) -> String {
        if self.color {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn separator(&self) -> String {
        if self.color {
            SEPARATOR.cyan().to_string()
        } else {
            SEPARATOR.to_string()
        }
    }

    pub fn logo(&self, text: &str) -> String {
        if self.color {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }
}
