// Filesystem helpers for pseudo-files and release descriptions

use crate::error::{FetchError, Result};
use std::fs;
use std::path::Path;

/// Well-known OS release description file
pub const OS_RELEASE: &str = "/etc/os-release";

/// Read a file and return its trimmed contents; empty files are an error.
pub fn read_trimmed(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let content = content.trim();
    if content.is_empty() {
        return Err(FetchError::not_found(format!("{} is empty", path.display())));
    }
    Ok(content.to_string())
}

/// Extract the `PRETTY_NAME` value from os-release formatted text.
pub fn parse_pretty_name(content: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| line.strip_prefix("PRETTY_NAME="))
        .map(|value| value.trim().trim_matches('"').trim_matches('\'').to_string())
        .filter(|value| !value.is_empty())
}

/// Read the pretty OS name from an os-release file.
pub fn read_pretty_name(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    parse_pretty_name(&content)
        .ok_or_else(|| FetchError::not_found(format!("PRETTY_NAME in {}", path.display())))
}
