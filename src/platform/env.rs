// Environment-variable probes
//
// Each probe takes a lookup function so tests can feed a fixed environment
// instead of mutating the process one.

use crate::error::{FetchError, Result};
use std::path::Path;

/// Lookup against the real process environment; empty values count as unset.
pub fn system_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Return the first variable in `names` that is set.
pub fn first_set<F>(names: &[&str], lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    names
        .iter()
        .find_map(|name| lookup(name).filter(|value| !value.trim().is_empty()))
        .ok_or_else(|| FetchError::missing_env(names.join(" / ")))
}

pub fn is_android<F: Fn(&str) -> Option<String>>(lookup: F) -> bool {
    first_set(&["ANDROID_ROOT"], lookup).is_ok()
}

pub fn desktop_environment<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<String> {
    first_set(&["XDG_CURRENT_DESKTOP", "DESKTOP_SESSION"], lookup)
}

pub fn terminal<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<String> {
    first_set(&["TERM_PROGRAM", "TERM"], lookup)
}

/// Base name of `$SHELL`, e.g. `/usr/bin/zsh` -> `zsh`
pub fn shell<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<String> {
    let path = first_set(&["SHELL"], lookup)?;
    Path::new(&path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| FetchError::parse(format!("shell path '{path}' has no file name")))
}

/// `$LANG` without its encoding suffix, e.g. `en_US.UTF-8` -> `en_US`
pub fn locale<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<String> {
    let lang = first_set(&["LANG"], lookup)?;
    let locale = lang.split('.').next().unwrap_or_default().trim();
    if locale.is_empty() {
        return Err(FetchError::parse(format!("unusable LANG value '{lang}'")));
    }
    Ok(locale.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_desktop_prefers_xdg_current_desktop() {
        let lookup = env_of(&[("XDG_CURRENT_DESKTOP", "GNOME"), ("DESKTOP_SESSION", "ubuntu")]);
        assert_eq!(desktop_environment(lookup).unwrap(), "GNOME");

        let lookup = env_of(&[("DESKTOP_SESSION", "plasma")]);
        assert_eq!(desktop_environment(lookup).unwrap(), "plasma");
    }

    #[test]
    fn test_desktop_missing_is_error() {
        assert!(matches!(
            desktop_environment(env_of(&[])),
            Err(FetchError::MissingEnv(_))
        ));
    }

    #[test]
    fn test_empty_value_counts_as_unset() {
        let lookup = env_of(&[("TERM_PROGRAM", ""), ("TERM", "xterm-256color")]);
        assert_eq!(terminal(lookup).unwrap(), "xterm-256color");
    }

    #[test]
    fn test_shell_base_name() {
        let lookup = env_of(&[("SHELL", "/usr/bin/zsh")]);
        assert_eq!(shell(lookup).unwrap(), "zsh");
        assert!(shell(env_of(&[])).is_err());
    }

    #[test]
    fn test_locale_drops_encoding() {
        assert_eq!(locale(env_of(&[("LANG", "en_US.UTF-8")])).unwrap(), "en_US");
        assert_eq!(locale(env_of(&[("LANG", "C")])).unwrap(), "C");
        assert!(locale(env_of(&[("LANG", ".UTF-8")])).is_err());
    }

    #[test]
    fn test_android_detection() {
        assert!(is_android(env_of(&[("ANDROID_ROOT", "/system")])));
        assert!(!is_android(env_of(&[])));
    }
}
