// GTK theme and icon lookups through gsettings

use crate::error::{FetchError, Result};
use crate::platform::command::{is_available, CommandRunner};

pub const INTERFACE_SCHEMA: &str = "org.gnome.desktop.interface";
pub const GTK_THEME_KEY: &str = "gtk-theme";
pub const ICON_THEME_KEY: &str = "icon-theme";

/// gsettings prints string values quoted, e.g. `'Adwaita-dark'`
pub fn unquote(raw: &str) -> Option<String> {
    let value = raw.trim().trim_matches('\'').trim_matches('"').trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub fn gsettings_value(runner: &CommandRunner, key: &str) -> Result<String> {
    if !is_available("gsettings") {
        return Err(FetchError::CommandNotFound("gsettings".to_string()));
    }
    let raw = runner.run("gsettings", &["get", INTERFACE_SCHEMA, key])?;
    unquote(&raw).ok_or_else(|| FetchError::not_found(format!("gsettings {key}")))
}
