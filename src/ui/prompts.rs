// User-facing notices

use colored::Colorize;

/// Warning line, yellow and bold when styling is on
pub fn warning_text(message: &str, color: bool) -> String {
    let text = format!("Warning: {}", message);
    if color {
        text.yellow().bold().to_string()
    } else {
        text
    }
}

/// Print a warning to stdout
pub fn warn(message: &str, color: bool) {
    println!("{}", warning_text(message, color));
}
