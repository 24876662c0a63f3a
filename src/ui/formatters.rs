const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Convert bytes to binary gibibytes
pub fn bytes_to_gib(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GIB
}

/// Format used/total bytes as `1.00 GiB / 2.00 GiB`
pub fn format_gib_usage(used_bytes: u64, total_bytes: u64) -> String {
    format!(
        "{:.2} GiB / {:.2} GiB",
        bytes_to_gib(used_bytes),
        bytes_to_gib(total_bytes)
    )
}

/// Format seconds since boot as `D days, H hours, M mins`
pub fn format_uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let mins = (secs % 3_600) / 60;
    format!("{} days, {} hours, {} mins", days, hours, mins)
}

/// Format a percentage with two decimals, e.g. `12.50%`
pub fn format_percent(value: f32) -> String {
    format!("{:.2}%", value)
}
