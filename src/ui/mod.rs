// UI and formatting module

pub mod formatters;
pub mod prompts;
pub mod render;
pub mod style;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_gib_usage, format_percent, format_uptime};
pub use prompts::warn;
pub use render::Report;
pub use style::{visible_width, Style};
