// Core fetch logic

pub mod config;
pub mod logo;
pub mod system_info;

// Re-export commonly used items
pub use config::FetchConfig;
pub use logo::{select_logo, LogoSelection};
pub use system_info::{collect_report, SystemReport};
