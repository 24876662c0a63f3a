pub mod collector;
pub mod types;

pub use collector::{collect_report, SystemReport};
pub use types::*;
