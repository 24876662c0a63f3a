// Battery status through the `battery` crate

use crate::error::{FetchError, Result};
use ::battery::units::ratio::percent;
use ::battery::{Manager, State};

pub fn state_label(state: State) -> &'static str {
    match state {
        State::Charging => "Charging",
        State::Discharging => "Discharging",
        State::Full => "Full",
        State::Empty => "Empty",
        _ => "Unknown",
    }
}

pub fn format_battery(charge: f32, state: &str) -> String {
    format!("{:.0}% [{}]", charge, state)
}

/// Charge and state of the first battery the library reports
pub fn first_battery() -> Result<String> {
    let manager = Manager::new()?;
    let battery = manager
        .batteries()?
        .next()
        .ok_or_else(|| FetchError::not_found("battery"))??;

    let charge = battery.state_of_charge().get::<percent>();
    Ok(format_battery(charge, state_label(battery.state())))
}
