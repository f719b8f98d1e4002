//! Known-parameter registry
//!
//! Curated labels for the identifiers documented for the RD5 controller
//! family, and the candidate tables behind the derived temperature
//! readings. Firmware variants report the same physical sensor under
//! different identifiers, so each reading is an ordered candidate list
//! and the first identifier present in the snapshot wins.

use rd5_conv::decode_temperature;

use crate::models::Snapshot;

/// Indoor air temperature (T-IDA) candidates, most common variant first
pub const INDOOR_TEMPERATURE_CANDIDATES: &[&str] =
    &["I10215", "I10222", "I10224", "I10225", "I10249"];

/// Outdoor air temperature (T-ODA) candidates, most common variant first
pub const OUTDOOR_TEMPERATURE_CANDIDATES: &[&str] = &["I10211", "I10275", "I10282", "I10281"];

/// Human-readable label for a parameter identifier. Unknown identifiers
/// come back unchanged, so this never fails.
pub fn parameter_name(id: &str) -> &str {
    match id {
        // System status and mode
        "I00000" => "System Status",
        "I00001" => "Mode",
        "I00002" => "Temperature",
        "I00004" => "Year",

        // Temperature sensors
        "I10211" => "Outdoor Air Temperature (T-ODA)",
        "I10212" => "Supply Air Temperature (T-SUP)",
        "I10213" => "Extract Air Temperature (T-ETA)",
        "I10214" => "Exhaust Air Temperature (T-EHA)",
        "I10215" => "Indoor Air Temperature (T-IDA)",
        "I10222" => "Indoor Air Temperature (alt)",
        "I10224" => "Extract Air Temperature (alt)",
        "I10225" => "Extract Air Temperature (alt)",
        "I10249" => "Supply Air Temperature (alt)",
        "I10275" => "Outdoor Air Temperature (alt)",
        "I10281" => "Outdoor Air Temperature (alt)",
        "I10282" => "Outdoor Air Temperature (alt)",

        // Fans and pressure
        "I10230" => "Supply Fan Speed",
        "I10244" => "Extract Fan Speed",
        "I10251" => "Supply Air Pressure",
        "I10262" => "Extract Air Pressure",
        "I10265" => "Fan Status",

        // Filters
        "I12015" => "Filter Status",
        "I12020" => "Filter Hours",

        // Holding values
        "H10715" => "Operating Mode",
        "H11010" => "Temperature Setpoint Mode 1",
        "H11017" => "Temperature Control Mode",
        "H11021" => "Desired Temperature",
        "H11400" => "Timezone Offset",
        "H11406" => "System Uptime",

        // Date/time
        "H10905" => "Year",
        "H10906" => "Month",
        "H10907" => "Day",

        // Network
        "H12200" => "Network DHCP",
        "H12201" => "IP Address",
        "H12202" => "Subnet Mask",
        "H12203" => "Gateway",
        "H12204" => "DNS Server",

        // Commands
        "C10005" => "System Reset",
        "C10007" => "Clear Mode",

        _ => id,
    }
}

/// Walk a candidate list and decode the first register present in the
/// snapshot. Entries whose value does not read back as a register in
/// `0..=65535` are skipped. Returns `0.0` when no candidate resolves,
/// the same unknown-reading sentinel the codec uses.
pub fn temperature_reading(snapshot: &Snapshot, candidates: &[&str]) -> f64 {
    for id in candidates {
        if let Some(raw) = snapshot.get(id).and_then(raw_register) {
            return decode_temperature(raw);
        }
    }
    0.0
}

/// Current room temperature, resolved across firmware variants
pub fn current_temperature(snapshot: &Snapshot) -> f64 {
    temperature_reading(snapshot, INDOOR_TEMPERATURE_CANDIDATES)
}

/// Outdoor air temperature, resolved across firmware variants
pub fn outdoor_temperature(snapshot: &Snapshot) -> f64 {
    temperature_reading(snapshot, OUTDOOR_TEMPERATURE_CANDIDATES)
}

/// Reinterpret a raw snapshot value as a 16-bit register. The device
/// occasionally renders integers with a fractional part, so this parses
/// as float and truncates rather than demanding integer syntax.
fn raw_register(value: &str) -> Option<u16> {
    let v = value.trim().parse::<f64>().ok()?;
    if !(0.0..=65535.0).contains(&v) {
        return None;
    }
    Some(v as u16)
}
