//! Physical and energy constants for the node battery model.
//!
//! Every figure here comes from the field-test notes for the deployed
//! hardware; the estimation formulas treat them as immutable.

/// Current drawn while reading the sensors (mA).
pub const READ_ENERGY_MA: f64 = 10.0;

/// Current drawn while the node wakes up (mA). Recorded with the hardware
/// figures but not consumed by any estimation formula.
pub const WAKE_UP_MA: f64 = 2.0;

/// Time to read every subsystem except the microphones (minutes).
pub const READ_TIME_MINUTES: f64 = 7.0;

/// Battery capacity (mAh).
pub const BATTERY_CAPACITY_MAH: f64 = 1000.0;

/// Nominal battery energy (mWh-equivalent), referenced to the cutoff voltage.
// TODO: confirm the 6 V nominal figure against the battery datasheet.
pub const BATTERY_NOMINAL_ENERGY_MWH: f64 = (6.0 - 3.3) * 1000.0;

/// Solar recharge credited per sunny hour (mWh-equivalent).
pub const SOLAR_RECHARGE_MWH_PER_HOUR: f64 = 33.6;

/// Supply voltage used to convert mAh draw into mWh-equivalent energy (V).
pub const SUPPLY_VOLTAGE: f64 = 3.3;

/// Voltage below which the battery is treated as exhausted (V).
pub const CUTOFF_VOLTAGE: f64 = 3.3;
