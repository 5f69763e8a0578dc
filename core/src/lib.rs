//! Battery estimation core for the sensor-node field tooling.
//!
//! The modules mirror the deployment's field-test workflow: a telemetry
//! reader for the per-node battery exports, and the closed-form scenario
//! cost / projection arithmetic used to plan acquisitions in the field.

pub mod constants;
pub mod estimate;
pub mod prelude;
pub mod scenario;
pub mod telemetry;

pub use prelude::{AcquisitionPlan, PeriodicSchedule, SunnyForecast};
