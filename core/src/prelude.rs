use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Acquisition settings shared by the cost model and the projection reporter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcquisitionPlan {
    /// Present battery voltage (V).
    pub battery_voltage: f64,
    /// Duration of a single acquisition (minutes).
    pub acquisition_minutes: f64,
    /// Periodic schedule, if acquisitions repeat over a fixed window.
    pub periodic: Option<PeriodicSchedule>,
}

/// Repeated sampling at a fixed interval over a fixed total duration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PeriodicSchedule {
    pub interval_minutes: f64,
    pub duration_hours: f64,
}

/// Remaining sunlight used to credit solar recharge in projections.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SunnyForecast {
    pub remaining_hours: f64,
}

impl PeriodicSchedule {
    /// Number of acquisitions fitting in the schedule.
    pub fn acquisition_count(&self) -> f64 {
        self.duration_hours / (self.interval_minutes / 60.0)
    }
}

impl AcquisitionPlan {
    pub fn one_shot(battery_voltage: f64, acquisition_minutes: f64) -> Self {
        Self {
            battery_voltage,
            acquisition_minutes,
            periodic: None,
        }
    }

    pub fn periodic(
        battery_voltage: f64,
        acquisition_minutes: f64,
        interval_minutes: f64,
        duration_hours: f64,
    ) -> Self {
        Self {
            battery_voltage,
            acquisition_minutes,
            periodic: Some(PeriodicSchedule {
                interval_minutes,
                duration_hours,
            }),
        }
    }

    /// Total acquisition duration in minutes across the whole schedule.
    pub fn effective_minutes(&self) -> f64 {
        match self.periodic {
            Some(schedule) => schedule.acquisition_count() * self.acquisition_minutes,
            None => self.acquisition_minutes,
        }
    }
}

/// Common error type for telemetry table loading.
#[derive(thiserror::Error, Debug)]
pub enum TelemetryError {
    #[error("node id must be 1 or 2, got {0}")]
    InvalidNode(u8),
    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type TelemetryResult<T> = Result<T, TelemetryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periodic_schedule_counts_acquisitions() {
        let schedule = PeriodicSchedule {
            interval_minutes: 30.0,
            duration_hours: 2.0,
        };
        assert_eq!(schedule.acquisition_count(), 4.0);
    }

    #[test]
    fn effective_minutes_scales_with_schedule() {
        let plan = AcquisitionPlan::periodic(4.0, 10.0, 30.0, 2.0);
        assert_eq!(plan.effective_minutes(), 40.0);

        let one_shot = AcquisitionPlan::one_shot(4.0, 10.0);
        assert_eq!(one_shot.effective_minutes(), 10.0);
    }
}
