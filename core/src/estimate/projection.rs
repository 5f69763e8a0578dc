use crate::constants::{
    BATTERY_CAPACITY_MAH, BATTERY_NOMINAL_ENERGY_MWH, CUTOFF_VOLTAGE, READ_ENERGY_MA,
    READ_TIME_MINUTES, SOLAR_RECHARGE_MWH_PER_HOUR, SUPPLY_VOLTAGE,
};
use crate::estimate::cost::CostReport;
use crate::prelude::{AcquisitionPlan, SunnyForecast};
use log::debug;

/// Projected battery state after running one feasible scenario.
#[derive(Debug, Clone)]
pub struct ScenarioProjection {
    pub name: &'static str,
    pub remaining_energy_mwh: f64,
    /// Remaining charge as a percentage of nominal energy, clamped at 0.
    pub remaining_percentage: f64,
    pub remaining_voltage: f64,
    /// How many consecutive repeats the remaining charge permits.
    pub repeats: u64,
}

/// The projection uses its own read-time rule: every subsystem reads in the
/// fixed window except the microphones, which take ten times as long. This
/// differs from the cost model's substring rule on purpose; both behaviors
/// were measured separately in the field.
fn projection_read_minutes(name: &str) -> f64 {
    if name.contains("Mics") {
        READ_TIME_MINUTES * 10.0
    } else {
        READ_TIME_MINUTES
    }
}

fn repeat_count(mut remaining_mwh: f64, cost_mwh: f64) -> u64 {
    // A non-positive cost would never drain the budget; report zero repeats
    // rather than loop forever.
    if cost_mwh <= 0.0 {
        return 0;
    }
    let mut repeats = 0;
    while remaining_mwh >= cost_mwh {
        remaining_mwh -= cost_mwh;
        repeats += 1;
    }
    repeats
}

/// Projects the remaining charge after one run of each feasible scenario in
/// `report`, crediting solar recharge when `sunny` is given. Scenarios whose
/// projected voltage falls below the cutoff are treated as exhausted and
/// dropped from the result.
pub fn project_feasible(
    plan: &AcquisitionPlan,
    report: &CostReport,
    sunny: Option<SunnyForecast>,
) -> Vec<ScenarioProjection> {
    let acquisitions = match plan.periodic {
        Some(schedule) => schedule.acquisition_count(),
        None => 1.0,
    };

    let mut projections = Vec::new();
    for entry in report.feasible() {
        let scenario = entry.scenario;
        let read_minutes = projection_read_minutes(scenario.name);
        let draw_mwh = SUPPLY_VOLTAGE
            * (plan.acquisition_minutes / 60.0 * scenario.draw_ma
                + read_minutes / 60.0 * READ_ENERGY_MA);
        let mut remaining_mwh = report.capacity_baseline - draw_mwh * acquisitions;

        if let Some(forecast) = sunny {
            let credited_hours = if plan.periodic.is_some() {
                forecast.remaining_hours
            } else {
                (read_minutes + plan.acquisition_minutes) / 60.0
            };
            remaining_mwh += SOLAR_RECHARGE_MWH_PER_HOUR * credited_hours;
        }

        let remaining_percentage =
            (remaining_mwh / BATTERY_NOMINAL_ENERGY_MWH * 100.0).max(0.0);
        let remaining_voltage = remaining_mwh / BATTERY_CAPACITY_MAH + CUTOFF_VOLTAGE;

        if remaining_voltage < CUTOFF_VOLTAGE {
            debug!(
                "scenario {} projects {:.2} V, below cutoff; dropped",
                scenario.name, remaining_voltage
            );
            continue;
        }

        let repeats = repeat_count(remaining_mwh, entry.cost_mwh);
        projections.push(ScenarioProjection {
            name: scenario.name,
            remaining_energy_mwh: remaining_mwh,
            remaining_percentage,
            remaining_voltage,
            repeats,
        });
    }
    projections
}
