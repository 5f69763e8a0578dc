pub mod cost;
pub mod projection;

pub use cost::{compute_costs, CostReport, ScenarioCost};
pub use projection::{project_feasible, ScenarioProjection};
