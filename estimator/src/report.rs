use battcore::estimate::{CostReport, ScenarioProjection};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Renders the estimation outcome as the lines printed to the operator.
pub fn render_lines(report: &CostReport, projections: &[ScenarioProjection]) -> Vec<String> {
    let feasible = report.feasible_names();
    if feasible.is_empty() {
        return vec![
            "No scenarios are possible with the current battery voltage and acquisition time."
                .to_string(),
        ];
    }

    let mut lines = vec![
        "Possible scenarios with the current battery voltage and acquisition time:".to_string(),
        feasible.join(", "),
    ];
    for projection in projections {
        lines.push(format!(
            "{} - Remaining battery level: {:.2}% - Remaining battery voltage: {:.2}V - Scenario can be repeated: {}",
            projection.name,
            projection.remaining_percentage,
            projection.remaining_voltage,
            projection.repeats
        ));
    }
    lines
}

/// Prints the report to stdout and, when a path is given, appends the same
/// lines to the run log.
pub fn emit(lines: &[String], report_path: Option<&Path>) -> anyhow::Result<()> {
    for line in lines {
        println!("{line}");
    }

    if let Some(path) = report_path {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        for line in lines {
            file.write_all(line.as_bytes())?;
            file.write_all(b"\n")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use battcore::estimate::{compute_costs, project_feasible};
    use battcore::AcquisitionPlan;

    #[test]
    fn report_lines_follow_the_field_format() {
        let plan = AcquisitionPlan::one_shot(4.0, 10.0);
        let report = compute_costs(&plan, None);
        let projections = project_feasible(&plan, &report, None);
        let lines = render_lines(&report, &projections);

        assert_eq!(
            lines[0],
            "Possible scenarios with the current battery voltage and acquisition time:"
        );
        assert!(lines[1].contains("IMU"));
        let imu_line = lines
            .iter()
            .find(|line| line.starts_with("IMU - "))
            .unwrap();
        assert_eq!(
            imu_line,
            "IMU - Remaining battery level: 25.62% - Remaining battery voltage: 3.99V - Scenario can be repeated: 83"
        );
    }

    #[test]
    fn empty_feasible_set_reports_no_scenarios() {
        let plan = AcquisitionPlan::one_shot(3.3, 10.0);
        let report = compute_costs(&plan, None);
        let projections = project_feasible(&plan, &report, None);
        let lines = render_lines(&report, &projections);
        assert_eq!(
            lines,
            vec![
                "No scenarios are possible with the current battery voltage and acquisition time."
                    .to_string()
            ]
        );
    }

    #[test]
    fn emit_appends_to_the_run_log() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("logs").join("estimates.log");
        let lines = vec!["first".to_string(), "second".to_string()];

        emit(&lines, Some(&path)).unwrap();
        emit(&lines, Some(&path)).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\nfirst\nsecond\n");
    }
}
