use anyhow::Context;
use battcore::{AcquisitionPlan, SunnyForecast};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

/// Fully resolved estimation inputs, whether they came from flags, a config
/// file, or the interactive prompts.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EstimatorConfig {
    pub voltage: f64,
    pub acquisition_minutes: f64,
    #[serde(default)]
    pub sunny_hours: Option<f64>,
    #[serde(default)]
    pub periodic: Option<PeriodicConfig>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PeriodicConfig {
    pub interval_minutes: f64,
    pub duration_hours: f64,
}

/// Inputs already pinned down on the command line; anything left `None` is
/// collected interactively.
#[derive(Clone, Copy, Debug, Default)]
pub struct CliOverrides {
    pub voltage: Option<f64>,
    pub acquisition_minutes: Option<f64>,
    pub sunny_hours: Option<f64>,
    pub interval_minutes: Option<f64>,
    pub duration_hours: Option<f64>,
}

impl EstimatorConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading estimator config {}", path_ref.display()))?;
        let config: EstimatorConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing estimator config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn plan(&self) -> AcquisitionPlan {
        match self.periodic {
            Some(periodic) => AcquisitionPlan::periodic(
                self.voltage,
                self.acquisition_minutes,
                periodic.interval_minutes,
                periodic.duration_hours,
            ),
            None => AcquisitionPlan::one_shot(self.voltage, self.acquisition_minutes),
        }
    }

    pub fn sunny(&self) -> Option<SunnyForecast> {
        self.sunny_hours.map(|remaining_hours| SunnyForecast { remaining_hours })
    }
}

fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> anyhow::Result<String> {
    write!(output, "{question}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("reading input")?;
    Ok(line.trim().to_string())
}

fn prompt_f64<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> anyhow::Result<f64> {
    let line = prompt_line(input, output, question)?;
    line.parse::<f64>()
        .with_context(|| format!("expected a number, got {line:?}"))
}

fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> anyhow::Result<bool> {
    // Anything other than "yes" counts as no, matching the field procedure.
    Ok(prompt_line(input, output, question)?.to_lowercase() == "yes")
}

/// Fills in whatever the command line left unspecified through the
/// sequential field prompts.
pub fn collect<R: BufRead, W: Write>(
    overrides: &CliOverrides,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<EstimatorConfig> {
    let voltage = match overrides.voltage {
        Some(value) => value,
        None => prompt_f64(input, output, "Enter the battery voltage (V): ")?,
    };
    let acquisition_minutes = match overrides.acquisition_minutes {
        Some(value) => value,
        None => prompt_f64(input, output, "Enter the acquisition time (in minutes): ")?,
    };

    let sunny_hours = match overrides.sunny_hours {
        Some(hours) => Some(hours),
        None => {
            if prompt_yes_no(input, output, "Is it sunny? (yes/no): ")? {
                Some(prompt_f64(
                    input,
                    output,
                    "How much longer is it going to be sunny? (hours) ",
                )?)
            } else {
                None
            }
        }
    };

    let periodic = match (overrides.interval_minutes, overrides.duration_hours) {
        (Some(interval_minutes), Some(duration_hours)) => Some(PeriodicConfig {
            interval_minutes,
            duration_hours,
        }),
        (interval, duration) => {
            if prompt_yes_no(
                input,
                output,
                "Do you want to enable periodic acquisition? (yes/no): ",
            )? {
                let interval_minutes = match interval {
                    Some(value) => value,
                    None => prompt_f64(
                        input,
                        output,
                        "Enter the interval between acquisitions (in minutes): ",
                    )?,
                };
                let duration_hours = match duration {
                    Some(value) => value,
                    None => prompt_f64(
                        input,
                        output,
                        "Enter the duration of acquisitions (in hours): ",
                    )?,
                };
                Some(PeriodicConfig {
                    interval_minutes,
                    duration_hours,
                })
            } else {
                None
            }
        }
    };

    Ok(EstimatorConfig {
        voltage,
        acquisition_minutes,
        sunny_hours,
        periodic,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn collect_reads_the_full_prompt_sequence() {
        let mut input = Cursor::new("4.0\n10\nyes\n2.5\nyes\n30\n6\n");
        let mut output = Vec::new();
        let config = collect(&CliOverrides::default(), &mut input, &mut output).unwrap();

        assert_eq!(config.voltage, 4.0);
        assert_eq!(config.acquisition_minutes, 10.0);
        assert_eq!(config.sunny_hours, Some(2.5));
        let periodic = config.periodic.unwrap();
        assert_eq!(periodic.interval_minutes, 30.0);
        assert_eq!(periodic.duration_hours, 6.0);

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.starts_with("Enter the battery voltage (V): "));
        assert!(transcript.contains("Is it sunny? (yes/no): "));
    }

    #[test]
    fn collect_treats_anything_but_yes_as_no() {
        let mut input = Cursor::new("3.9\n5\nnah\nno\n");
        let mut output = Vec::new();
        let config = collect(&CliOverrides::default(), &mut input, &mut output).unwrap();
        assert!(config.sunny_hours.is_none());
        assert!(config.periodic.is_none());
    }

    #[test]
    fn collect_skips_prompts_covered_by_flags() {
        let overrides = CliOverrides {
            voltage: Some(4.1),
            acquisition_minutes: Some(15.0),
            sunny_hours: Some(1.0),
            interval_minutes: Some(20.0),
            duration_hours: Some(4.0),
        };
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let config = collect(&overrides, &mut input, &mut output).unwrap();
        assert_eq!(config.voltage, 4.1);
        assert_eq!(config.periodic.unwrap().interval_minutes, 20.0);
        assert!(output.is_empty());
    }

    #[test]
    fn non_numeric_input_is_terminal() {
        let mut input = Cursor::new("four volts\n");
        let mut output = Vec::new();
        assert!(collect(&CliOverrides::default(), &mut input, &mut output).is_err());
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = tempfile::NamedTempFile::new().unwrap();
        temp.write_all(
            b"voltage: 4.0\nacquisition_minutes: 10\nsunny_hours: 1.5\nperiodic:\n  interval_minutes: 30\n  duration_hours: 6\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let config = EstimatorConfig::load(&path).unwrap();
        assert_eq!(config.voltage, 4.0);
        assert_eq!(config.sunny_hours, Some(1.5));
        assert_eq!(config.periodic.unwrap().duration_hours, 6.0);

        let plan = config.plan();
        assert_eq!(plan.effective_minutes(), 120.0);
    }

    #[test]
    fn config_without_optionals_is_a_one_shot_plan() {
        let config: EstimatorConfig =
            serde_yaml::from_str("voltage: 3.9\nacquisition_minutes: 5\n").unwrap();
        assert!(config.sunny().is_none());
        assert!(config.plan().periodic.is_none());
    }
}
