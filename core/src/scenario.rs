use serde::Serialize;

/// A named combination of sensor subsystems and its current draw in mA.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scenario {
    pub name: &'static str,
    pub draw_ma: f64,
}

/// The fifteen sensor combinations supported by the node firmware, in the
/// order the field-test notes list them. Draw figures were measured on the
/// deployed hardware.
pub const SCENARIOS: &[Scenario] = &[
    Scenario { name: "IMU", draw_ma: 8.0 },
    Scenario { name: "Mics", draw_ma: 15.0 },
    Scenario { name: "Baros", draw_ma: 28.0 },
    Scenario { name: "DiffBaros", draw_ma: 22.0 },
    Scenario { name: "IMU + Mics", draw_ma: 16.0 },
    Scenario { name: "IMU + DiffBaros", draw_ma: 31.0 },
    Scenario { name: "IMU + Baros", draw_ma: 30.0 },
    Scenario { name: "Mics + DiffBaros", draw_ma: 31.0 },
    Scenario { name: "Mics + Baros", draw_ma: 38.0 },
    Scenario { name: "Baros + DiffBaros", draw_ma: 33.0 },
    Scenario { name: "IMU + Mics + Baros", draw_ma: 39.0 },
    Scenario { name: "IMU + Mics + DiffBaros", draw_ma: 32.0 },
    Scenario { name: "IMU + Baros + DiffBaros", draw_ma: 34.0 },
    Scenario { name: "Mics + Baros + DiffBaros", draw_ma: 42.0 },
    Scenario { name: "IMU + Mics + Baros + DiffBaros", draw_ma: 43.0 },
];

/// Looks up a scenario by its exact name.
pub fn find(name: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|scenario| scenario.name == name)
}
