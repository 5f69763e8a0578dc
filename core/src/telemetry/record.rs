use serde::{Deserialize, Serialize};

/// One battery telemetry sample as stored in the per-node export files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    /// Sample time as Unix seconds.
    pub timestamp: f64,
    pub voltage_drop: f64,
    pub auxiliary_reading: f64,
    pub battery_percentage: f64,
    pub configuration_id: u32,
    pub installation_reference: String,
    pub node_id: u32,
}

/// In-memory battery telemetry table for one node, loaded wholesale from its
/// export file.
#[derive(Debug, Clone, Default)]
pub struct TelemetryTable {
    pub records: Vec<TelemetryRecord>,
}

impl TelemetryTable {
    /// Column names applied to the export files, strictly by position.
    pub const COLUMNS: [&'static str; 7] = [
        "timestamp",
        "voltage_drop",
        "auxiliary_reading",
        "battery_percentage",
        "configuration_id",
        "installation_reference",
        "node_id",
    ];

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// (timestamp, voltage_drop) pairs in file order, for plotting.
    pub fn voltage_series(&self) -> Vec<(f64, f64)> {
        self.records
            .iter()
            .map(|record| (record.timestamp, record.voltage_drop))
            .collect()
    }
}
