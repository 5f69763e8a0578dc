use crate::prelude::{TelemetryError, TelemetryResult};
use crate::telemetry::record::{TelemetryRecord, TelemetryTable};
use log::info;
use std::path::Path;

/// Fixed relative directory the per-node export files live in.
pub const DATA_DIR: &str = "data/battery";

/// Raw export row; fields are taken strictly by position, never by the
/// source file's own header names.
type RawRow = (f64, f64, f64, f64, u32, String, u32);

/// Loads the full telemetry table for a node. Only nodes 1 and 2 exist in
/// the deployment; any other id is rejected outright. The export's header
/// row is discarded and the seven-column schema is applied positionally, so
/// a reordered export would be mislabeled silently.
pub fn read_node<P: AsRef<Path>>(dir: P, node_id: u8) -> TelemetryResult<TelemetryTable> {
    let file = match node_id {
        1 => "battery_node1.csv",
        2 => "battery_node2.csv",
        other => return Err(TelemetryError::InvalidNode(other)),
    };
    let path = dir.as_ref().join(file);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(&path)
        .map_err(|source| TelemetryError::Read {
            path: path.clone(),
            source,
        })?;

    let mut records = Vec::new();
    for row in reader.deserialize::<RawRow>() {
        let (
            timestamp,
            voltage_drop,
            auxiliary_reading,
            battery_percentage,
            configuration_id,
            installation_reference,
            node_id,
        ) = row.map_err(|source| TelemetryError::Read {
            path: path.clone(),
            source,
        })?;
        records.push(TelemetryRecord {
            timestamp,
            voltage_drop,
            auxiliary_reading,
            battery_percentage,
            configuration_id,
            installation_reference,
            node_id,
        });
    }

    info!(
        "loaded {} telemetry records from {}",
        records.len(),
        path.display()
    );
    Ok(TelemetryTable { records })
}
