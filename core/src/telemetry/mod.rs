pub mod reader;
pub mod record;

pub use reader::{read_node, DATA_DIR};
pub use record::{TelemetryRecord, TelemetryTable};
