//! Warehouse schema contract: an ordered list of column descriptors.

use serde::{Deserialize, Serialize};
use wptd_core::WptdError;

/// One column of the destination table. The warehouse exports richer
/// descriptors (type, mode); only the name matters for projection, so the
/// remaining keys are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
}

/// Decode a schema document (a JSON array of column descriptors).
pub fn parse_schema(data: &[u8]) -> Result<Vec<Column>, WptdError> {
    serde_json::from_slice(data).map_err(|e| WptdError::Config(format!("schema: {}", e)))
}
