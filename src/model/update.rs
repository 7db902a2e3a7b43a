//! Update envelope
//!
//! Externally supplied batch of schedule replacements, as posted to
//! `/update`:
//!
//! ```json
//! {"stops": [{"stationID": "tee",
//!             "lines": [{"lineID": "sh", "index": 0, "times": [3, 12, 27]}]}]}
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, TransitError};

use super::DIRECTION_COUNT;

/// Replacement times for one line at one station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineUpdate {
    #[serde(rename = "lineID")]
    pub line_id: String,

    /// Direction slot; signed so that negative values reach validation
    pub index: i64,

    #[serde(default)]
    pub times: Vec<i64>,
}

/// All line updates for one station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationUpdate {
    #[serde(rename = "stationID")]
    pub station_id: String,

    #[serde(default)]
    pub lines: Vec<LineUpdate>,
}

/// A full update request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Update {
    #[serde(default)]
    pub stops: Vec<StationUpdate>,
}

impl Update {
    /// Parse an update from a raw request body
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| TransitError::MalformedUpdate(e.to_string()))
    }

    /// Number of line updates across all stations
    pub fn line_update_count(&self) -> usize {
        self.stops.iter().map(|s| s.lines.len()).sum()
    }
}

/// Validate a wire direction index and convert it to a slot position
///
/// Only 0 and 1 are valid; both bounds are checked.
pub fn direction_slot(index: i64) -> Result<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&slot| slot < DIRECTION_COUNT)
        .ok_or(TransitError::IndexOutOfBounds)
}
