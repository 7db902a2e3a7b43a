//! System, Station and Line types
//!
//! These serialize to the same JSON shape the service publishes on
//! `/info` and `/stop`, and that the startup document uses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TransitError};

/// Number of direction slots at every station
pub const DIRECTION_COUNT: usize = 2;

/// A transit line serving a station in one direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Display name
    pub name: String,

    /// Line identifier, unique within its direction slot
    pub id: String,

    /// Upcoming arrival times, replaced wholesale on update
    #[serde(default)]
    pub times: Vec<i64>,

    /// Display color
    pub color: String,
}

/// Latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// A physical stop with two direction slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,

    /// Station identifier, unique across the system
    pub id: String,

    pub coord: Coordinates,

    /// Labels for direction 0 and direction 1 (e.g. "Northbound", "Southbound")
    pub directions: [String; DIRECTION_COUNT],

    /// Lines per direction slot, keyed by line id
    #[serde(default)]
    pub lines: [BTreeMap<String, Line>; DIRECTION_COUNT],
}

impl Station {
    /// Look up a line by direction slot and line id
    pub fn line(&self, direction: usize, line_id: &str) -> Option<&Line> {
        self.lines.get(direction)?.get(line_id)
    }

    /// Mutable lookup by direction slot and line id
    pub fn line_mut(&mut self, direction: usize, line_id: &str) -> Option<&mut Line> {
        self.lines.get_mut(direction)?.get_mut(line_id)
    }

    /// Total number of lines across both directions
    pub fn line_count(&self) -> usize {
        self.lines.iter().map(BTreeMap::len).sum()
    }
}

/// Root aggregate: the whole transit network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct System {
    pub name: String,

    pub tagline: String,

    /// Stations in document order
    #[serde(default)]
    pub stops: Vec<Station>,

    /// Maximum valid time value
    #[serde(rename = "timeMax")]
    pub time_max: i64,
}

impl System {
    /// Build a system from an already-parsed JSON document
    ///
    /// Pure: no I/O, no index construction. A document that does not
    /// match the system shape is a configuration error.
    pub fn from_document(document: serde_json::Value) -> Result<Self> {
        serde_json::from_value(document)
            .map_err(|e| TransitError::Config(format!("Malformed system document: {}", e)))
    }

    /// Serialize back into a JSON document
    pub fn to_document(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
