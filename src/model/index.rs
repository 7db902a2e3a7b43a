//! Station lookup index
//!
//! Maps station id → position in `System::stops`. Built once after load
//! and never resized: stations are never added or removed at runtime, so
//! the positions stay valid for the life of the process.

use std::collections::HashMap;

use crate::error::{Result, TransitError};

use super::Station;

/// Derived (never serialized) index over a system's stations
#[derive(Debug, Clone, Default)]
pub struct StationIndex {
    positions: HashMap<String, usize>,
}

impl StationIndex {
    /// Build the index, rejecting duplicate station ids
    pub fn build(stops: &[Station]) -> Result<Self> {
        let mut positions = HashMap::with_capacity(stops.len());

        for (position, stop) in stops.iter().enumerate() {
            if positions.insert(stop.id.clone(), position).is_some() {
                return Err(TransitError::DuplicateStation(stop.id.clone()));
            }
        }

        Ok(Self { positions })
    }

    /// Position of a station in `System::stops`
    pub fn position(&self, station_id: &str) -> Option<usize> {
        self.positions.get(station_id).copied()
    }

    pub fn contains(&self, station_id: &str) -> bool {
        self.positions.contains_key(station_id)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
