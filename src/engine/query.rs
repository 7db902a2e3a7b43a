//! Query side: read-only snapshots

use crate::error::{Result, TransitError};
use crate::model::{Station, System};

use super::Engine;

impl Engine {
    /// Consistent copy of the whole system
    pub fn system_snapshot(&self) -> System {
        self.store.read(System::clone)
    }

    /// Consistent copy of one station
    ///
    /// Fails with `InvalidStop` if the id was not present at load time.
    pub fn stop_snapshot(&self, station_id: &str) -> Result<Station> {
        self.store
            .read_station(station_id, Station::clone)
            .ok_or_else(|| {
                tracing::debug!("Unknown stop id requested: {}", station_id);
                TransitError::InvalidStop(station_id.to_string())
            })
    }
}
