//! SystemStore implementation
//!
//! RwLock-protected system plus its immutable station index.

use parking_lot::RwLock;

use crate::error::Result;
use crate::model::{Station, StationIndex, System};

/// Shared, lock-protected transit system
pub struct SystemStore {
    /// The whole data model. Only `Line::times` is ever written.
    system: RwLock<System>,

    /// Station id → position in `system.stops`, fixed at construction
    index: StationIndex,
}

impl SystemStore {
    /// Take ownership of a loaded system and build its index
    ///
    /// No locking needed here; nothing else can see the system yet.
    pub fn new(system: System) -> Result<Self> {
        let index = StationIndex::build(&system.stops)?;

        Ok(Self {
            system: RwLock::new(system),
            index,
        })
    }

    /// Run `f` under a shared (read) acquisition
    pub fn read<R>(&self, f: impl FnOnce(&System) -> R) -> R {
        let guard = self.system.read();
        f(&guard)
    }

    /// Run `f` under an exclusive (write) acquisition
    pub fn write<R>(&self, f: impl FnOnce(&mut System) -> R) -> R {
        let mut guard = self.system.write();
        f(&mut guard)
    }

    /// Run `f` on a single station under a read acquisition
    ///
    /// Returns `None` without taking the lock if the id is unknown.
    pub fn read_station<R>(&self, station_id: &str, f: impl FnOnce(&Station) -> R) -> Option<R> {
        let position = self.index.position(station_id)?;
        Some(self.read(|system| f(&system.stops[position])))
    }

    /// The station index
    pub fn index(&self) -> &StationIndex {
        &self.index
    }

    /// Number of stations (fixed after load)
    pub fn station_count(&self) -> usize {
        self.index.len()
    }

    /// Consume the store and return the system
    pub fn into_inner(self) -> System {
        self.system.into_inner()
    }
}
