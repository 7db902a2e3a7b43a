//! Engine Module
//!
//! The service object that owns the transit system and answers commands.
//!
//! ## Responsibilities
//! - Load the system once at startup
//! - Serve read-only snapshots (query side)
//! - Validate and apply schedule updates (update side)
//!
//! ## Concurrency Model: Multiple-Reader / Single-Writer
//!
//! - **Reads** (system/stop snapshots): shared acquisition of the store
//!   lock, any number at once. Each returns an owned clone, so the lock
//!   is released before the caller serializes anything.
//! - **Writes** (update batches): one exclusive acquisition spanning the
//!   whole batch. Readers see either none or all of a batch.

mod query;
mod update;

use crate::config::{load_system, Config};
use crate::error::Result;
use crate::model::System;
use crate::protocol::{Command, Reply};
use crate::store::SystemStore;

/// The main service engine
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// Lock-protected system and station index
    store: SystemStore,
}

impl Engine {
    /// Open an engine by loading the system document named in `config`
    pub fn open(config: Config) -> Result<Self> {
        let system = load_system(&config.system_path)?;
        Self::with_system(config, system)
    }

    /// Build an engine around an already-loaded system
    pub fn with_system(config: Config, system: System) -> Result<Self> {
        let store = SystemStore::new(system)?;

        tracing::info!(
            "Loaded system with {} stations",
            store.station_count()
        );

        Ok(Self { config, store })
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers
    pub fn execute(&self, command: Command) -> Result<Reply> {
        match command {
            Command::GetSystem => Ok(Reply::System(self.system_snapshot())),
            Command::GetStop { id } => self.stop_snapshot(&id).map(Reply::Station),
            Command::Update(update) => {
                let lines = self.apply_updates(&update)?;
                Ok(Reply::Updated { lines })
            }
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the underlying store
    pub fn store(&self) -> &SystemStore {
        &self.store
    }

    /// Number of stations in the loaded system
    pub fn station_count(&self) -> usize {
        self.store.station_count()
    }
}
