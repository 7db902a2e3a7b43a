//! Configuration for transitboard
//!
//! Centralized server configuration with sensible defaults, plus loading
//! of the startup system document.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{Result, TransitError};
use crate::model::System;

/// Main configuration for a transitboard instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // System Configuration
    // -------------------------------------------------------------------------
    /// JSON document describing the transit system, loaded once at startup
    pub system_path: PathBuf,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,

    /// Runtime worker threads (None = one per core)
    pub worker_threads: Option<usize>,

    /// Largest accepted request body (bytes)
    pub max_body_bytes: usize,

    // -------------------------------------------------------------------------
    // Static Pages
    // -------------------------------------------------------------------------
    /// Directory holding the HTML help/error pages for `/update`
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            system_path: PathBuf::from("config/sample.json"),
            listen_addr: "0.0.0.0:8080".to_string(),
            worker_threads: None,
            max_body_bytes: 1024 * 1024, // 1 MB
            static_dir: PathBuf::from("static"),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the system document path
    pub fn system_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.system_path = path.into();
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the number of runtime worker threads
    pub fn worker_threads(mut self, count: usize) -> Self {
        self.config.worker_threads = Some(count);
        self
    }

    /// Set the maximum request body size (in bytes)
    pub fn max_body_bytes(mut self, size: usize) -> Self {
        self.config.max_body_bytes = size;
        self
    }

    /// Set the static pages directory
    pub fn static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.static_dir = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

/// Load the system document from disk
///
/// Any failure here is fatal to startup: the caller is expected to
/// abort rather than serve with a missing or partial system.
pub fn load_system(path: &Path) -> Result<System> {
    let file = File::open(path).map_err(|_| {
        TransitError::Config(format!(
            "Unable to open configuration file ({})",
            path.display()
        ))
    })?;

    tracing::info!("Using configuration file ({})", path.display());

    let document: serde_json::Value = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| TransitError::Config(format!("Malformed json configuration: {}", e)))?;

    System::from_document(document)
}
