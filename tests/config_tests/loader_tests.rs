//! Configuration Tests
//!
//! Tests for the config builder and startup document loading.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use transitboard::config::{load_system, Config};
use transitboard::{ErrorKind, TransitError};

// =============================================================================
// Helper Functions
// =============================================================================

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("config/sample.json")
}

// =============================================================================
// Builder Tests
// =============================================================================

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.listen_addr, "0.0.0.0:8080");
    assert_eq!(config.static_dir, PathBuf::from("static"));
    assert_eq!(config.max_body_bytes, 1024 * 1024);
    assert_eq!(config.worker_threads, None);
}

#[test]
fn test_builder_overrides() {
    let config = Config::builder()
        .system_path("systems/city.json")
        .listen_addr("127.0.0.1:9000")
        .static_dir("/srv/pages")
        .worker_threads(4)
        .max_body_bytes(2048)
        .build();

    assert_eq!(config.system_path, PathBuf::from("systems/city.json"));
    assert_eq!(config.listen_addr, "127.0.0.1:9000");
    assert_eq!(config.static_dir, PathBuf::from("/srv/pages"));
    assert_eq!(config.worker_threads, Some(4));
    assert_eq!(config.max_body_bytes, 2048);
}

// =============================================================================
// Loading Tests
// =============================================================================

#[test]
fn test_load_bundled_sample() {
    let system = load_system(&sample_path()).unwrap();

    assert_eq!(system.stops.len(), 2);
    assert!(system.stops[0].line(0, "sh").unwrap().times.is_empty());
    assert_eq!(system.stops[1].id, "harbor");
}

#[test]
fn test_load_missing_file() {
    let err = load_system(Path::new("/no/such/system.json")).unwrap_err();

    assert!(matches!(err, TransitError::Config(ref msg) if msg.contains("Unable to open")));
    assert_eq!(err.kind(), ErrorKind::FatalStartup);
}

#[test]
fn test_load_malformed_json() {
    let file = write_temp("{\"name\": \"broken\"");

    let err = load_system(file.path()).unwrap_err();
    assert!(matches!(err, TransitError::Config(ref msg) if msg.contains("Malformed json")));
}

#[test]
fn test_load_wrong_shape() {
    let file = write_temp(r#"{"name": "x", "tagline": "y", "timeMax": "soon", "stops": []}"#);

    let err = load_system(file.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FatalStartup);
}

#[test]
fn test_load_empty_system() {
    let file = write_temp(r#"{"name": "Empty", "tagline": "", "timeMax": 0, "stops": []}"#);

    let system = load_system(file.path()).unwrap();
    assert!(system.stops.is_empty());
}
