//! Error module tests

use crate::error::{Error, Result};

#[test]
fn test_project_not_found_error() {
    let error = Error::ProjectNotFound("Fraud Detection".to_string());
    assert_eq!(error.code(), "E001");
    assert_eq!(error.suggestion(), Some("folio projects list".to_string()));
    assert!(error.to_string().contains("Fraud Detection"));
}

#[test]
fn test_invalid_project_error() {
    let error = Error::InvalidProject("title must not be empty".to_string());
    assert_eq!(error.code(), "E002");
    assert_eq!(error.suggestion(), None);
    assert!(error.to_string().contains("title must not be empty"));
}

#[test]
fn test_catalog_errors() {
    let missing = Error::CatalogNotFound("/tmp/nope.toml".to_string());
    assert_eq!(missing.code(), "E100");
    assert!(missing.suggestion().unwrap().contains("catalog.path"));

    let format = Error::UnsupportedCatalogFormat("yaml".to_string());
    assert_eq!(format.code(), "E101");
    assert!(format.to_string().contains("yaml"));

    let parse = Error::CatalogParse("expected `]`".to_string());
    assert_eq!(parse.code(), "E102");
    assert_eq!(parse.suggestion(), None);
}

#[test]
fn test_container_not_found_error() {
    let error = Error::ContainerNotFound("projects-grid".to_string());
    assert_eq!(error.code(), "E200");
    assert_eq!(error.to_string(), "Container element '#projects-grid' not found in page");
    assert_eq!(
        error.suggestion(),
        Some("folio render --container projects-grid".to_string())
    );
}

#[test]
fn test_config_error() {
    let error = Error::ConfigError("bad".to_string());
    assert_eq!(error.code(), "E600");
    assert_eq!(error.suggestion(), Some("folio config list".to_string()));
    assert_eq!(error.to_string(), "Configuration error: bad");
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error: Error = io.into();
    assert_eq!(error.code(), "E9999");
    assert!(error.to_string().contains("denied"));
}

#[test]
fn test_json_error_maps_to_catalog_parse() {
    let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = err.into();
    assert_eq!(error.code(), "E102");
}

#[test]
fn test_result_alias() {
    fn ok() -> Result<u8> {
        Ok(7)
    }
    assert_eq!(ok().unwrap(), 7);
}
