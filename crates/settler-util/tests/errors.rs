use std::path::PathBuf;

use settler_util::errors::SettlerError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = SettlerError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_missing_key_display_names_key_and_file() {
    let err = SettlerError::MissingConfigurationKey {
        key: "flutter.sdk".to_string(),
        path: PathBuf::from("/project/local.properties"),
    };
    assert_eq!(
        err.to_string(),
        "flutter.sdk not set in /project/local.properties"
    );
}

#[test]
fn test_settings_error_display() {
    let err = SettlerError::Settings {
        message: "no local.properties found".to_string(),
    };
    assert_eq!(err.to_string(), "Settings error: no local.properties found");
}

#[test]
fn test_generic_error_display() {
    let err = SettlerError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: SettlerError = io_err.into();
    assert!(matches!(err, SettlerError::Io(_)));
}
