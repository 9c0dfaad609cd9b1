/*!
 * Tests for error types
 */

use std::io;

use assdiff::errors::{AppError, ConfigError};

#[test]
fn test_configError_display_shouldDescribeProblem() {
    let err = ConfigError::InvalidConfiguration("configuration is absent".to_string());
    assert_eq!(err.to_string(), "Invalid configuration: configuration is absent");
}

#[test]
fn test_appError_fromConfigError_shouldWrapIt() {
    let err: AppError = ConfigError::InvalidConfiguration("bad".to_string()).into();

    assert!(matches!(err, AppError::Config(ConfigError::InvalidConfiguration(_))));
    assert_eq!(err.to_string(), "Configuration error: Invalid configuration: bad");
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let err: AppError = io::Error::new(io::ErrorKind::NotFound, "missing.ass").into();

    assert!(matches!(err, AppError::File(_)));
    assert_eq!(err.to_string(), "File error: missing.ass");
}

#[test]
fn test_appError_fromAnyhow_shouldKeepMessage() {
    let err: AppError = anyhow::anyhow!("something odd").into();
    assert_eq!(err.to_string(), "Unknown error: something odd");
}
