use crate::cli::conf::{check, config_error_hint};
use crate::conf::{ConfigError, ValidationErrors};
use std::fs;
use tempfile::tempdir;

#[test]
fn valid_file_passes_check() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("devices.hcl");
    fs::write(
        &path,
        "locale_device = {\n  available_locales = [\"en\"]\n  default_locale = \"en\"\n}\n",
    )
    .unwrap();

    // Act / Assert
    assert!(check(path, true).is_ok());
}

#[test]
fn invalid_file_fails_check() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("devices.hcl");
    fs::write(&path, "locale_device = {\n  redirect = \"path\"\n}\n").unwrap();

    assert!(check(path, true).is_err());
}

#[test]
fn hint_is_found_inside_validation_errors() {
    let err = ConfigError::from(ValidationErrors(vec![
        ConfigError::InvalidParamName {
            param: "a=b".to_string(),
        },
        ConfigError::InvalidRedirect {
            redirect: "dns".to_string(),
        },
    ]));

    let hint = config_error_hint(&err).unwrap();

    assert!(hint.contains("none, param, path, host"));
}

#[test]
fn io_errors_have_no_hint() {
    let err = ConfigError::NoDevices {
        path: "devices.hcl".into(),
    };

    assert_eq!(config_error_hint(&err), None);
}
