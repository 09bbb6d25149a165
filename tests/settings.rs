use certwatch::config::Settings;
use certwatch::utils::ConfigError;
use std::io::Write;

#[test]
fn defaults_are_sensible() {
    let settings = Settings::default();
    assert_eq!(settings.check.port, 443);
    assert_eq!(settings.check.connect_timeout_secs, 5);
    assert_eq!(settings.check.handshake_timeout_secs, 5);
    assert_eq!(settings.check.expiry_threshold_days, 30);
    assert!(settings.check.parallel >= 1);
}

#[test]
fn partial_toml_fills_in_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[check]").unwrap();
    writeln!(file, "port = 8443").unwrap();
    writeln!(file, "expiry_threshold_days = 14").unwrap();

    let settings = Settings::load_from_file(file.path()).unwrap();
    assert_eq!(settings.check.port, 8443);
    assert_eq!(settings.check.expiry_threshold_days, 14);
    assert_eq!(settings.check.connect_timeout_secs, 5);
    assert_eq!(settings.check.parallel, 4);
}

#[test]
fn missing_file_is_reported() {
    let err = Settings::load_from_file("/nonexistent/certwatch.toml").unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[check").unwrap();

    let err = Settings::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}
