use keycalc::application::engine::CalculatorEngine;
use keycalc::config::EngineConfig;
use keycalc::error::CalcError;
use std::io::Write;

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{"max_digits": 4, "grouping_separator": " ", "display_width": null}}"#
    )
    .unwrap();

    let config = EngineConfig::from_path(file.path()).unwrap();
    assert_eq!(config.max_digits, 4);
    assert_eq!(config.grouping_separator, ' ');
    assert_eq!(config.display_width, None);
    assert_eq!(config.max_fraction_digits, 10);

    let mut engine = CalculatorEngine::new(config);
    for d in "123456".chars() {
        engine.append_digit(d);
    }
    assert_eq!(engine.display_string(), "1 234");
}

#[test]
fn test_invalid_config_value() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"max_digits": 0}}"#).unwrap();

    assert!(matches!(
        EngineConfig::from_path(file.path()),
        Err(CalcError::ConfigError(_))
    ));
}

#[test]
fn test_malformed_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "max_digits = 4").unwrap();

    assert!(matches!(
        EngineConfig::from_path(file.path()),
        Err(CalcError::JsonError(_))
    ));
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        EngineConfig::from_path(dir.path().join("absent.json")),
        Err(CalcError::IoError(_))
    ));
}
