use std::io::Write;
use tempfile::NamedTempFile;
use time_interval::utils::validation::Validate;
use time_interval::{InputKind, OutputSettings, Report, RoundingMode, TimeUnit, TomlConfig};

#[test]
fn test_report_with_settings_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[format]
template = "%R%h:%I (%x min)"

[conversion]
precision = 1
rounding = "half_down"
unit = "hour"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();

    let config = TomlConfig::from_file(temp_file.path()).unwrap();
    assert!(config.validate().is_ok());
    let settings = config.apply_to(OutputSettings::default()).unwrap();
    assert_eq!(settings.rounding, RoundingMode::HalfDown);

    // 1 h 51 min = 1.85 h, a tie at one digit
    let report = Report::build("1:51", InputKind::Auto, &settings).unwrap();
    assert_eq!(report.formatted, "+1:51 (111 min)");
    assert_eq!(report.converted.unit, TimeUnit::Hour);
    assert_eq!(report.converted.value, 1.8);
}

#[test]
fn test_report_json_shape() {
    let report = Report::build(
        "1 day + 12 hours",
        InputKind::Natural,
        &OutputSettings::default(),
    )
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();

    assert_eq!(json["total_seconds"], 129600);
    assert_eq!(json["formatted"], "36:00:00");
    assert_eq!(json["negative"], false);
    assert_eq!(json["components"]["hours"], 36);
    assert_eq!(json["interval_spec"], "PT36H0M0S");
}

#[test]
fn test_missing_settings_file() {
    let err = TomlConfig::from_file("/nonexistent/tival.toml").unwrap_err();
    assert!(matches!(err, time_interval::IntervalError::IoError(_)));
}

#[test]
fn test_input_errors_are_typed() {
    let settings = OutputSettings::default();
    for (input, kind) in [
        (" 1:00:10", InputKind::Hms),
        ("P1Y1D", InputKind::Spec),
        ("1 lightyear", InputKind::Natural),
    ] {
        let err = Report::build(input, kind, &settings).unwrap_err();
        assert_eq!(
            err.category(),
            time_interval::utils::error::ErrorCategory::Input,
            "{} should be an input error",
            input
        );
    }
}
