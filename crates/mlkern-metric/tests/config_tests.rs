//! Tests for reading metric choices from configuration data

use mlkern_metric::{Error, EuclideanDistance, Kernel, ManhattanDistance, MetricConfig};

#[test]
fn test_parse_full_config() {
    let config: MetricConfig = serde_json::from_str(r#"{ "power": 2, "take_root": true }"#).unwrap();
    assert_eq!(config, EuclideanDistance::CONFIG);
    assert!(config.validate().is_ok());
}

#[test]
fn test_take_root_defaults_to_false() {
    let config: MetricConfig = serde_json::from_str(r#"{ "power": 1 }"#).unwrap();
    assert_eq!(config, ManhattanDistance::CONFIG);
}

#[test]
fn test_unknown_fields_rejected() {
    let result: Result<MetricConfig, _> =
        serde_json::from_str(r#"{ "power": 2, "take_root": true, "root": 2 }"#);
    assert!(result.is_err());
}

#[test]
fn test_parsed_zero_power_fails_validation() {
    // Parsing is structural; the range check happens on validate/evaluate
    let config: MetricConfig = serde_json::from_str(r#"{ "power": 0 }"#).unwrap();
    assert!(matches!(config.validate(), Err(Error::InvalidParameter(_))));
    assert!(config.evaluate(&[0.0], &[1.0]).is_err());
}

#[test]
fn test_serialized_form() {
    let json = serde_json::to_value(MetricConfig::euclidean()).unwrap();
    assert_eq!(json, serde_json::json!({ "power": 2, "take_root": true }));
}

#[test]
fn test_config_as_kernel() {
    fn score<K: Kernel>(kernel: &K) -> (f64, &'static str) {
        (kernel.evaluate(&[0.0, 0.0], &[3.0, 4.0]).unwrap(), kernel.name())
    }

    let configs: Vec<MetricConfig> = serde_json::from_str(
        r#"[{ "power": 1 }, { "power": 2 }, { "power": 2, "take_root": true }]"#,
    )
    .unwrap();
    let scored: Vec<_> = configs.iter().map(score).collect();

    assert_eq!(
        scored,
        vec![
            (7.0, "manhattan"),
            (25.0, "squared_euclidean"),
            (5.0, "euclidean"),
        ]
    );
}
