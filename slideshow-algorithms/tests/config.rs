use serde_json::{json, Map, Value};
use slideshow_algorithms::greedy::{Config, DEFAULT_SAMPLE_SIZE};
use slideshow_challenges::SlideshowError;

fn hyperparameters(value: Value) -> Option<Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

#[test]
fn test_defaults() {
    let config = Config::initialize(&None);
    assert_eq!(config, Config::default());
    assert_eq!(config.sample_size_slides, DEFAULT_SAMPLE_SIZE);
    assert_eq!(config.sample_size_vertical_photos, DEFAULT_SAMPLE_SIZE);
}

#[test]
fn test_overrides_are_merged() {
    let config = Config::initialize(&hyperparameters(json!({
        "sample_size_slides": 16,
        "unrelated": true,
    })));
    assert_eq!(config.sample_size_slides, 16);
    assert_eq!(config.sample_size_vertical_photos, DEFAULT_SAMPLE_SIZE);
}

#[test]
fn test_invalid_override_falls_back_to_defaults() {
    let config = Config::initialize(&hyperparameters(json!({
        "sample_size_slides": 16,
        "sample_size_vertical_photos": "many",
    })));
    assert_eq!(config, Config::default());
}

#[test]
fn test_validate_rejects_zero_sample_size() {
    assert!(Config::default().validate().is_ok());
    let config = Config {
        sample_size_slides: 0,
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(
        SlideshowError::classify(&err),
        Some(SlideshowError::InvariantViolation(_))
    ));
}
