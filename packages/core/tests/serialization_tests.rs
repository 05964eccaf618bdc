//! Serialization Tests
//!
//! `Path` and `ExtractorConfig` through serde_json

use hl7path_core::{ExtractorConfig, Path, SegmentMatch, parse_path};
use serde_json::json;

#[test]
fn test_path_keys() {
    let path = parse_path("PID[2]-3[4].5.6").expect("Valid path");
    let value = serde_json::to_value(&path).expect("Serializable");
    assert_eq!(
        value,
        json!({
            "segment": "PID",
            "segment_index": 2,
            "field": 3,
            "repetition_index": 4,
            "component": 5,
            "subcomponent": 6
        })
    );
}

#[test]
fn test_zero_levels_are_omitted() {
    let path = parse_path("OBX[2]").expect("Valid path");
    let value = serde_json::to_value(&path).expect("Serializable");
    assert_eq!(value, json!({ "segment": "OBX", "segment_index": 2 }));
}

#[test]
fn test_path_survives_json() {
    for text in ["", "MSH-2", "PID-3[2].5", "ZZZ-2[2].2.2"] {
        let path = parse_path(text).expect("Valid path");
        let encoded = serde_json::to_string(&path).expect("Serializable");
        let decoded: Path = serde_json::from_str(&encoded).expect("Deserializable");
        assert_eq!(path, decoded);
    }
}

#[test]
fn test_missing_keys_default_to_zero() {
    let decoded: Path = serde_json::from_str(r#"{"segment":"PV1","segment_index":1,"field":3,"repetition_index":1}"#)
        .expect("Deserializable");
    assert_eq!(decoded, parse_path("PV1-3").expect("Valid path"));
}

#[test]
fn test_config_from_json() {
    let config: ExtractorConfig =
        serde_json::from_str(r#"{"segment_match":"exact"}"#).expect("Deserializable");
    assert_eq!(config.segment_match, SegmentMatch::Exact);

    let config: ExtractorConfig = serde_json::from_str("{}").expect("Deserializable");
    assert_eq!(config, ExtractorConfig::default());
    assert_eq!(config.segment_match, SegmentMatch::Prefix);
}
