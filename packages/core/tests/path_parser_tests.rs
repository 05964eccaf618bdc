//! Path Parser Tests
//!
//! Grammar, defaulting and text round-trip behavior of the path parser

use hl7path_core::{Path, PathError, PathParser, SegmentNameError, parse_path};

#[cfg(test)]
mod parser_basic_tests {
    use super::*;

    #[test]
    fn test_full_path() {
        let path = parse_path("PID[2]-3[4].5.6").expect("Valid path");
        assert_eq!(
            path,
            Path {
                segment: "PID".into(),
                segment_index: 2,
                field: 3,
                repetition_index: 4,
                component: 5,
                subcomponent: 6,
            }
        );
    }

    #[test]
    fn test_missing_indices_take_defaults() {
        let path = parse_path("PV1-3.4").expect("Valid path");
        assert_eq!(
            path,
            Path {
                segment: "PV1".into(),
                segment_index: 1,
                field: 3,
                repetition_index: 1,
                component: 4,
                subcomponent: 0,
            }
        );
    }

    #[test]
    fn test_empty_text_is_whole_message() {
        let path = parse_path("").expect("Empty path is valid");
        assert_eq!(path, Path::default());
        assert!(path.is_whole_message());
    }

    #[test]
    fn test_segment_only() {
        let path = parse_path("OBX").expect("Valid path");
        assert_eq!(path.segment, "OBX");
        assert_eq!(path.segment_index, 1);
        assert_eq!(path.field, 0);
        assert_eq!(path.repetition_index, 0);
    }

    #[test]
    fn test_separators_mix_freely() {
        let dotted = parse_path("OBX[2].5.2").expect("Valid path");
        let dashed = parse_path("OBX[2]-5-2").expect("Valid path");
        let mixed = parse_path("OBX[2]-5.2").expect("Valid path");
        assert_eq!(dotted, dashed);
        assert_eq!(dashed, mixed);
        assert_eq!(mixed.repetition_index, 1);
        assert_eq!(mixed.component, 2);
    }

    #[test]
    fn test_from_str() {
        let path: Path = "MSH-10".parse().expect("Valid path");
        assert_eq!(path.segment, "MSH");
        assert_eq!(path.field, 10);
    }

    #[test]
    fn test_validate_without_keeping_result() {
        assert!(PathParser::validate("PID-3").is_ok());
        assert_eq!(PathParser::validate("PID-"), Err(PathError::InvalidFormat));
    }
}

#[cfg(test)]
mod parser_error_tests {
    use super::*;

    #[test]
    fn test_invalid_formats() {
        for text in [
            "pid-3",
            "PID-",
            "PID--3",
            "PID[]",
            "PID[a]",
            "PID-3[2][3]",
            "PID-3.4.5.6",
            "PID 3",
            "PIDX-3",
            "1PI",
            " PID-3",
            "PID-3.",
            "PID-\u{0663}",
            "PID[\u{FF12}]-3",
            "PID-3.\u{FF15}",
        ] {
            assert_eq!(
                parse_path(text),
                Err(PathError::InvalidFormat),
                "expected '{text}' to be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_format_message() {
        let err = parse_path("not a path").expect_err("Invalid path");
        assert_eq!(err.to_string(), "invalid path format");
    }

    #[test]
    fn test_segment_name_errors_surface_on_construction() {
        assert_eq!(
            Path::for_segment("INVALID"),
            Err(PathError::SegmentName(SegmentNameError::WrongLength))
        );
        let err = Path::for_segment("123").expect_err("Digit first");
        assert_eq!(err.to_string(), "segment name must begin with an uppercase letter");
        let err = Path::for_segment("PV_").expect_err("Underscore");
        assert_eq!(err.to_string(), "segment name must be uppercase alphanumeric");
    }
}

#[cfg(test)]
mod parser_round_trip_tests {
    use super::*;

    #[test]
    fn test_display_then_parse_is_identity() {
        for text in [
            "",
            "MSH",
            "PID[2]",
            "PID-3",
            "PID-3[2]",
            "PID-3[2].5",
            "PID[2]-3[4].5.6",
            "PV1.3.4",
            "ZZZ-2[2].2.2",
            "PID-0",
            "PID-0[3]",
            "PID-3.0.5",
            "PID[0]",
            "PID-007",
        ] {
            let parsed = parse_path(text).expect("Valid path");
            let reparsed = parse_path(&parsed.to_string()).expect("Canonical text parses");
            assert_eq!(parsed, reparsed, "round trip of '{text}'");
        }
    }

    #[test]
    fn test_canonical_text() {
        let path = parse_path("PV1.3.4").expect("Valid path");
        assert_eq!(path.to_string(), "PV1-3.4");
        let path = parse_path("PID-007[1]").expect("Valid path");
        assert_eq!(path.to_string(), "PID-7");
    }
}
