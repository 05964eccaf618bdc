//! Segment splitting and selection

use crate::config::SegmentMatch;

/// Split a message into segments on `\r\n`, `\r` or `\n`
///
/// All three terminators are equivalent and may be mixed within one
/// message. `\r\n` counts as a single boundary.
pub fn split_segments(message: &str) -> impl Iterator<Item = &str> {
    message
        .split("\r\n")
        .flat_map(|chunk| chunk.split(['\r', '\n']))
}

/// Find the `occurrence`-th segment named `name`, counting from 1
///
/// Returns `None` if the message has fewer matching segments.
pub fn find_segment<'a>(
    message: &'a str,
    name: &str,
    occurrence: usize,
    field_separator: char,
    mode: SegmentMatch,
) -> Option<&'a str> {
    let mut seen = 0;
    for segment in split_segments(message) {
        if !segment_matches(segment, name, field_separator, mode) {
            continue;
        }
        seen += 1;
        if seen == occurrence {
            log::trace!("Selected {name} occurrence {occurrence}");
            return Some(segment);
        }
    }
    log::trace!("Segment {name} occurrence {occurrence} not present ({seen} found)");
    None
}

fn segment_matches(segment: &str, name: &str, field_separator: char, mode: SegmentMatch) -> bool {
    match mode {
        SegmentMatch::Prefix => segment.starts_with(name),
        SegmentMatch::Exact => segment.split(field_separator).next() == Some(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_terminators_split_once_each() {
        let parts: Vec<_> = split_segments("A\r\nB\rC\nD").collect();
        assert_eq!(parts, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn prefix_match_sees_longer_names() {
        let message = "ZZZA|x\rZZZ|y";
        assert_eq!(find_segment(message, "ZZZ", 1, '|', SegmentMatch::Prefix), Some("ZZZA|x"));
        assert_eq!(find_segment(message, "ZZZ", 1, '|', SegmentMatch::Exact), Some("ZZZ|y"));
    }

    #[test]
    fn missing_occurrence_is_none() {
        assert_eq!(find_segment("OBX|1\rOBX|2", "OBX", 3, '|', SegmentMatch::Prefix), None);
    }
}
