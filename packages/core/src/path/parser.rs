//! Path grammar
//!
//! ```text
//! SEGMENT ( '[' SEGMENT_INDEX ']' )?
//!   ( SEP FIELD ( '[' REPETITION_INDEX ']' )?
//!     ( SEP COMPONENT ( SEP SUBCOMPONENT )? )? )?
//! ```
//!
//! `SEP` is `-` or `.`, and the two may be mixed freely. Every index is a
//! run of ASCII decimal digits and every index is 1-based.
//!
//! - `PID[1]-5[2].3.1` is PID,1,5,2,3,1
//! - `PV1-2` is PV1,1,2,1
//! - `OBX[2].5.2` is OBX,2,5,1,2

use regex::{Captures, Regex};

use super::segment_name::parse_segment_name;
use super::types::Path;
use crate::error::PathError;

lazy_static::lazy_static! {
    static ref PATH_GRAMMAR: Regex = Regex::new(
        r"^([A-Z][A-Z0-9]{2})(?:\[([0-9]+)\])?(?:[-.]([0-9]+)(?:\[([0-9]+)\])?(?:[-.]([0-9]+)(?:[-.]([0-9]+))?)?)?$"
    )
    .expect("path grammar is a valid regular expression");
}

const SEGMENT: usize = 1;
const SEGMENT_INDEX: usize = 2;
const FIELD: usize = 3;
const REPETITION_INDEX: usize = 4;
const COMPONENT: usize = 5;
const SUBCOMPONENT: usize = 6;

/// Parser for the textual path notation
pub struct PathParser;

impl PathParser {
    /// Parse path text into a `Path`
    ///
    /// The empty string yields the zero value, which selects the entire
    /// message. Omitted levels take their defaults: segment index 1,
    /// repetition 1 when a field is given, everything else 0.
    ///
    /// # Errors
    ///
    /// Returns `PathError::InvalidFormat` if the text does not match the
    /// grammar, or `PathError::SegmentName` if the segment token is malformed.
    pub fn parse(text: &str) -> Result<Path, PathError> {
        if text.is_empty() {
            return Ok(Path::default());
        }

        let Some(caps) = PATH_GRAMMAR.captures(text) else {
            log::debug!("Rejected path text '{text}': no grammar match");
            return Err(PathError::InvalidFormat);
        };

        let segment = parse_segment_name(caps.get(SEGMENT).map_or("", |m| m.as_str()))?;
        let segment_index = number_or(&caps, SEGMENT_INDEX, 1);
        let field = number_or(&caps, FIELD, 0);
        let repetition_index = number_or(&caps, REPETITION_INDEX, usize::from(field > 0));
        let component = number_or(&caps, COMPONENT, 0);
        let subcomponent = number_or(&caps, SUBCOMPONENT, 0);

        Ok(Path {
            segment: segment.to_string(),
            segment_index,
            field,
            repetition_index,
            component,
            subcomponent,
        })
    }

    /// Check path text against the grammar without keeping the result
    ///
    /// # Errors
    ///
    /// Same as [`PathParser::parse`].
    pub fn validate(text: &str) -> Result<(), PathError> {
        Self::parse(text).map(|_| ())
    }
}

/// Parse an optional capture group, falling back when the group is absent
/// or its digits do not fit in a `usize`.
fn number_or(caps: &Captures<'_>, group: usize, default: usize) -> usize {
    caps.get(group)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(default)
}

/// Parse path text into a `Path`
///
/// # Errors
///
/// See [`PathParser::parse`].
pub fn parse_path(text: &str) -> Result<Path, PathError> {
    PathParser::parse(text)
}
