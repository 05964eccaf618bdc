//! The structured address type
//!
//! A `Path` names one node in the message hierarchy. Zero means "the whole
//! thing one level up": a zero field selects the whole segment, a zero
//! component the whole repetition, and so on. The zero value selects the
//! entire message.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::parser::PathParser;
use super::segment_name::parse_segment_name;
use crate::error::PathError;

/// Name of the header segment, which carries the delimiter block.
pub const HEADER_SEGMENT: &str = "MSH";

/// Address of a single value inside a message
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path {
    /// 3-character segment name, empty for the whole message
    #[serde(default)]
    pub segment: String,
    /// 1-based occurrence of `segment`
    #[serde(default)]
    pub segment_index: usize,
    /// 1-based field number, 0 for the whole segment
    #[serde(default, skip_serializing_if = "is_zero")]
    pub field: usize,
    /// 1-based repetition within the field
    #[serde(default, skip_serializing_if = "is_zero")]
    pub repetition_index: usize,
    /// 1-based component, 0 for the whole repetition
    #[serde(default, skip_serializing_if = "is_zero")]
    pub component: usize,
    /// 1-based subcomponent, 0 for the whole component
    #[serde(default, skip_serializing_if = "is_zero")]
    pub subcomponent: usize,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(value: &usize) -> bool {
    *value == 0
}

impl Path {
    /// The zero value, selecting the entire message
    #[inline]
    #[must_use]
    pub fn whole_message() -> Self {
        Self::default()
    }

    /// Path to the first occurrence of a whole segment
    ///
    /// # Errors
    ///
    /// Returns `PathError::SegmentName` if `name` is not a 3-character
    /// uppercase alphanumeric token starting with a letter.
    pub fn for_segment(name: &str) -> Result<Self, PathError> {
        let segment = parse_segment_name(name)?;
        Ok(Self {
            segment: segment.to_string(),
            segment_index: 1,
            ..Self::default()
        })
    }

    #[inline]
    #[must_use]
    pub fn is_whole_message(&self) -> bool {
        *self == Self::default()
    }

    /// True if this path targets the header segment
    #[inline]
    #[must_use]
    pub fn is_header(&self) -> bool {
        self.segment == HEADER_SEGMENT
    }

    /// MSH-1, the field separator itself
    #[inline]
    #[must_use]
    pub fn is_field_separator(&self) -> bool {
        self.is_header() && self.field == 1
    }

    /// MSH-2, the encoding characters field
    #[inline]
    #[must_use]
    pub fn is_encoding_characters(&self) -> bool {
        self.is_header() && self.field == 2
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PathParser::parse(s)
    }
}

/// Canonical text form, `SEG[i]-F[r].C.S`
///
/// Levels that hold their default value are left out, so the output is the
/// shortest text that parses back into an equal `Path`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segment)?;
        if self.segment_index != 1 && !self.is_whole_message() {
            write!(f, "[{}]", self.segment_index)?;
        }

        let write_subcomponent = self.subcomponent != 0;
        let write_component = self.component != 0 || write_subcomponent;
        let default_repetition = usize::from(self.field > 0);
        let write_repetition = self.repetition_index != default_repetition;
        let write_field = self.field != 0 || write_repetition || write_component;

        if write_field {
            write!(f, "-{}", self.field)?;
        }
        if write_repetition {
            write!(f, "[{}]", self.repetition_index)?;
        }
        if write_component {
            write!(f, ".{}", self.component)?;
        }
        if write_subcomponent {
            write!(f, ".{}", self.subcomponent)?;
        }
        Ok(())
    }
}
