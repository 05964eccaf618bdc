//! Essential types for extraction callers

pub use crate::config::{ExtractorConfig, SegmentMatch};
pub use crate::error::{
    ErrorKind, Hl7Error, Hl7Result, MessageError, PathError, SegmentNameError, ValidationError,
};
pub use crate::message::{DelimiterSet, MessageAbstractor, abstract_hl7};
pub use crate::path::{Path, PathParser, parse_path, parse_segment_name};
