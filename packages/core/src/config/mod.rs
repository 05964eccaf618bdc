//! Extraction settings
//!
//! The defaults reproduce the long-standing behavior of the abstractor.
//! Settings derive serde so callers can load them from whatever
//! configuration source they already own.

use serde::{Deserialize, Serialize};

/// How a requested segment name is compared with segment text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentMatch {
    /// The segment text starts with the requested name. `ZZZ` also
    /// matches a segment named `ZZZA`.
    #[default]
    Prefix,
    /// The name token before the first field separator equals the
    /// requested name.
    Exact,
}

/// Settings for `MessageAbstractor`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    pub segment_match: SegmentMatch,
}

impl ExtractorConfig {
    #[must_use]
    pub fn with_segment_match(mut self, segment_match: SegmentMatch) -> Self {
        self.segment_match = segment_match;
        self
    }
}
