use super::types::{Hl7Error, PathError};

/// Coarse error category, for callers that branch on the kind of failure
/// rather than the exact rule that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Path text does not match the grammar
    PathFormat,
    /// Segment token has the wrong shape
    SegmentName,
    /// A hierarchical rule on the path is violated
    PathValidation,
    /// The message header or delimiter block is malformed
    MessageStructure,
}

impl PathError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            PathError::InvalidFormat => ErrorKind::PathFormat,
            PathError::SegmentName(_) => ErrorKind::SegmentName,
            PathError::Validation(_) => ErrorKind::PathValidation,
        }
    }
}

impl Hl7Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Hl7Error::Path(err) => err.kind(),
            Hl7Error::Message(_) => ErrorKind::MessageStructure,
        }
    }

    /// Returns true if the address itself was rejected.
    #[must_use]
    pub fn is_path(&self) -> bool {
        matches!(self, Hl7Error::Path(_))
    }

    /// Returns true if the message text was rejected.
    #[must_use]
    pub fn is_message(&self) -> bool {
        matches!(self, Hl7Error::Message(_))
    }
}
