//! Error types for path parsing, path validation and message abstraction.

/// Result alias for the top-level extraction operations.
pub type Hl7Result<T> = std::result::Result<T, Hl7Error>;

/// Segment token shape violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SegmentNameError {
    #[error("segment name must be 3 characters")]
    WrongLength,
    #[error("segment name must begin with an uppercase letter")]
    FirstCharNotUppercase,
    #[error("segment name must be uppercase alphanumeric")]
    NotAlphanumeric,
}

/// Hierarchical consistency violations on a `Path`
///
/// Each variant maps to one rule and carries a stable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("if Segment is empty, the rest of the path must be empty or 0")]
    NonZeroWithoutSegment,
    #[error("if Segment is MSH, SegmentIndex must be 1")]
    HeaderIndexNotOne,
    #[error("if Segment is MSH and Field is 1, the rest of the path must be empty or 0")]
    FieldSeparatorHasChildren,
    #[error("if Field is set, Segment must be set")]
    FieldWithoutSegment,
    #[error("if RepetitionIndex is set, Field must be set")]
    RepetitionWithoutField,
    #[error("if Field is set, RepetitionIndex must be at least 1")]
    FieldWithoutRepetition,
    #[error("if Component is set, Field must be set")]
    ComponentWithoutField,
    #[error("if Subcomponent is set, Component must be set")]
    SubcomponentWithoutComponent,
}

/// Errors produced while turning text into a `Path` or checking one
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("invalid path format")]
    InvalidFormat,
    #[error(transparent)]
    SegmentName(#[from] SegmentNameError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Structural problems with the message header or its delimiter block
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MessageError {
    #[error("invalid HL7 message: must begin with MSH")]
    MissingHeader,
    #[error("invalid HL7 message: message too short to contain separators and meaningful data")]
    TooShort,
    #[error("missing component separator")]
    MissingComponentSeparator,
    #[error("missing repetition separator")]
    MissingRepetitionSeparator,
    #[error("missing escape character")]
    MissingEscapeCharacter,
    #[error("missing subcomponent separator")]
    MissingSubcomponentSeparator,
    #[error("unexpected extra separators")]
    UnexpectedExtraSeparators,
    #[error("separators must be unique")]
    DuplicateSeparators,
}

/// Any failure surfaced by an extraction call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Hl7Error {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Message(#[from] MessageError),
}
