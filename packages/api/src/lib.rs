//! HL7 v2 path extraction public API
//!
//! Pull single values out of HL7 v2 style messages with compact path
//! notation such as `PID-3[2].5`, or build the path fluently.
//!
//! ```rust
//! use hl7path::Hl7;
//!
//! let message = "MSH|^~\\&|HIS|RIH\rPID|||555-44-4444^^^^SSN~123^^^^MRN";
//!
//! let mrn = Hl7::new().extract(message, "PID-3[2].1").expect("valid path and message");
//! assert_eq!(mrn, "123");
//!
//! let kind = hl7path::path("PID")
//!     .field(3)
//!     .repetition(2)
//!     .component(5)
//!     .extract(message)
//!     .expect("valid path and message");
//! assert_eq!(kind, "MRN");
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::PathBuilder;

// Re-export the engine types callers work with
pub use hl7path_core::{
    DelimiterSet, ErrorKind, ExtractorConfig, Hl7Error, Hl7Result, MessageAbstractor,
    MessageError, Path, PathError, PathParser, SegmentMatch, SegmentNameError, ValidationError,
    abstract_hl7, parse_path,
};

/// Main entry point for extraction
///
/// Holds only its settings, so a single instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hl7 {
    abstractor: MessageAbstractor,
}

impl Hl7 {
    /// Extractor with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Extractor with custom settings
    #[must_use]
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self {
            abstractor: MessageAbstractor::new(config),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ExtractorConfig {
        self.abstractor.config()
    }

    /// Parse `path` and extract its value from `message`
    ///
    /// # Errors
    ///
    /// Returns `Hl7Error::Path` if the path text or its levels are invalid,
    /// and `Hl7Error::Message` if the message header is malformed.
    pub fn extract<'a>(&self, message: &'a str, path: &str) -> Hl7Result<&'a str> {
        let parsed = parse_path(path).inspect_err(|err| {
            tracing::debug!(path, error = %err, "Rejected path text");
        })?;
        self.extract_path(message, &parsed)
    }

    /// Extract the value an already built `Path` addresses
    ///
    /// # Errors
    ///
    /// See [`Hl7::extract`].
    pub fn extract_path<'a>(&self, message: &'a str, path: &Path) -> Hl7Result<&'a str> {
        match self.abstractor.extract(message, path) {
            Ok(value) => {
                tracing::debug!(path = %path, found = !value.is_empty(), "Extracted value");
                Ok(value)
            }
            Err(err) => {
                tracing::debug!(path = %path, kind = ?err.kind(), error = %err, "Extraction failed");
                Err(err)
            }
        }
    }

    /// Start a fluent path that extracts with this instance's settings
    #[must_use]
    pub fn path(&self, segment: impl Into<String>) -> PathBuilder {
        PathBuilder::with_abstractor(segment, self.abstractor)
    }
}

/// Parse `path` and extract its value from `message` with default settings
///
/// # Errors
///
/// See [`Hl7::extract`].
pub fn extract(message: &str, path: &str) -> Hl7Result<String> {
    Hl7::new().extract(message, path).map(str::to_owned)
}

/// Start a fluent path to the first occurrence of `segment`
///
/// Shorthand for `PathBuilder::new(segment)`
#[must_use]
pub fn path(segment: impl Into<String>) -> PathBuilder {
    PathBuilder::new(segment)
}
