//! Error handling for path parsing and message abstraction
//!
//! Malformed input is reported through these types. An address that is
//! well formed but points past the available data is not an error; the
//! abstractor returns an empty string for it instead.

pub mod classification;
mod types;

pub use classification::ErrorKind;
pub use types::{Hl7Error, Hl7Result, MessageError, PathError, SegmentNameError, ValidationError};
