//! # HL7 path extraction engine
//!
//! Addresses and extracts a single value from an HL7 v2 style message using
//! compact path notation such as `PID-3[2].5`.
//!
//! Two pure operations make up the engine:
//!
//! - [`parse_path`] turns path text into a structured [`Path`]
//! - [`abstract_hl7`] resolves the message's own delimiter set from its
//!   header and walks segment, field, repetition, component and
//!   subcomponent down to the addressed substring
//!
//! Malformed paths and malformed headers are errors. A well formed address
//! that points past the data yields an empty string.
//!
//! ```rust
//! use hl7path_core::{abstract_hl7, parse_path};
//!
//! let message = "MSH|^~\\&|HIS|RIH\rPID|||555-44-4444^^^^SSN~123^^^^MRN";
//! let path = parse_path("PID-3[2].5").expect("valid path");
//! assert_eq!(abstract_hl7(message, &path).expect("valid message"), "MRN");
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod error;
pub mod message;
pub mod path;

pub mod prelude;

pub use crate::prelude::*;
