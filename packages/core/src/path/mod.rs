//! Path notation: the address model, its grammar and its validation rules

pub mod parser;
pub mod segment_name;
pub mod types;
mod validation;

pub use parser::{PathParser, parse_path};
pub use segment_name::parse_segment_name;
pub use types::{HEADER_SEGMENT, Path};
