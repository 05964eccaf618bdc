//! Message side of extraction: delimiter resolution, segment selection and
//! the hierarchical walk down to a single value.

pub mod abstractor;
pub mod delimiters;
pub mod segments;

pub use abstractor::{MessageAbstractor, abstract_hl7};
pub use delimiters::{DELIMITER_BLOCK_LEN, DelimiterSet, HeaderBlock, MIN_MESSAGE_LEN};
pub use segments::split_segments;
