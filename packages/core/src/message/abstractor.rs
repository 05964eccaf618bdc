//! Value extraction
//!
//! Walks segment, field, repetition, component and subcomponent in turn,
//! splitting on the delimiters the message itself declares. Nothing is
//! copied along the way; the result borrows from the input message.

use super::delimiters::{DelimiterSet, HeaderBlock};
use super::segments::find_segment;
use crate::config::ExtractorConfig;
use crate::error::Hl7Result;
use crate::path::{HEADER_SEGMENT, Path};

/// Resolves a `Path` against raw message text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageAbstractor {
    config: ExtractorConfig,
}

impl MessageAbstractor {
    #[must_use]
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract the value `path` addresses in `message`
    ///
    /// An address past the available data (absent segment occurrence, or
    /// any index beyond what is there) gives `Ok("")`.
    ///
    /// # Errors
    ///
    /// Returns `Hl7Error::Path` if the path breaks an addressing rule. This
    /// is checked before the message is touched. Returns `Hl7Error::Message`
    /// if the header or its delimiter block is malformed.
    pub fn extract<'a>(&self, message: &'a str, path: &Path) -> Hl7Result<&'a str> {
        if let Err(err) = path.validate() {
            log::debug!("Rejected path '{path}': {err}");
            return Err(err.into());
        }
        if path.is_whole_message() {
            return Ok(message);
        }

        let header = HeaderBlock::read(message).inspect_err(|err| {
            log::debug!("Malformed message header: {err}");
        })?;
        if path.is_field_separator() {
            return Ok(header_separator(message, header.field_separator()).unwrap_or(""));
        }
        let delimiters = header.resolve().inspect_err(|err| {
            log::debug!("Malformed delimiter block: {err}");
        })?;

        let Some(segment) = find_segment(
            message,
            &path.segment,
            path.segment_index,
            delimiters.field,
            self.config.segment_match,
        ) else {
            return Ok("");
        };

        Ok(select_within_segment(message, segment, path, &delimiters).unwrap_or(""))
    }
}

/// Descend from a matched segment to the addressed value
///
/// `None` means some index ran past the data.
fn select_within_segment<'a>(
    message: &'a str,
    segment: &'a str,
    path: &Path,
    delimiters: &DelimiterSet,
) -> Option<&'a str> {
    if path.field == 0 {
        return Some(segment);
    }

    let field = select_field(message, segment, path, delimiters.field)?;

    let repetition = if path.is_encoding_characters() {
        // MSH-2 holds the repetition separator as data
        (path.repetition_index == 1).then_some(field)?
    } else {
        nth_part(field, delimiters.repetition, path.repetition_index)?
    };

    if path.component == 0 {
        return Some(repetition);
    }
    let component = nth_part(repetition, delimiters.component, path.component)?;

    if path.subcomponent == 0 {
        return Some(component);
    }
    nth_part(component, delimiters.subcomponent, path.subcomponent)
}

/// Pick a field by its conventional number
///
/// Index 0 of the split is the segment name. In the header the field
/// separator is consumed by the split, so MSH-1 is the separator itself and
/// every later split index is shifted up by one.
fn select_field<'a>(message: &'a str, segment: &'a str, path: &Path, separator: char) -> Option<&'a str> {
    let mut fields = segment.split(separator);
    if !path.is_header() {
        return fields.nth(path.field);
    }
    match path.field {
        0 => fields.next(),
        1 => header_separator(message, separator),
        n => fields.nth(n - 1),
    }
}

/// The field separator as it sits in the message, right after `MSH`
fn header_separator(message: &str, separator: char) -> Option<&str> {
    let start = HEADER_SEGMENT.len();
    message.get(start..start + separator.len_utf8())
}

/// 1-based pick from `text` split on `separator`
fn nth_part(text: &str, separator: char, index: usize) -> Option<&str> {
    index.checked_sub(1).and_then(|i| text.split(separator).nth(i))
}

/// Extract the value `path` addresses in `message` with default settings
///
/// # Errors
///
/// See [`MessageAbstractor::extract`].
pub fn abstract_hl7(message: &str, path: &Path) -> Hl7Result<String> {
    MessageAbstractor::default()
        .extract(message, path)
        .map(str::to_owned)
}
