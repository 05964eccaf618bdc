//! Delimiter resolution from the message header
//!
//! A message declares its own delimiter alphabet right after the `MSH`
//! token. The seven characters there are, in order: field, component,
//! repetition, escape and subcomponent separators, then a closing pair of
//! which at least one must be the field separator again.

use crate::error::MessageError;
use crate::path::HEADER_SEGMENT;

/// Characters in the delimiter block following `MSH`
pub const DELIMITER_BLOCK_LEN: usize = 7;

/// Shortest message that can carry a full delimiter block
pub const MIN_MESSAGE_LEN: usize = 3 + DELIMITER_BLOCK_LEN;

/// The five delimiters a message declares in its header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DelimiterSet {
    pub field: char,
    pub component: char,
    pub repetition: char,
    pub escape: char,
    pub subcomponent: char,
}

/// Raw delimiter block read from the header, not yet checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderBlock {
    chars: [char; DELIMITER_BLOCK_LEN],
}

impl HeaderBlock {
    /// Read the delimiter block from the start of a message
    ///
    /// # Errors
    ///
    /// Returns `MessageError::MissingHeader` if the message does not begin
    /// with `MSH`, or `MessageError::TooShort` if fewer than seven
    /// characters follow it.
    pub fn read(message: &str) -> Result<Self, MessageError> {
        let Some(rest) = message.strip_prefix(HEADER_SEGMENT) else {
            return Err(MessageError::MissingHeader);
        };

        if message.chars().take(MIN_MESSAGE_LEN).count() < MIN_MESSAGE_LEN {
            return Err(MessageError::TooShort);
        }

        let mut chars = [char::default(); DELIMITER_BLOCK_LEN];
        for (slot, ch) in chars.iter_mut().zip(rest.chars()) {
            *slot = ch;
        }
        Ok(Self { chars })
    }

    /// The field separator, MSH-1
    #[inline]
    #[must_use]
    pub fn field_separator(&self) -> char {
        self.chars[0]
    }

    /// Check the block and turn it into a `DelimiterSet`
    ///
    /// # Errors
    ///
    /// - `MissingComponentSeparator`, `MissingRepetitionSeparator`,
    ///   `MissingEscapeCharacter`, `MissingSubcomponentSeparator` - that
    ///   slot holds the field separator
    /// - `UnexpectedExtraSeparators` - neither closing character is the
    ///   field separator
    /// - `DuplicateSeparators` - two of the five delimiters are equal
    pub fn resolve(self) -> Result<DelimiterSet, MessageError> {
        let [field, component, repetition, escape, subcomponent, close_a, close_b] = self.chars;

        if component == field {
            return Err(MessageError::MissingComponentSeparator);
        }
        if repetition == field {
            return Err(MessageError::MissingRepetitionSeparator);
        }
        if escape == field {
            return Err(MessageError::MissingEscapeCharacter);
        }
        if subcomponent == field {
            return Err(MessageError::MissingSubcomponentSeparator);
        }
        if close_a != field && close_b != field {
            return Err(MessageError::UnexpectedExtraSeparators);
        }

        let set = [field, component, repetition, escape, subcomponent];
        for (i, a) in set.iter().enumerate() {
            if set[i + 1..].contains(a) {
                return Err(MessageError::DuplicateSeparators);
            }
        }

        Ok(DelimiterSet {
            field,
            component,
            repetition,
            escape,
            subcomponent,
        })
    }
}

impl DelimiterSet {
    /// Read and check the delimiter block of a message
    ///
    /// # Errors
    ///
    /// See [`HeaderBlock::read`] and [`HeaderBlock::resolve`].
    pub fn from_message(message: &str) -> Result<Self, MessageError> {
        HeaderBlock::read(message)?.resolve()
    }

    /// The encoding characters as they appear in MSH-2
    #[must_use]
    pub fn encoding_characters(&self) -> String {
        [self.component, self.repetition, self.escape, self.subcomponent]
            .iter()
            .collect()
    }
}
