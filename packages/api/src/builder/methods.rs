//! Terminal builder methods

use hl7path_core::{Hl7Result, Path, PathError, parse_segment_name};

use crate::builder::core::PathBuilder;

impl PathBuilder {
    /// Finish the path
    ///
    /// # Errors
    ///
    /// Returns `PathError::SegmentName` if the segment token is malformed,
    /// or `PathError::Validation` if the chosen levels break an addressing
    /// rule (for example a subcomponent without a component).
    pub fn build(&self) -> Result<Path, PathError> {
        let segment = parse_segment_name(&self.segment)?;
        let path = Path {
            segment: segment.to_string(),
            segment_index: self.segment_index,
            field: self.field,
            repetition_index: self
                .repetition_index
                .unwrap_or(usize::from(self.field > 0)),
            component: self.component,
            subcomponent: self.subcomponent,
        };
        path.validate()?;
        Ok(path)
    }

    /// Finish the path and extract its value from `message`
    ///
    /// # Errors
    ///
    /// Path errors from [`PathBuilder::build`], and message errors from
    /// `MessageAbstractor::extract`.
    pub fn extract<'a>(&self, message: &'a str) -> Hl7Result<&'a str> {
        let path = self.build()?;
        let value = self.abstractor.extract(message, &path)?;
        tracing::debug!(path = %path, found = !value.is_empty(), "Extracted value via builder");
        Ok(value)
    }
}
