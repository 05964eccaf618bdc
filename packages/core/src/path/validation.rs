//! Hierarchical consistency checks on a `Path`
//!
//! These run before any message text is looked at, so a bad address fails
//! the same way whatever message it is applied to.

use super::types::Path;
use crate::error::{PathError, ValidationError};

impl Path {
    /// Check the path against the addressing rules
    ///
    /// # Errors
    ///
    /// Returns `PathError::Validation` carrying the first rule that fails:
    /// - `NonZeroWithoutSegment` - no segment but some deeper level is set
    /// - `HeaderIndexNotOne` - MSH with an occurrence other than 1
    /// - `FieldSeparatorHasChildren` - MSH-1 with a component or subcomponent
    /// - `FieldWithoutSegment` - field set without a segment
    /// - `RepetitionWithoutField` - repetition set without a field
    /// - `FieldWithoutRepetition` - field set with repetition 0
    /// - `ComponentWithoutField` - component set without a field
    /// - `SubcomponentWithoutComponent` - subcomponent set without a component
    pub fn validate(&self) -> Result<(), PathError> {
        self.check_rules().map_err(PathError::from)
    }

    fn check_rules(&self) -> Result<(), ValidationError> {
        if self.segment.is_empty() {
            let any_set = self.segment_index != 0
                || self.field != 0
                || self.repetition_index != 0
                || self.component != 0
                || self.subcomponent != 0;
            if any_set {
                return Err(ValidationError::NonZeroWithoutSegment);
            }
            return Ok(());
        }
        if self.is_header() && self.segment_index != 1 {
            return Err(ValidationError::HeaderIndexNotOne);
        }
        if self.is_field_separator() && (self.component != 0 || self.subcomponent != 0) {
            return Err(ValidationError::FieldSeparatorHasChildren);
        }
        if self.field != 0 && self.segment.is_empty() {
            return Err(ValidationError::FieldWithoutSegment);
        }
        if self.repetition_index != 0 && self.field == 0 {
            return Err(ValidationError::RepetitionWithoutField);
        }
        if self.field != 0 && self.repetition_index == 0 {
            return Err(ValidationError::FieldWithoutRepetition);
        }
        if self.component != 0 && self.field == 0 {
            return Err(ValidationError::ComponentWithoutField);
        }
        if self.subcomponent != 0 && self.component == 0 {
            return Err(ValidationError::SubcomponentWithoutComponent);
        }
        Ok(())
    }
}
