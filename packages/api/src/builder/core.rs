//! Core `PathBuilder` structure and level setters

use hl7path_core::MessageAbstractor;

/// Fluent builder for a `Path`
///
/// Starts from a segment name and narrows down one level per call. Levels
/// left unset take the parser's defaults: occurrence 1, repetition 1 once a
/// field is chosen, and 0 for everything else.
#[derive(Debug, Clone)]
pub struct PathBuilder {
    /// Extractor used by the terminal `extract` method
    pub(crate) abstractor: MessageAbstractor,
    pub(crate) segment: String,
    pub(crate) segment_index: usize,
    pub(crate) field: usize,
    /// `None` until set explicitly, so the default can follow `field`
    pub(crate) repetition_index: Option<usize>,
    pub(crate) component: usize,
    pub(crate) subcomponent: usize,
}

impl PathBuilder {
    /// Start building a path to the first occurrence of `segment`
    #[must_use]
    pub fn new(segment: impl Into<String>) -> Self {
        Self::with_abstractor(segment, MessageAbstractor::default())
    }

    #[must_use]
    pub(crate) fn with_abstractor(segment: impl Into<String>, abstractor: MessageAbstractor) -> Self {
        Self {
            abstractor,
            segment: segment.into(),
            segment_index: 1,
            field: 0,
            repetition_index: None,
            component: 0,
            subcomponent: 0,
        }
    }

    /// Select the `index`-th occurrence of the segment (1-based)
    #[must_use]
    pub fn index(mut self, index: usize) -> Self {
        self.segment_index = index;
        self
    }

    #[must_use]
    pub fn field(mut self, field: usize) -> Self {
        self.field = field;
        self
    }

    #[must_use]
    pub fn repetition(mut self, repetition: usize) -> Self {
        self.repetition_index = Some(repetition);
        self
    }

    #[must_use]
    pub fn component(mut self, component: usize) -> Self {
        self.component = component;
        self
    }

    #[must_use]
    pub fn subcomponent(mut self, subcomponent: usize) -> Self {
        self.subcomponent = subcomponent;
        self
    }
}
