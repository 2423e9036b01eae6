//! The feedback value raised by the scenario player and the resource limiter.
use serde_json::Value;
use std::fmt;

use crate::error::Result;
use crate::kind::{FeedbackCategory, FeedbackKind};
use crate::quote::Quote;
use crate::renderer::FeedbackRenderer;

/// A detected mismatch or limit violation, with its message already rendered.
///
/// Built once, never mutated. Callers return it as an error and the
/// reporting layer shows [`feedback`](Self::feedback) to the student.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackException {
    kind: FeedbackKind,
    quote: Quote,
    feedback: String,
}

impl FeedbackException {
    /// Render `kind` from the builtin catalog.
    pub fn new(kind: FeedbackKind, quote: Quote) -> Result<Self> {
        Self::with_renderer(FeedbackRenderer::builtin()?, kind, quote)
    }

    /// Render `kind` with a caller-supplied renderer instead of the builtin one.
    pub fn with_renderer(
        renderer: &FeedbackRenderer,
        kind: FeedbackKind,
        quote: Quote,
    ) -> Result<Self> {
        let feedback = renderer.render(kind, &quote)?;
        tracing::debug!(%kind, category = %kind.category(), "feedback raised");
        Ok(FeedbackException { kind, quote, feedback })
    }

    fn quoted(kind: FeedbackKind, name: impl Into<Value>, value: impl Into<Value>) -> Result<Self> {
        Self::new(kind, Quote::new().with("name", name).with("value", value))
    }

    /// Expected output did not show up, in order, before EOF.
    pub fn should_output(name: impl Into<Value>, value: impl Into<Value>) -> Result<Self> {
        Self::quoted(FeedbackKind::ShouldOutput, name, value)
    }

    /// A forbidden value was printed.
    pub fn negative_output(name: impl Into<Value>, value: impl Into<Value>) -> Result<Self> {
        Self::quoted(FeedbackKind::NegativeOutput, name, value)
    }

    /// The file checked after the run was missing or had the wrong content.
    pub fn write_to_file_failed(name: impl Into<Value>, value: impl Into<Value>) -> Result<Self> {
        Self::quoted(FeedbackKind::WriteToFileFailed, name, value)
    }

    /// The program kept running after the scenario ended.
    pub fn should_eof() -> Result<Self> {
        Self::new(FeedbackKind::ShouldEOF, Quote::new())
    }

    /// The program exited before printing the expected output.
    pub fn should_output_before_eof(
        name: impl Into<Value>,
        value: impl Into<Value>,
    ) -> Result<Self> {
        Self::quoted(FeedbackKind::ShouldOutputBeforeEOF, name, value)
    }

    /// Only meaningful for scenarios that are not flowing.
    pub fn no_output_before_input(name: impl Into<Value>, value: impl Into<Value>) -> Result<Self> {
        Self::quoted(FeedbackKind::SholdNoOutputBeforeInput, name, value)
    }

    /// The program exited before reading the expected input.
    pub fn should_input_before_eof(
        name: impl Into<Value>,
        value: impl Into<Value>,
    ) -> Result<Self> {
        Self::quoted(FeedbackKind::ShouldInputBeforeEOF, name, value)
    }

    /// The host reported a memory fault during the run.
    pub fn memory_error() -> Result<Self> {
        Self::new(FeedbackKind::MemoryFeedbackError, Quote::new())
    }

    /// The run went over its time limit.
    pub fn timeout() -> Result<Self> {
        Self::new(FeedbackKind::TimeoutFeedbackError, Quote::new())
    }

    /// The run went over its memory limit.
    pub fn overflow() -> Result<Self> {
        Self::new(FeedbackKind::OverflowFeedbackError, Quote::new())
    }

    /// Which mismatch or violation was detected.
    pub fn kind(&self) -> FeedbackKind {
        self.kind
    }

    /// Internal or External, taken from the kind.
    pub fn category(&self) -> FeedbackCategory {
        self.kind.category()
    }

    /// The quote exactly as it was passed in.
    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    /// Consume the feedback and hand back its quote.
    pub fn into_quote(self) -> Quote {
        self.quote
    }

    /// The rendered message shown to the student.
    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}

impl fmt::Display for FeedbackException {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.feedback)
    }
}

impl std::error::Error for FeedbackException {}
