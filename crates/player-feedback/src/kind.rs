//! Feedback kinds and the Internal/External category each one belongs to.
use std::fmt;
use std::str::FromStr;

use crate::error::FeedbackError;

/// Who detected the problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackCategory {
    /// Found by the scenario player comparing expected and actual traces,
    /// or a fault reported by the host.
    Internal,
    /// Found by the resource limiter wrapping the run (time, memory).
    External,
}

impl fmt::Display for FeedbackCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Internal => write!(f, "internal"),
            Self::External => write!(f, "external"),
        }
    }
}

/// One concrete feedback message. Names double as catalog keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackKind {
    ShouldOutput,
    NegativeOutput,
    WriteToFileFailed,
    ShouldEOF,
    ShouldOutputBeforeEOF,
    /// Only raised when the scenario is not flowing.
    SholdNoOutputBeforeInput,
    ShouldInputBeforeEOF,
    MemoryFeedbackError,
    TimeoutFeedbackError,
    OverflowFeedbackError,
}

const QUOTED_KEYS: &[&str] = &["name", "value"];

impl FeedbackKind {
    pub const ALL: [FeedbackKind; 10] = [
        Self::ShouldOutput,
        Self::NegativeOutput,
        Self::WriteToFileFailed,
        Self::ShouldEOF,
        Self::ShouldOutputBeforeEOF,
        Self::SholdNoOutputBeforeInput,
        Self::ShouldInputBeforeEOF,
        Self::MemoryFeedbackError,
        Self::TimeoutFeedbackError,
        Self::OverflowFeedbackError,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::ShouldOutput => "ShouldOutput",
            Self::NegativeOutput => "NegativeOutput",
            Self::WriteToFileFailed => "WriteToFileFailed",
            Self::ShouldEOF => "ShouldEOF",
            Self::ShouldOutputBeforeEOF => "ShouldOutputBeforeEOF",
            Self::SholdNoOutputBeforeInput => "SholdNoOutputBeforeInput",
            Self::ShouldInputBeforeEOF => "ShouldInputBeforeEOF",
            Self::MemoryFeedbackError => "MemoryFeedbackError",
            Self::TimeoutFeedbackError => "TimeoutFeedbackError",
            Self::OverflowFeedbackError => "OverflowFeedbackError",
        }
    }

    pub fn category(&self) -> FeedbackCategory {
        match self {
            Self::TimeoutFeedbackError | Self::OverflowFeedbackError => FeedbackCategory::External,
            _ => FeedbackCategory::Internal,
        }
    }

    pub fn is_internal(&self) -> bool {
        self.category() == FeedbackCategory::Internal
    }

    pub fn is_external(&self) -> bool {
        self.category() == FeedbackCategory::External
    }

    /// Quote keys the template references. Empty for the bare kinds.
    pub fn required_keys(&self) -> &'static [&'static str] {
        match self {
            Self::ShouldEOF
            | Self::MemoryFeedbackError
            | Self::TimeoutFeedbackError
            | Self::OverflowFeedbackError => &[],
            _ => QUOTED_KEYS,
        }
    }
}

impl fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FeedbackKind {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| FeedbackError::UnknownKind(s.to_string()))
    }
}
