//! Player feedback: rendered messages for scenario mismatches.
//!
//! When a program run does not follow its scenario (expected inputs,
//! outputs and exit), the scenario player or the resource limiter wrapping
//! the run raises a [`FeedbackException`]. Each one carries the
//! [`FeedbackKind`] that was detected, the [`Quote`] it was raised with and
//! the message rendered from the builtin catalog.
//!
//! | Executable          | Scenario    | Kind                    | Category |
//! |---------------------|-------------|-------------------------|----------|
//! | EOF                 | More input  | `ShouldInputBeforeEOF`  | Internal |
//! | EOF                 | More output | `ShouldOutputBeforeEOF` | Internal |
//! | Input / not exiting | EOF         | `ShouldEOF`             | Internal |
//! | Input / not exiting | More output | `ShouldOutput`          | Internal |
//! | Signal              |             | `MemoryFeedbackError`   | Internal |
//! | Timeout             |             | `TimeoutFeedbackError`  | External |
//! | Overflow            |             | `OverflowFeedbackError` | External |
//!
//! # Example
//!
//! ```
//! use player_feedback::{FeedbackCategory, FeedbackException, FeedbackKind, Quote};
//!
//! let quote = Quote::new().with("name", "x").with("value", "5");
//! let fb = FeedbackException::new(FeedbackKind::ShouldOutput, quote).unwrap();
//! assert!(fb.feedback().contains("x (5)"));
//! assert_eq!(fb.category(), FeedbackCategory::Internal);
//! ```

pub mod error;
pub mod exception;
pub mod kind;
pub mod quote;
pub mod renderer;
pub mod templates;

pub use error::{FeedbackError, Result};
pub use exception::FeedbackException;
pub use kind::{FeedbackCategory, FeedbackKind};
pub use quote::Quote;
pub use renderer::FeedbackRenderer;
pub use templates::{FeedbackCatalog, Template};
