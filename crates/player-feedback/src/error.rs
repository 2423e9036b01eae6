//! Errors raised while building feedback, never the feedback itself.
//!
//! Every variant here points at a bug on the raising side (an incomplete
//! quote, a broken catalog), so nothing in this crate recovers from them.
use thiserror::Error;

use crate::kind::FeedbackKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("QUOTE/{kind}: missing key `{key}`")]
    MissingQuoteKey { kind: FeedbackKind, key: &'static str },

    #[error("RENDER/{0}")]
    Render(String),

    #[error("TEMPLATE/{0}")]
    Template(String),

    #[error("CATALOG/{0}")]
    Catalog(String),

    #[error("CATALOG/no template for {0}")]
    MissingTemplate(String),

    #[error("CATALOG/unknown template {0}")]
    UnknownTemplate(String),

    #[error("KIND/unknown feedback kind {0}")]
    UnknownKind(String),
}

pub type Result<T> = std::result::Result<T, FeedbackError>;
