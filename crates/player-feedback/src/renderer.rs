//! Template rendering for feedback messages.
//!
//! Handlebars runs in strict mode with escaping turned off: a placeholder
//! without a matching quote key is an error, and quoted values (program
//! output, often full of `<` and `&`) are written verbatim. Values are
//! turned into text by [`Quote::display_values`] first, so `null`, objects
//! and arrays show up in the message instead of vanishing.

use handlebars::Handlebars;
use once_cell::sync::Lazy;

use crate::error::{FeedbackError, Result};
use crate::kind::FeedbackKind;
use crate::quote::Quote;
use crate::templates::FeedbackCatalog;

static BUILTIN: Lazy<Result<FeedbackRenderer>> = Lazy::new(|| {
    let renderer = FeedbackCatalog::builtin().and_then(FeedbackRenderer::new);
    match &renderer {
        Ok(r) => tracing::debug!(version = %r.catalog.version, "builtin feedback catalog loaded"),
        Err(e) => tracing::error!(error = %e, "builtin feedback catalog is invalid"),
    }
    renderer
});

/// Compiled catalog, ready to render any [`FeedbackKind`].
pub struct FeedbackRenderer {
    handlebars: Handlebars<'static>,
    catalog: FeedbackCatalog,
}

impl FeedbackRenderer {
    /// Compile every template in the catalog.
    pub fn new(catalog: FeedbackCatalog) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        for kind in FeedbackKind::ALL {
            handlebars
                .register_template_string(kind.name(), &catalog.get(kind).template)
                .map_err(|e| FeedbackError::Template(format!("{}: {}", kind, e)))?;
        }

        Ok(FeedbackRenderer { handlebars, catalog })
    }

    /// Shared renderer over the builtin catalog, built on first use.
    pub fn builtin() -> Result<&'static FeedbackRenderer> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// Render `kind` with `quote`. Fails on the first required key the quote lacks.
    pub fn render(&self, kind: FeedbackKind, quote: &Quote) -> Result<String> {
        let missing = kind.required_keys().iter().copied().find(|k| !quote.contains_key(k));
        if let Some(key) = missing {
            tracing::warn!(%kind, key, "feedback quote is missing a required key");
            return Err(FeedbackError::MissingQuoteKey { kind, key });
        }

        self.handlebars
            .render(kind.name(), &quote.display_values())
            .map_err(|e| FeedbackError::Render(format!("{}: {}", kind, e)))
    }

    pub fn catalog(&self) -> &FeedbackCatalog {
        &self.catalog
    }
}
