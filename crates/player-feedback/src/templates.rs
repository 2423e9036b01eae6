//! Feedback catalog loading.
//!
//! The catalog is a YAML file in the response-templates format:
//! - `version`
//! - `templates`, keyed by [`FeedbackKind`] name, each with handlebars text
//! - optional `example` quote and the `output` it must render to
//!
//! The builtin catalog is compiled into the crate, so the wording is fixed
//! when the crate is built.

use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{FeedbackError, Result};
use crate::kind::FeedbackKind;
use crate::quote::Quote;

const BUILTIN_YAML: &str = include_str!("../../../grammars/feedback-templates.yaml");

#[derive(Debug, Deserialize)]
struct TemplatesFile {
    version: String,
    templates: HashMap<String, Template>,
}

/// A single template definition
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub description: String,
    pub template: String,
    #[serde(default)]
    pub example: Option<Quote>,
    #[serde(default)]
    pub output: Option<String>,
}

/// A complete set of templates, one per [`FeedbackKind`].
#[derive(Debug, Clone)]
pub struct FeedbackCatalog {
    pub version: String,
    templates: HashMap<FeedbackKind, Template>,
}

impl FeedbackCatalog {
    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_YAML)
    }

    /// Parse and validate a catalog. Every kind must have exactly one entry.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: TemplatesFile =
            serde_yaml::from_str(yaml).map_err(|e| FeedbackError::Catalog(e.to_string()))?;

        let mut templates = HashMap::with_capacity(file.templates.len());
        for (name, template) in file.templates {
            let kind = name
                .parse::<FeedbackKind>()
                .map_err(|_| FeedbackError::UnknownTemplate(name.clone()))?;
            templates.insert(kind, template);
        }

        if let Some(missing) = FeedbackKind::ALL.iter().find(|k| !templates.contains_key(*k)) {
            return Err(FeedbackError::MissingTemplate(missing.name().to_string()));
        }

        Ok(FeedbackCatalog {
            version: file.version,
            templates,
        })
    }

    /// The template for `kind`. Always present: `from_yaml` rejects incomplete catalogs.
    pub fn get(&self, kind: FeedbackKind) -> &Template {
        &self.templates[&kind]
    }

    /// Template names in [`FeedbackKind::ALL`] order.
    pub fn list_templates(&self) -> Vec<&'static str> {
        FeedbackKind::ALL
            .iter()
            .filter(|k| self.templates.contains_key(*k))
            .map(|k| k.name())
            .collect()
    }
}
