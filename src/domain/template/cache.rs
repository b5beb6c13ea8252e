// Cache of parsed templates keyed by their raw text

use dashmap::DashMap;
use std::sync::Arc;

use super::ast::UriTemplate;
use super::error::ExpansionError;
use super::parser::TemplateParser;

/// Templates are pure functions of their text, so entries are inserted once
/// and never updated. Failed parses are not cached.
#[derive(Debug, Default)]
pub struct TemplateCache {
    entries: DashMap<String, Arc<UriTemplate>>,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_parse(&self, text: &str) -> Result<Arc<UriTemplate>, ExpansionError> {
        if let Some(template) = self.entries.get(text) {
            return Ok(Arc::clone(template.value()));
        }

        let parsed = Arc::new(TemplateParser::parse(text)?);
        let template = self
            .entries
            .entry(text.to_string())
            .or_insert_with(|| {
                tracing::debug!(template = text, "caching parsed template");
                parsed
            })
            .value()
            .clone();
        Ok(template)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
