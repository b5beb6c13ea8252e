// Template expansion against positional or named parameters

use regex::Captures;
use std::collections::HashMap;
use std::sync::Arc;

use super::ast::UriTemplate;
use super::cache::TemplateCache;
use super::error::ExpansionError;
use super::parser::PATH_PLACEHOLDER;
use super::renderer::{ParameterRenderer, PathEncoder, QueryParameter, ValueEncoder};
use super::value::{ParamValue, Parameters};
use crate::domain::paging::PAGING_PARAMETERS;

/// The two ways of supplying values for an expansion.
#[derive(Debug, Clone, Copy)]
pub enum ParameterSource<'a> {
    /// Path placeholders first, in declaration order, then query placeholders.
    Values(&'a [ParamValue]),
    Named {
        parameters: &'a Parameters,
        composite: bool,
    },
}

impl ParameterSource<'_> {
    pub fn is_empty(&self) -> bool {
        match self {
            ParameterSource::Values(values) => values.is_empty(),
            ParameterSource::Named { parameters, .. } => parameters.is_empty(),
        }
    }
}

/// Check `source` against the declarations of `template`.
///
/// Positional sources may not target exploded templates and must supply at
/// least every path value and at most one value per placeholder. Named sources
/// must cover every path name, may only use declared names (paging names are
/// always tolerated), and may pass a multi-element collection only to an
/// exploded name.
pub fn validate(template: &UriTemplate, source: &ParameterSource<'_>) -> Result<(), ExpansionError> {
    match source {
        ParameterSource::Values(values) => {
            if template.has_exploded_query() {
                return Err(ExpansionError::exploded_with_values(template.as_str()));
            }

            let rendered = || {
                values
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            };

            if values.len() > template.placeholder_count() {
                return Err(ExpansionError::too_many(template.as_str(), &rendered()));
            }
            if values.len() < template.path_placeholder_names().len() {
                return Err(ExpansionError::too_few(template.as_str(), &rendered()));
            }
        }
        ParameterSource::Named { parameters, .. } => {
            if !template.covers_path(parameters.names()) {
                return Err(ExpansionError::missing_path_parameters(template.as_str(), parameters));
            }

            let has_unknown = parameters
                .names()
                .filter(|name| !PAGING_PARAMETERS.contains(name))
                .any(|name| !template.declares(name));
            if has_unknown {
                return Err(ExpansionError::unknown(template.as_str(), parameters));
            }

            let needs_explode = parameters.iter().any(|(name, value)| {
                value.is_collection()
                    && value.len() > 1
                    && template.declares(name)
                    && !template.is_exploded(name)
            });
            if needs_explode {
                return Err(ExpansionError::explode_required(template.as_str(), parameters));
            }
        }
    }

    Ok(())
}

/// Expands parsed templates into URIs.
pub struct Expander {
    cache: TemplateCache,
    renderer: ParameterRenderer,
    encoder: PathEncoder,
}

impl Expander {
    pub fn new() -> Self {
        Self {
            cache: TemplateCache::new(),
            renderer: ParameterRenderer::new(),
            encoder: PathEncoder,
        }
    }

    /// Parse `text`, reusing an earlier parse of the same text.
    pub fn template(&self, text: &str) -> Result<Arc<UriTemplate>, ExpansionError> {
        self.cache.get_or_parse(text)
    }

    pub fn expand_values(&self, template: &UriTemplate, values: &[ParamValue]) -> Result<String, ExpansionError> {
        self.expand_source(template, ParameterSource::Values(values))
    }

    pub fn expand_parameters(
        &self,
        template: &UriTemplate,
        parameters: &Parameters,
        composite: bool,
    ) -> Result<String, ExpansionError> {
        self.expand_source(template, ParameterSource::Named { parameters, composite })
    }

    /// Named expansion with collections rendered comma-joined.
    pub fn expand(&self, template: &UriTemplate, parameters: &Parameters) -> Result<String, ExpansionError> {
        self.expand_parameters(template, parameters, false)
    }

    pub fn expand_source(&self, template: &UriTemplate, source: ParameterSource<'_>) -> Result<String, ExpansionError> {
        tracing::debug!(template = %template, "expanding uri template");

        if source.is_empty() {
            return Self::expand_without_parameters(template);
        }

        validate(template, &source)?;

        let expanded = match source {
            ParameterSource::Values(values) => self.substitute_values(template, values),
            ParameterSource::Named { parameters, composite } => {
                self.substitute_parameters(template, parameters, composite)
            }
        };
        Ok(expanded)
    }

    fn expand_without_parameters(template: &UriTemplate) -> Result<String, ExpansionError> {
        if !template.is_templated() {
            Ok(template.as_str().to_string())
        } else if template.is_query_only() {
            Ok(template.text_without_query_group().to_string())
        } else {
            Err(ExpansionError::no_parameters(template.as_str()))
        }
    }

    fn substitute_values(&self, template: &UriTemplate, values: &[ParamValue]) -> String {
        let (path_values, query_values) = values.split_at(template.path_placeholder_names().len());

        // A repeated name keeps the value bound at its first occurrence.
        let mut bound: HashMap<&str, &ParamValue> = HashMap::new();
        for (name, value) in template.path_placeholder_names().iter().zip(path_values) {
            bound.entry(name.as_str()).or_insert(value);
        }

        let path = PATH_PLACEHOLDER.replace_all(template.text_without_query_group(), |caps: &Captures| {
            bound
                .get(&caps[1])
                .map(|value| self.encode_path_value(value))
                .unwrap_or_default()
        });

        let query: Vec<QueryParameter> = template
            .query_placeholders()
            .iter()
            .zip(query_values)
            .map(|(placeholder, value)| QueryParameter::from_value(&placeholder.name, value.clone(), false))
            .collect();

        format!("{}{}", path, self.renderer.render(&query))
    }

    fn substitute_parameters(&self, template: &UriTemplate, parameters: &Parameters, composite: bool) -> String {
        let path = PATH_PLACEHOLDER.replace_all(template.text_without_query_group(), |caps: &Captures| {
            parameters
                .get(&caps[1])
                .map(|value| self.encode_path_value(value))
                .unwrap_or_default()
        });

        let query: Vec<QueryParameter> = template
            .query_placeholders()
            .iter()
            .filter_map(|placeholder| {
                parameters
                    .get(&placeholder.name)
                    .map(|value| QueryParameter::from_value(&placeholder.name, value.clone(), composite))
            })
            .collect();

        format!("{}{}", path, self.renderer.render(&query))
    }

    fn encode_path_value(&self, value: &ParamValue) -> String {
        value
            .present_values()
            .into_iter()
            .map(|item| self.encoder.encode(item))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for Expander {
    fn default() -> Self {
        Self::new()
    }
}
