// Template parser using regular expressions

use once_cell::sync::Lazy;
use regex::Regex;

use super::ast::{QueryPlaceholder, UriTemplate};
use super::error::ExpansionError;

/// A `{...}` group whose content does not start with `?`.
pub(super) static PATH_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^?}][^}]*)\}").expect("path placeholder pattern is valid"));

/// The `{?a,b*}` group, only when it closes the template.
static QUERY_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\?([^}]*)\}$").expect("query group pattern is valid"));

pub struct TemplateParser;

impl TemplateParser {
    pub fn parse(template: &str) -> Result<UriTemplate, ExpansionError> {
        let path_names = PATH_PLACEHOLDER
            .captures_iter(template)
            .map(|caps| caps[1].to_string())
            .collect();

        let (query, without_query_group) = match QUERY_GROUP.captures(template) {
            Some(caps) => {
                let group = caps.get(0).map_or(0..0, |m| m.range());
                let query = Self::parse_query_group(&caps[1], template)?;
                (query, format!("{}{}", &template[..group.start], &template[group.end..]))
            }
            None => (Vec::new(), template.to_string()),
        };

        tracing::trace!(template, "parsed uri template");

        Ok(UriTemplate {
            original: template.to_string(),
            path_names,
            query,
            without_query_group,
        })
    }

    fn parse_query_group(group: &str, template: &str) -> Result<Vec<QueryPlaceholder>, ExpansionError> {
        let mut placeholders = Vec::new();

        for entry in group.split(',') {
            if entry.is_empty() {
                continue;
            }

            let (name, exploded) = match entry.strip_suffix('*') {
                Some(name) => (name, true),
                None => (entry, false),
            };

            if name.trim() != name {
                return Err(ExpansionError::whitespace_in_query(template));
            }

            placeholders.push(QueryPlaceholder::new(name, exploded));
        }

        Ok(placeholders)
    }
}
