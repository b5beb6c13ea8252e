// Parsed model of a URI template

use std::fmt;
use std::str::FromStr;

use super::error::ExpansionError;
use super::parser::TemplateParser;

/// A parsed URI template. Immutable once built; construct it through
/// [`TemplateParser::parse`] or `str::parse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriTemplate {
    pub(super) original: String,
    pub(super) path_names: Vec<String>,
    pub(super) query: Vec<QueryPlaceholder>,
    pub(super) without_query_group: String,
}

/// A name declared in the trailing `{?...}` group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlaceholder {
    pub name: String,
    /// Declared with a trailing `*`, may receive a collection.
    pub exploded: bool,
}

impl QueryPlaceholder {
    pub fn new(name: impl Into<String>, exploded: bool) -> Self {
        Self {
            name: name.into(),
            exploded,
        }
    }
}

impl UriTemplate {
    /// The template exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Path placeholder names in order of appearance, repeats included.
    pub fn path_placeholder_names(&self) -> &[String] {
        &self.path_names
    }

    pub fn query_placeholders(&self) -> &[QueryPlaceholder] {
        &self.query
    }

    /// The template with its `{?...}` group removed.
    pub fn text_without_query_group(&self) -> &str {
        &self.without_query_group
    }

    pub fn placeholder_count(&self) -> usize {
        self.path_names.len() + self.query.len()
    }

    pub fn is_templated(&self) -> bool {
        self.placeholder_count() > 0
    }

    /// No path placeholders, but at least one query placeholder.
    pub fn is_query_only(&self) -> bool {
        self.path_names.is_empty() && !self.query.is_empty()
    }

    pub fn has_exploded_query(&self) -> bool {
        self.query.iter().any(|placeholder| placeholder.exploded)
    }

    pub fn is_exploded(&self, name: &str) -> bool {
        self.query
            .iter()
            .any(|placeholder| placeholder.exploded && placeholder.name == name)
    }

    pub fn is_path_name(&self, name: &str) -> bool {
        self.path_names.iter().any(|path_name| path_name == name)
    }

    pub fn is_query_name(&self, name: &str) -> bool {
        self.query.iter().any(|placeholder| placeholder.name == name)
    }

    /// Whether `name` is declared as a path or query placeholder.
    pub fn declares(&self, name: &str) -> bool {
        self.is_path_name(name) || self.is_query_name(name)
    }

    pub fn declares_all<'a>(&self, mut names: impl Iterator<Item = &'a str>) -> bool {
        names.all(|name| self.declares(name))
    }

    /// Whether every declared path name occurs in `names`.
    pub fn covers_path<'a>(&self, names: impl Iterator<Item = &'a str> + Clone) -> bool {
        self.path_names
            .iter()
            .all(|path_name| names.clone().any(|name| name == path_name))
    }
}

impl fmt::Display for UriTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl FromStr for UriTemplate {
    type Err = ExpansionError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        TemplateParser::parse(text)
    }
}

impl TryFrom<&str> for UriTemplate {
    type Error = ExpansionError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        TemplateParser::parse(text)
    }
}
