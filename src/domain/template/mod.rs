// Template module for RFC 6570-style URI templates
//
// A restricted dialect: `{name}` path placeholders and one trailing
// `{?a,b*}` query group. Templates are parsed once and expanded against
// positional values or named parameters.

mod ast;
mod cache;
mod error;
mod expander;
mod parser;
mod renderer;
mod value;

use once_cell::sync::Lazy;

pub use ast::{QueryPlaceholder, UriTemplate};
pub use cache::TemplateCache;
pub use error::ExpansionError;
pub use expander::{validate, Expander, ParameterSource};
pub use parser::TemplateParser;
pub use renderer::{FormEncoder, ParameterRenderer, PathEncoder, QueryParameter, ValueEncoder};
pub use value::{ParamValue, Parameters};

static EXPANDER: Lazy<Expander> = Lazy::new(Expander::new);

pub fn parse(text: &str) -> Result<UriTemplate, ExpansionError> {
    TemplateParser::parse(text)
}

/// Expand `text` with positional values, path placeholders first.
pub fn expand(text: &str, values: &[ParamValue]) -> Result<String, ExpansionError> {
    let template = EXPANDER.template(text)?;
    EXPANDER.expand_values(&template, values)
}

/// Expand `text` with named parameters, collections rendered comma-joined.
pub fn expand_named(text: &str, parameters: &Parameters) -> Result<String, ExpansionError> {
    expand_named_with(text, parameters, false)
}

pub fn expand_named_with(text: &str, parameters: &Parameters, composite: bool) -> Result<String, ExpansionError> {
    let template = EXPANDER.template(text)?;
    EXPANDER.expand_parameters(&template, parameters, composite)
}
