// Errors raised while parsing or expanding URI templates

use std::fmt;

/// Validation failure of a template or of the parameters supplied for it.
///
/// Every variant carries the complete, human-readable message. Callers and
/// tests rely on the exact wording, so messages are built only through the
/// constructors below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpansionError {
    InvalidTemplate(String),
    MissingParameters(String),
    TooManyParameters(String),
    TooFewParameters(String),
    UnsupportedExplode(String),
    UnknownParameters(String),
    ExplodeRequired(String),
}

impl ExpansionError {
    pub(crate) fn whitespace_in_query(template: &str) -> Self {
        ExpansionError::InvalidTemplate(format!(
            "Leading or trailing whitespace in any query parameter is not allowed (also before or after a comma). Template was '{}'",
            template
        ))
    }

    pub(crate) fn no_parameters(template: &str) -> Self {
        ExpansionError::MissingParameters(format!(
            "No parameters provided for URI expansion, but mandatory path parameters were detected. Template was '{}'",
            template
        ))
    }

    pub(crate) fn missing_path_parameters(template: &str, parameters: impl fmt::Display) -> Self {
        ExpansionError::MissingParameters(format!(
            "Not all mandatory path parameters were provided for URI expansion. Template was '{}', parameters were {}",
            template, parameters
        ))
    }

    pub(crate) fn exploded_with_values(template: &str) -> Self {
        ExpansionError::UnsupportedExplode(format!(
            "Exploded query parameters cannot be expanded using only values. Use expansion method that assigns values to dedicated parameters. Template was '{}'",
            template
        ))
    }

    pub(crate) fn too_many(template: &str, values: &str) -> Self {
        ExpansionError::TooManyParameters(format!(
            "Too many parameters provided for URI expansion. Template was '{}', parameters were {}",
            template, values
        ))
    }

    pub(crate) fn too_few(template: &str, values: &str) -> Self {
        ExpansionError::TooFewParameters(format!(
            "Not enough parameters provided for URI expansion, mandatory path parameters are missing. Template was '{}', parameters were {}",
            template, values
        ))
    }

    pub(crate) fn unknown(template: &str, parameters: impl fmt::Display) -> Self {
        ExpansionError::UnknownParameters(format!(
            "Unknown parameters provided for URI expansion. Template was '{}', parameters were {}",
            template, parameters
        ))
    }

    pub(crate) fn explode_required(template: &str, parameters: impl fmt::Display) -> Self {
        ExpansionError::ExplodeRequired(format!(
            "Detected a collection as value for a parameter, but parameter was not exploded in template (asterisk after parameter name e.g. {{?var*}}). Template was '{}', parameters were {}",
            template, parameters
        ))
    }

    /// Stable snake-case name of the failure category.
    pub fn kind(&self) -> &'static str {
        match self {
            ExpansionError::InvalidTemplate(_) => "invalid_template",
            ExpansionError::MissingParameters(_) => "missing_parameters",
            ExpansionError::TooManyParameters(_) => "too_many_parameters",
            ExpansionError::TooFewParameters(_) => "too_few_parameters",
            ExpansionError::UnsupportedExplode(_) => "unsupported_explode",
            ExpansionError::UnknownParameters(_) => "unknown_parameters",
            ExpansionError::ExplodeRequired(_) => "explode_required",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ExpansionError::InvalidTemplate(msg)
            | ExpansionError::MissingParameters(msg)
            | ExpansionError::TooManyParameters(msg)
            | ExpansionError::TooFewParameters(msg)
            | ExpansionError::UnsupportedExplode(msg)
            | ExpansionError::UnknownParameters(msg)
            | ExpansionError::ExplodeRequired(msg) => msg,
        }
    }
}

impl fmt::Display for ExpansionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ExpansionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explode_message_keeps_literal_braces() {
        let err = ExpansionError::explode_required("/users{?tags}", "{tags=[a, b]}");
        assert_eq!(
            err.to_string(),
            "Detected a collection as value for a parameter, but parameter was not exploded in template (asterisk after parameter name e.g. {?var*}). Template was '/users{?tags}', parameters were {tags=[a, b]}"
        );
        assert_eq!(err.kind(), "explode_required");
    }

    #[test]
    fn test_display_is_message() {
        let err = ExpansionError::no_parameters("/users/{id}");
        assert_eq!(err.to_string(), err.message());
        assert!(matches!(err, ExpansionError::MissingParameters(_)));
    }
}
