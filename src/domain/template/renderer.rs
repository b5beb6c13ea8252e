// Query string rendering and value encoding

use url::form_urlencoded;

use super::value::{ParamValue, Parameters};

/// Percent-encodes a single substituted value.
pub trait ValueEncoder: Send + Sync {
    fn encode(&self, value: &str) -> String;
}

/// RFC 3986 encoding for path substitution: everything but unreserved
/// characters is escaped, spaces become `%20`.
pub struct PathEncoder;

impl ValueEncoder for PathEncoder {
    fn encode(&self, value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }
}

/// Form encoding for query names and values, spaces become `+`.
pub struct FormEncoder;

impl ValueEncoder for FormEncoder {
    fn encode(&self, value: &str) -> String {
        form_urlencoded::byte_serialize(value.as_bytes()).collect()
    }
}

/// One entry of a query string about to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameter {
    pub name: String,
    pub value: ParamValue,
    /// Collections render as repeated `name=value` pairs when set,
    /// otherwise as one comma-joined pair.
    pub rendered_as_composite: bool,
}

impl QueryParameter {
    pub fn single(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: ParamValue::Scalar(value.into()),
            rendered_as_composite: false,
        }
    }

    pub fn multiple(name: impl Into<String>, values: Vec<Option<String>>, composite: bool) -> Self {
        Self {
            name: name.into(),
            value: ParamValue::List(values),
            rendered_as_composite: composite,
        }
    }

    pub fn from_value(name: impl Into<String>, value: ParamValue, composite: bool) -> Self {
        Self {
            name: name.into(),
            value,
            rendered_as_composite: composite,
        }
    }
}

/// Renders query parameters into a `?a=1&b=2` string.
pub struct ParameterRenderer {
    encoder: FormEncoder,
}

impl ParameterRenderer {
    pub fn new() -> Self {
        Self { encoder: FormEncoder }
    }

    /// Empty input renders as an empty string.
    pub fn render(&self, parameters: &[QueryParameter]) -> String {
        if parameters.is_empty() {
            return String::new();
        }

        let fragments: Vec<String> = parameters
            .iter()
            .flat_map(|parameter| self.fragments(parameter))
            .collect();
        format!("?{}", fragments.join("&"))
    }

    /// Render every entry of `parameters`, applying `composite` to each
    /// collection-valued entry.
    pub fn render_map(&self, parameters: &Parameters, composite: bool) -> String {
        let parameters: Vec<QueryParameter> = parameters
            .iter()
            .map(|(name, value)| QueryParameter::from_value(name, value.clone(), composite))
            .collect();
        self.render(&parameters)
    }

    fn fragments(&self, parameter: &QueryParameter) -> Vec<String> {
        let name = self.encoder.encode(&parameter.name);

        match &parameter.value {
            ParamValue::Scalar(value) => {
                vec![format!("{}={}", name, self.encoder.encode(value))]
            }
            ParamValue::List(items) if parameter.rendered_as_composite => items
                .iter()
                .flatten()
                .map(|item| format!("{}={}", name, self.encoder.encode(item)))
                .collect(),
            ParamValue::List(items) => {
                let joined: Vec<String> = items
                    .iter()
                    .flatten()
                    .map(|item| self.encoder.encode(item))
                    .collect();
                vec![format!("{}={}", name, joined.join(","))]
            }
        }
    }
}

impl Default for ParameterRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_encoder() {
        let encoder = PathEncoder;
        assert_eq!(encoder.encode("this has spaces"), "this%20has%20spaces");
        assert_eq!(encoder.encode("a{b}/c"), "a%7Bb%7D%2Fc");
    }

    #[test]
    fn test_form_encoder() {
        let encoder = FormEncoder;
        assert_eq!(encoder.encode("this has spaces"), "this+has+spaces");
        assert_eq!(encoder.encode("a&b=c"), "a%26b%3Dc");
    }

    #[test]
    fn test_render_empty() {
        let renderer = ParameterRenderer::new();
        assert_eq!(renderer.render(&[]), "");
        assert_eq!(renderer.render_map(&Parameters::new(), true), "");
    }

    #[test]
    fn test_render_scalars() {
        let renderer = ParameterRenderer::new();
        let rendered = renderer.render(&[
            QueryParameter::single("limit", "10"),
            QueryParameter::single("q", "rust templates"),
        ]);
        assert_eq!(rendered, "?limit=10&q=rust+templates");
    }

    #[test]
    fn test_render_composite_skips_absent() {
        let renderer = ParameterRenderer::new();
        let rendered = renderer.render(&[QueryParameter::multiple(
            "val2",
            vec![Some("456".to_string()), None, Some("789".to_string())],
            true,
        )]);
        assert_eq!(rendered, "?val2=456&val2=789");
    }

    #[test]
    fn test_render_non_composite_joins() {
        let renderer = ParameterRenderer::new();
        let rendered = renderer.render(&[QueryParameter::multiple(
            "keyWords",
            vec![None, Some("active".to_string()), None, Some("blue sky".to_string()), None],
            false,
        )]);
        assert_eq!(rendered, "?keyWords=active,blue+sky");
    }

    #[test]
    fn test_render_map_applies_flag_uniformly() {
        let renderer = ParameterRenderer::new();
        let params = Parameters::new()
            .with("val1", 123)
            .with("val2", vec![456, 789])
            .with("val3", "hello")
            .with("val4", vec!["x", "y"]);

        assert_eq!(
            renderer.render_map(&params, true),
            "?val1=123&val2=456&val2=789&val3=hello&val4=x&val4=y"
        );
        assert_eq!(
            renderer.render_map(&params, false),
            "?val1=123&val2=456,789&val3=hello&val4=x,y"
        );
    }

    #[test]
    fn test_render_encodes_names() {
        let renderer = ParameterRenderer::new();
        assert_eq!(renderer.render(&[QueryParameter::single("a b", "c")]), "?a+b=c");
    }
}
