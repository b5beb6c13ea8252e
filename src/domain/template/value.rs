// Parameter values supplied for template expansion

use std::collections::{btree_map, BTreeMap, HashMap};
use std::fmt;

/// A single value bound to a placeholder: either a scalar or an ordered
/// collection. Collection elements may be absent; absent elements are
/// skipped when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Scalar(String),
    List(Vec<Option<String>>),
}

impl ParamValue {
    /// Build a collection value from any iterator of displayable items.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        ParamValue::List(items.into_iter().map(|item| Some(item.to_string())).collect())
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, ParamValue::List(_))
    }

    /// Number of elements; a scalar counts as one.
    pub fn len(&self) -> usize {
        match self {
            ParamValue::Scalar(_) => 1,
            ParamValue::List(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Present elements in order. A scalar yields itself.
    pub fn present_values(&self) -> Vec<&str> {
        match self {
            ParamValue::Scalar(value) => vec![value.as_str()],
            ParamValue::List(items) => items.iter().flatten().map(String::as_str).collect(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Scalar(value) => f.write_str(value),
            ParamValue::List(items) => {
                let rendered: Vec<&str> = items
                    .iter()
                    .map(|item| item.as_deref().unwrap_or("null"))
                    .collect();
                write!(f, "[{}]", rendered.join(", "))
            }
        }
    }
}

macro_rules! scalar_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from!(&str, String, &String, char, bool, i32, i64, u8, u16, u32, u64, usize, f32, f64);

macro_rules! list_from {
    ($($ty:ty),*) => {
        $(
            impl From<Vec<$ty>> for ParamValue {
                fn from(items: Vec<$ty>) -> Self {
                    ParamValue::list(items)
                }
            }

            impl From<Vec<Option<$ty>>> for ParamValue {
                fn from(items: Vec<Option<$ty>>) -> Self {
                    ParamValue::List(
                        items
                            .into_iter()
                            .map(|item| item.map(|value| value.to_string()))
                            .collect(),
                    )
                }
            }
        )*
    };
}

list_from!(&str, String, i32, i64, u32, u64, usize, f64);

// Arrays become collections, everything else a scalar in its JSON text form
// (strings unquoted).
impl From<serde_json::Value> for ParamValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Array(items) => {
                ParamValue::List(items.into_iter().map(json_element).collect())
            }
            other => ParamValue::Scalar(json_scalar(other)),
        }
    }
}

fn json_element(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        other => Some(json_scalar(other)),
    }
}

fn json_scalar(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Named parameters for expansion, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    entries: BTreeMap<String, ParamValue>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Option<ParamValue> {
        self.entries.insert(name.into(), value.into())
    }

    /// Append a value under `name`, turning an existing entry into a collection.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        match self.entries.entry(name.into()) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(ParamValue::Scalar(value));
            }
            btree_map::Entry::Occupied(mut slot) => {
                let current = slot.get_mut();
                if let ParamValue::Scalar(first) = current {
                    let first = std::mem::take(first);
                    *current = ParamValue::List(vec![Some(first)]);
                }
                if let ParamValue::List(items) = current {
                    items.push(Some(value));
                }
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + Clone {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Classify the members of a JSON object into scalars and collections.
    /// Members holding `null` are skipped; a non-object yields no parameters.
    pub fn from_json(value: serde_json::Value) -> Self {
        let serde_json::Value::Object(members) = value else {
            return Self::new();
        };
        members
            .into_iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(name, value)| (name, ParamValue::from(value)))
            .collect()
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .entries
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        write!(f, "{{{}}}", rendered.join(", "))
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut parameters = Parameters::new();
        for (name, value) in iter {
            parameters.insert(name, value);
        }
        parameters
    }
}

impl<K: Into<String>, V: Into<ParamValue>> From<HashMap<K, V>> for Parameters {
    fn from(map: HashMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_matches_map_rendering() {
        let params = Parameters::new()
            .with("userId", 15)
            .with("tags", vec!["a", "b"]);
        assert_eq!(params.to_string(), "{tags=[a, b], userId=15}");
    }

    #[test]
    fn test_display_absent_list_element() {
        let value = ParamValue::from(vec![Some("a"), None]);
        assert_eq!(value.to_string(), "[a, null]");
        assert_eq!(value.present_values(), vec!["a"]);
        assert_eq!(value.len(), 2);
    }

    #[test]
    fn test_append_builds_collection() {
        let mut params = Parameters::new();
        params.append("tag", "red");
        assert_eq!(params.get("tag"), Some(&ParamValue::Scalar("red".to_string())));

        params.append("tag", "blue");
        params.append("tag", "green");
        assert_eq!(params.get("tag"), Some(&ParamValue::list(["red", "blue", "green"])));
    }

    #[test]
    fn test_from_json_classifies_values() {
        let params = Parameters::from_json(json!({
            "keyWords": ["active", null, "blue"],
            "limit": 10,
            "name": "bob",
            "skipped": null
        }));

        assert_eq!(params.len(), 3);
        assert_eq!(
            params.get("keyWords"),
            Some(&ParamValue::List(vec![Some("active".to_string()), None, Some("blue".to_string())]))
        );
        assert_eq!(params.get("limit"), Some(&ParamValue::Scalar("10".to_string())));
        assert_eq!(params.get("name"), Some(&ParamValue::Scalar("bob".to_string())));
        assert!(!params.contains("skipped"));
    }

    #[test]
    fn test_from_json_non_object() {
        assert!(Parameters::from_json(json!([1, 2])).is_empty());
    }
}
