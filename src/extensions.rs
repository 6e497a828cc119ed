use indexmap::IndexMap;
use serde_json::Value;

/// Extension -> caller metadata, in the order the caller listed them.
pub type ExtensionMap = IndexMap<String, Value>;

/// The shapes the `extensions` option accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Extensions {
    /// A single extension, e.g. `".json"`.
    Single(String),
    /// A list; elements that are not strings are ignored.
    List(Vec<Value>),
    /// Keys are the extensions, values are handed back in place of the
    /// matched extension.
    Map(ExtensionMap),
    /// Anything else. Only the bare path is tried.
    Other(Value),
}

impl Extensions {
    /// Builds a [`Extensions::Map`] from `(extension, metadata)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Extensions::Map(
            pairs
                .into_iter()
                .map(|(ext, meta)| (ext.into(), meta.into()))
                .collect(),
        )
    }
}

impl From<&str> for Extensions {
    fn from(value: &str) -> Self {
        Extensions::Single(value.to_string())
    }
}

impl From<String> for Extensions {
    fn from(value: String) -> Self {
        Extensions::Single(value)
    }
}

impl From<Vec<&str>> for Extensions {
    fn from(value: Vec<&str>) -> Self {
        Extensions::List(value.into_iter().map(Value::from).collect())
    }
}

impl From<Vec<String>> for Extensions {
    fn from(value: Vec<String>) -> Self {
        Extensions::List(value.into_iter().map(Value::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Extensions {
    fn from(value: [&str; N]) -> Self {
        Extensions::List(value.into_iter().map(Value::from).collect())
    }
}

impl From<ExtensionMap> for Extensions {
    fn from(value: ExtensionMap) -> Self {
        Extensions::Map(value)
    }
}

impl From<Value> for Extensions {
    fn from(value: Value) -> Self {
        match value {
            Value::String(ext) => Extensions::Single(ext),
            Value::Array(list) => Extensions::List(list),
            Value::Object(map) => Extensions::Map(map.into_iter().collect()),
            other => Extensions::Other(other),
        }
    }
}

/// The ordered candidate list. Never empty: `[""]` probes the bare path.
pub(crate) fn create_extension_array(extensions: Option<&Extensions>) -> Vec<String> {
    let list: Vec<String> = match extensions {
        Some(Extensions::Single(ext)) => return vec![ext.clone()],
        Some(Extensions::List(list)) => list
            .iter()
            .filter_map(|ext| ext.as_str().map(String::from))
            .collect(),
        Some(Extensions::Map(map)) => map.keys().cloned().collect(),
        Some(Extensions::Other(_)) | None => vec![],
    };
    if list.is_empty() {
        vec![String::new()]
    } else {
        list
    }
}

/// Only a map produces metadata; an empty one maps the bare path to `null`.
pub(crate) fn create_extension_map(extensions: Option<&Extensions>) -> Option<ExtensionMap> {
    match extensions {
        Some(Extensions::Map(map)) if map.is_empty() => {
            Some(ExtensionMap::from_iter([(String::new(), Value::Null)]))
        }
        Some(Extensions::Map(map)) => Some(map.clone()),
        _ => None,
    }
}
