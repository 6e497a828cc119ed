use std::path::PathBuf;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::extensions::ExtensionMap;

/// An existing file and the extension it was found with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Found {
    pub path: PathBuf,
    pub extension: Extension,
}

/// The matched extension, or the caller metadata it maps to.
#[derive(Debug, Clone, PartialEq)]
pub enum Extension {
    Raw(String),
    Mapped { key: String, value: Value },
}

impl Extension {
    /// The extension string that matched on disk.
    pub fn key(&self) -> &str {
        match self {
            Extension::Raw(key) | Extension::Mapped { key, .. } => key,
        }
    }

    /// Caller metadata, when the extensions were given as a map.
    pub fn metadata(&self) -> Option<&Value> {
        match self {
            Extension::Raw(_) => None,
            Extension::Mapped { value, .. } => Some(value),
        }
    }
}

impl Serialize for Extension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Extension::Raw(key) => serializer.serialize_str(key),
            Extension::Mapped { value, .. } => value.serialize(serializer),
        }
    }
}

impl Found {
    #[must_use]
    pub fn from(path: PathBuf, extension: &str) -> Self {
        Self {
            path,
            extension: Extension::Raw(extension.to_string()),
        }
    }

    /// Swaps the raw extension for its metadata in `ext_map`; a key missing
    /// from the map maps to `null`.
    #[must_use]
    pub fn with_mapped_extension(self, ext_map: &ExtensionMap) -> Self {
        let key = self.extension.key().to_string();
        let value = ext_map.get(&key).cloned().unwrap_or(Value::Null);
        Self {
            extension: Extension::Mapped { key, value },
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mapped_extension_test() {
        let ext_map = ExtensionMap::from_iter([(String::from(".yml"), json!("yaml"))]);
        let found = Found::from(PathBuf::from("/a/b.yml"), ".yml").with_mapped_extension(&ext_map);
        assert_eq!(found.extension.key(), ".yml");
        assert_eq!(found.extension.metadata(), Some(&json!("yaml")));

        let found = Found::from(PathBuf::from("/a/b"), "").with_mapped_extension(&ext_map);
        assert_eq!(found.extension.metadata(), Some(&Value::Null));
    }

    #[cfg(unix)]
    #[test]
    fn serialize_test() {
        let found = Found::from(PathBuf::from("/a/b.json"), ".json");
        assert_eq!(
            serde_json::to_value(&found).unwrap(),
            json!({ "path": "/a/b.json", "extension": ".json" })
        );

        let ext_map = ExtensionMap::from_iter([(String::from(".json"), json!({ "loader": "json" }))]);
        let found = found.with_mapped_extension(&ext_map);
        assert_eq!(
            serde_json::to_value(&found).unwrap(),
            json!({ "path": "/a/b.json", "extension": { "loader": "json" } })
        );
    }
}
