use std::{fmt, path::Path, sync::Arc};

use serde_json::Value;

use crate::{Extensions, Found, RResult};

/// Decides whether an upward walk keeps climbing after a match.
///
/// Returning `true` means "look further up even though something was found
/// here".
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn(&Found) -> bool + Send + Sync>);

impl Callback {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Found) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, found: &Found) -> bool {
        (self.0)(found)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}

/// A request as the caller wrote it. Every field is optional and loosely
/// typed; `None` and JSON `null` both count as "not provided".
#[derive(Debug, Clone, Default)]
pub struct RawOptions {
    /// Must end up a string, otherwise there is nothing to search for.
    pub path: Option<Value>,
    /// Joined onto `path` when it is a non-empty string.
    pub name: Option<Value>,
    /// Directory to search from. Default is `"."`.
    pub cwd: Option<Value>,
    /// Candidate extensions. Default is the bare path only.
    pub extensions: Option<Extensions>,
    /// Coerced by truthiness. Default is `false`.
    pub find_up: Option<Value>,
    pub callback: Option<Callback>,
}

impl RawOptions {
    #[must_use]
    pub fn with_path(self, path: impl Into<String>) -> Self {
        Self {
            path: Some(Value::String(path.into())),
            ..self
        }
    }

    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(Value::String(name.into())),
            ..self
        }
    }

    #[must_use]
    pub fn with_cwd(self, cwd: impl AsRef<Path>) -> Self {
        let cwd = cwd.as_ref().to_string_lossy().into_owned();
        Self {
            cwd: Some(Value::String(cwd)),
            ..self
        }
    }

    #[must_use]
    pub fn with_extensions(self, extensions: impl Into<Extensions>) -> Self {
        Self {
            extensions: Some(extensions.into()),
            ..self
        }
    }

    #[must_use]
    pub fn with_find_up(self, find_up: bool) -> Self {
        Self {
            find_up: Some(Value::Bool(find_up)),
            ..self
        }
    }

    #[must_use]
    pub fn with_callback<F>(self, callback: F) -> Self
    where
        F: Fn(&Found) -> bool + Send + Sync + 'static,
    {
        Self {
            callback: Some(Callback::new(callback)),
            ..self
        }
    }

    /// Reads the known keys of a JSON object. `findUp` is accepted next to
    /// `find_up`; unknown keys are ignored.
    pub fn from_map(map: &serde_json::Map<String, Value>) -> Self {
        let get = |key: &str| map.get(key).filter(|value| !value.is_null()).cloned();
        Self {
            path: get("path"),
            name: get("name"),
            cwd: get("cwd"),
            extensions: get("extensions").map(Extensions::from),
            find_up: get("findUp").or_else(|| get("find_up")),
            callback: None,
        }
    }

    /// Field by field, `self` wins over `defaults` whenever it provides a
    /// non-null value.
    #[must_use]
    pub fn merge(self, defaults: RawOptions) -> Self {
        fn pick(value: Option<Value>, default: Option<Value>) -> Option<Value> {
            value
                .filter(|value| !value.is_null())
                .or_else(|| default.filter(|value| !value.is_null()))
        }
        fn pick_extensions(
            value: Option<Extensions>,
            default: Option<Extensions>,
        ) -> Option<Extensions> {
            let provided = |ext: &Extensions| !matches!(ext, Extensions::Other(Value::Null));
            value.filter(provided).or_else(|| default.filter(provided))
        }

        Self {
            path: pick(self.path, defaults.path),
            name: pick(self.name, defaults.name),
            cwd: pick(self.cwd, defaults.cwd),
            extensions: pick_extensions(self.extensions, defaults.extensions),
            find_up: pick(self.find_up, defaults.find_up),
            callback: self.callback.or(defaults.callback),
        }
    }
}

/// The input shapes `find` accepts.
#[derive(Debug, Clone, Default)]
pub enum Input {
    /// Shorthand for `RawOptions { path, .. }`.
    Path(String),
    Options(RawOptions),
    /// Neither a string nor an options object.
    #[default]
    Empty,
}

impl Input {
    /// Strings become [`Input::Path`], objects [`Input::Options`], and
    /// everything else [`Input::Empty`].
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(path) => Input::Path(path.clone()),
            Value::Object(map) => Input::Options(RawOptions::from_map(map)),
            _ => Input::Empty,
        }
    }

    pub fn from_json_str(json: &str) -> RResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    /// The options of a lookup request.
    pub(crate) fn into_request(self) -> RawOptions {
        match self {
            Input::Path(path) => RawOptions::default().with_path(path),
            Input::Options(options) => options,
            Input::Empty => RawOptions::default(),
        }
    }

    /// The options of a defaults object; a bare string is not a defaults
    /// object and is ignored.
    pub(crate) fn into_defaults(self) -> RawOptions {
        match self {
            Input::Options(options) => options,
            Input::Path(_) | Input::Empty => RawOptions::default(),
        }
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Path(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Path(value)
    }
}

impl From<&String> for Input {
    fn from(value: &String) -> Self {
        Input::Path(value.clone())
    }
}

impl From<&Path> for Input {
    fn from(value: &Path) -> Self {
        Input::Path(value.to_string_lossy().into_owned())
    }
}

impl From<RawOptions> for Input {
    fn from(value: RawOptions) -> Self {
        Input::Options(value)
    }
}

impl From<()> for Input {
    fn from(_: ()) -> Self {
        Input::Empty
    }
}

impl<T: Into<Input>> From<Option<T>> for Input {
    fn from(value: Option<T>) -> Self {
        value.map_or(Input::Empty, Into::into)
    }
}

impl From<&Value> for Input {
    fn from(value: &Value) -> Self {
        Input::from_value(value)
    }
}

impl From<Value> for Input {
    fn from(value: Value) -> Self {
        Input::from_value(&value)
    }
}

/// Loose truthiness of a flag: `null`, `false`, zero, `NaN` and `""` are false.
pub(crate) fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().map_or(true, |n| n != 0.0 && !n.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}
