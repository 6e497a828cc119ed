use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::{
    extensions::{create_extension_array, create_extension_map, ExtensionMap},
    kind::{PathKind, PathRoot, Platform},
    normalize::{join, resolve},
    options::truthy,
    tilde::expand_tilde,
    Callback, Input, RResult,
};

/// Exactly what to look for and where, after defaults and roots have been
/// applied.
#[derive(Debug, Clone)]
pub struct SearchDescriptor {
    /// Relative to `basedir`, without extension.
    pub path: String,
    /// Always absolute.
    pub basedir: PathBuf,
    pub find_up: bool,
    pub callback: Option<Callback>,
    /// Never empty.
    pub ext_arr: Vec<String>,
    pub ext_map: Option<ExtensionMap>,
}

/// Like [`try_expand_path`], but an unreadable working directory is logged
/// and reported as "nothing to search for".
pub fn expand_path(input: impl Into<Input>, defaults: impl Into<Input>) -> Option<SearchDescriptor> {
    match try_expand_path(input, defaults) {
        Ok(descriptor) => descriptor,
        Err(err) => {
            tracing::warn!("can not expand path: {err}");
            None
        }
    }
}

/// Merges `input` over `defaults` and turns the result into a
/// [`SearchDescriptor`].
///
/// `Ok(None)` means the merged `path` is not a string.
pub fn try_expand_path(
    input: impl Into<Input>,
    defaults: impl Into<Input>,
) -> RResult<Option<SearchDescriptor>> {
    let options = input
        .into()
        .into_request()
        .merge(defaults.into().into_defaults());

    let Some(Value::String(path)) = options.path.as_ref() else {
        return Ok(None);
    };
    let file_path = match options.name.as_ref() {
        Some(Value::String(name)) if !name.is_empty() => {
            if path.is_empty() {
                name.clone()
            } else {
                let expanded = expand_tilde(path);
                join(Path::new(&expanded), name).to_string_lossy().into_owned()
            }
        }
        _ => expand_tilde(path),
    };

    let ext_arr = create_extension_array(options.extensions.as_ref());
    let ext_map = create_extension_map(options.extensions.as_ref());

    let cwd = match options.cwd.as_ref() {
        Some(Value::String(cwd)) => cwd.as_str(),
        _ => ".",
    };
    let mut basedir = resolve(&expand_tilde(cwd))?;

    let mut find_up = truthy(options.find_up.as_ref());
    let callback = options.callback;

    let root = PathRoot::parse(&file_path, Platform::current());
    let relative = match root.kind {
        PathKind::AbsolutePosix | PathKind::AbsoluteWin => {
            find_up = false;
            basedir = PathBuf::from(root.root);
            root.strip(&file_path)
        }
        PathKind::DriveRelative => {
            basedir = resolve(root.root)?;
            root.strip(&file_path)
        }
        PathKind::Relative => file_path.as_str(),
    };

    Ok(Some(SearchDescriptor {
        path: relative.to_string(),
        basedir,
        find_up,
        callback,
        ext_arr,
        ext_map,
    }))
}
