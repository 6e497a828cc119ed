use std::{
    ffi::OsString,
    io,
    path::{Component, Path, PathBuf},
};

use path_absolutize::Absolutize;

/// Lexically folds `.` and `..` without touching the filesystem.
///
/// A `..` that climbs past the start of a relative path is kept, and one
/// that climbs past a root is dropped, the same way `path.join` treats them.
pub fn normalize_path_without_link(path: &Path) -> PathBuf {
    let normalized = path
        .components()
        .fold(PathBuf::new(), |mut acc, path_component| {
            match path_component {
                Component::Prefix(prefix) => acc.push(prefix.as_os_str()),
                Component::Normal(name) => acc.push(name),
                Component::RootDir => acc.push(Component::RootDir.as_os_str()),
                Component::CurDir => {}
                Component::ParentDir => match acc.components().next_back() {
                    Some(Component::Normal(_)) => {
                        acc.pop();
                    }
                    Some(Component::RootDir | Component::Prefix(_)) => {}
                    _ => acc.push(".."),
                },
            }
            acc
        });
    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

/// Joins `rest` onto `base` and normalizes the result.
///
/// Leading separators of `rest` are ignored so that joining never
/// discards `base`.
pub fn join(base: &Path, rest: &str) -> PathBuf {
    let rest = rest.trim_start_matches(std::path::is_separator);
    normalize_path_without_link(&base.join(rest))
}

/// Resolves `path` against the process working directory. An empty path
/// is the working directory itself.
pub fn resolve(path: &str) -> io::Result<PathBuf> {
    let path = if path.is_empty() { "." } else { path };
    let absolute = Path::new(path).absolutize()?;
    Ok(dunce::simplified(&absolute).to_path_buf())
}

/// The parent directory, or `dir` itself once the root is reached.
pub fn dirname(dir: &Path) -> PathBuf {
    dir.parent()
        .map_or_else(|| dir.to_path_buf(), Path::to_path_buf)
}

/// Appends `ext` to the last component verbatim; `ext` is not required to
/// start with a dot.
pub fn append_ext_for_path(path: &Path, ext: &str) -> PathBuf {
    let mut buf = OsString::from(path.as_os_str());
    buf.push(ext);
    PathBuf::from(buf)
}
