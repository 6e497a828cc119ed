//! # fined
//!
//! Find a file from a path, an optional name and a list of candidate
//! extensions, optionally searching upward through the parent directories.
//!
//! ## How to use?
//!
//! ```rust
//! // |-- project
//! // |---- .apprc.json
//! // |---- src
//! // |------ nested
//!
//! use fined::{Extensions, RawOptions};
//!
//! let found = fined::find(
//!     RawOptions::default()
//!         .with_path(".apprc")
//!         .with_cwd("project/src/nested")
//!         .with_find_up(true),
//!     RawOptions::default().with_extensions(Extensions::from_pairs([
//!         (".json", "json"),
//!         (".yml", "yaml"),
//!     ])),
//! );
//! // -> Some(Found {
//! //      path: PathBuf::from("<cwd>/project/.apprc.json"),
//! //      extension: Extension::Mapped { key: ".json", value: "json" },
//! //    })
//! # let _ = found;
//!
//! // A bare string is shorthand for `{ path }`.
//! let found = fined::find("Cargo", RawOptions::default().with_extensions(".toml"));
//! # let _ = found;
//! ```
//!

mod context;
mod descriptor;
mod error;
mod extensions;
mod fs;
mod info;
mod kind;
pub mod log;
mod normalize;
mod options;
mod resolve;
mod tilde;

pub use descriptor::{expand_path, try_expand_path, SearchDescriptor};
pub use error::*;
pub use extensions::{ExtensionMap, Extensions};
pub use fs::{FileSystem, OsFileSystem};
pub use info::{Extension, Found};
pub use kind::{PathKind, PathRoot, Platform};
pub use options::{Callback, Input, RawOptions};
pub use tilde::expand_tilde;

pub type RResult<T> = Result<T, Error>;

/// Looks files up through a [`FileSystem`].
#[derive(Debug)]
pub struct Finder {
    pub(crate) fs: Box<dyn FileSystem>,
}

impl Default for Finder {
    fn default() -> Self {
        Self::new()
    }
}

impl Finder {
    pub fn new() -> Self {
        Self::with_fs(OsFileSystem)
    }

    pub fn with_fs(fs: impl FileSystem + 'static) -> Self {
        Self { fs: Box::new(fs) }
    }
}

/// [`Finder::find`] on the real filesystem.
pub fn find(input: impl Into<Input>, defaults: impl Into<Input>) -> Option<Found> {
    Finder::new().find(input, defaults)
}

/// [`Finder::try_find`] on the real filesystem.
pub fn try_find(input: impl Into<Input>, defaults: impl Into<Input>) -> RResult<Option<Found>> {
    Finder::new().try_find(input, defaults)
}

/// [`find`] for requests that only exist as JSON, e.g. read from a
/// command line. Callbacks can not be expressed this way.
pub fn find_value(input: &serde_json::Value, defaults: &serde_json::Value) -> Option<Found> {
    find(input, defaults)
}

#[cfg(debug_assertions)]
pub mod test_helper {
    pub fn p(paths: Vec<&str>) -> std::path::PathBuf {
        paths.iter().fold(
            std::env::current_dir()
                .unwrap()
                .join("tests")
                .join("fixtures"),
            |acc, path| acc.join(path),
        )
    }
}
