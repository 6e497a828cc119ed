use std::{fmt::Debug, path::Path};

/// The existence check the finder probes candidates with.
pub trait FileSystem: Send + Sync + Debug {
    /// Whether `path` names something that can be stat'ed. Any failure,
    /// including permission errors and dangling symlinks, reads as `false`.
    fn exists(&self, path: &Path) -> bool;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        match std::fs::metadata(path) {
            Ok(_) => true,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::trace!("stat {} failed: {err}", path.display());
                }
                false
            }
        }
    }
}
