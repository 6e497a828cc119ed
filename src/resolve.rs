use std::path::Path;

use crate::{
    context::Depth,
    descriptor::{try_expand_path, SearchDescriptor},
    log::{color, depth},
    normalize::{append_ext_for_path, dirname, join},
    Finder, Found, Input, RResult,
};

impl Finder {
    /// Looks `input` up, with `defaults` filling whatever it leaves out.
    ///
    /// Every failure, including an unreadable working directory, is `None`.
    pub fn find(&self, input: impl Into<Input>, defaults: impl Into<Input>) -> Option<Found> {
        match self.try_find(input, defaults) {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!("find failed: {err}");
                None
            }
        }
    }

    /// Like [`Finder::find`], but reports a working directory that can not
    /// be read instead of swallowing it.
    pub fn try_find(
        &self,
        input: impl Into<Input>,
        defaults: impl Into<Input>,
    ) -> RResult<Option<Found>> {
        let descriptor = try_expand_path(input, defaults)?;
        Ok(self.find_with_descriptor(descriptor.as_ref()))
    }

    /// Probes the filesystem for `descriptor`.
    ///
    /// Without `find_up` only `basedir` is scanned. With it, every match is
    /// offered to the callback; while the callback asks for more, the walk
    /// restarts one directory above the previous start and the match found
    /// last is the one returned once nothing more turns up.
    #[tracing::instrument(skip(self))]
    pub fn find_with_descriptor(&self, descriptor: Option<&SearchDescriptor>) -> Option<Found> {
        let descriptor = descriptor?;
        let mut basedir = descriptor.basedir.clone();
        let mut last = None;
        let mut level = Depth::new();

        loop {
            let found = if descriptor.find_up {
                self.find_up_file(&basedir, &descriptor.path, &descriptor.ext_arr)
            } else {
                self.find_file(&basedir, &descriptor.path, &descriptor.ext_arr)
            };

            let Some(mut found) = found else {
                tracing::debug!("Nothing more above {}({})", basedir.display(), depth(&level));
                return last;
            };

            if let Some(ext_map) = &descriptor.ext_map {
                found = found.with_mapped_extension(ext_map);
            }

            let keep_walking = descriptor.find_up
                && descriptor
                    .callback
                    .as_ref()
                    .map_or(false, |callback| callback.call(&found));
            if !keep_walking {
                return Some(found);
            }

            let parent = dirname(&basedir);
            if parent == basedir {
                // already at the root, nothing is left to climb
                return Some(found);
            }
            tracing::debug!(
                "Keep walking from {} after {}({})",
                color::blue(&parent.display()),
                color::green(&found.path.display()),
                depth(&level)
            );
            basedir = parent;
            last = Some(found);
            level.increase();
        }
    }

    /// Tries `relpath` + each extension under `basedir`, in order. The first
    /// one that exists wins.
    pub fn find_file(&self, basedir: &Path, relpath: &str, ext_arr: &[String]) -> Option<Found> {
        let no_ext_path = join(basedir, relpath);
        for extension in ext_arr {
            let path = append_ext_for_path(&no_ext_path, extension);
            if self.fs.exists(&path) {
                tracing::debug!("Found {}", color::green(&path.display()));
                return Some(Found::from(path, extension));
            }
            tracing::trace!("Missing {}", color::blue(&path.display()));
        }
        None
    }

    /// [`Finder::find_file`] in `basedir` and then in each of its ancestors,
    /// up to and including the root.
    pub fn find_up_file(&self, basedir: &Path, relpath: &str, ext_arr: &[String]) -> Option<Found> {
        let mut dir = basedir.to_path_buf();
        loop {
            if let Some(found) = self.find_file(&dir, relpath, ext_arr) {
                return Some(found);
            }
            let parent = dirname(&dir);
            if parent == dir {
                return None;
            }
            dir = parent;
        }
    }
}
