use std::path::Path;

use crate::normalize::join;

/// Replaces a leading `~` with the home directory and a leading `~+` with
/// the working directory. Other paths come back untouched.
pub fn expand_tilde(path: &str) -> String {
    let cwd = std::env::current_dir().ok();
    expand_tilde_with(path, dirs::home_dir().as_deref(), cwd.as_deref())
}

pub(crate) fn expand_tilde_with(path: &str, home: Option<&Path>, cwd: Option<&Path>) -> String {
    let Some(rest) = path.strip_prefix('~') else {
        return path.to_string();
    };
    let (base, rest) = match rest.strip_prefix('+') {
        Some(rest) => (cwd, rest),
        None => (home, rest),
    };
    match base {
        Some(base) => join(base, rest).to_string_lossy().into_owned(),
        None => path.to_string(),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn expand(path: &str) -> String {
        expand_tilde_with(path, Some(Path::new("/home/fined")), Some(Path::new("/work")))
    }

    #[test]
    fn expand_home_test() {
        assert_eq!(expand("~"), "/home/fined");
        assert_eq!(expand("~/"), "/home/fined");
        assert_eq!(expand("~/a/b"), "/home/fined/a/b");
        assert_eq!(expand("~/a/../b"), "/home/fined/b");
        assert_eq!(expand("~a"), "/home/fined/a");
    }

    #[test]
    fn expand_cwd_test() {
        assert_eq!(expand("~+"), "/work");
        assert_eq!(expand("~+/a"), "/work/a");
    }

    #[test]
    fn untouched_test() {
        assert_eq!(expand("a/~/b"), "a/~/b");
        assert_eq!(expand("./a/../b"), "./a/../b");
        assert_eq!(expand(""), "");
        assert_eq!(expand_tilde_with("~/a", None, Some(Path::new("/work"))), "~/a");
    }
}
