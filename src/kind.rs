use daachorse::{DoubleArrayAhoCorasick, DoubleArrayAhoCorasickBuilder, MatchKind};
use once_cell::sync::Lazy;

/// Which path grammar to apply when looking for a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Posix,
    Windows,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    fn is_separator(self, c: u8) -> bool {
        match self {
            Platform::Posix => c == b'/',
            Platform::Windows => c == b'/' || c == b'\\',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Starts with a separator: `/etc`, or `\\etc` on windows.
    AbsolutePosix,
    /// Drive letter followed by a separator: `C:\\etc`.
    AbsoluteWin,
    /// Drive letter without a separator: `C:etc`, relative to the drive's cwd.
    DriveRelative,
    Relative,
}

/// The root prefix of a path, borrowed from the parsed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathRoot<'a> {
    pub kind: PathKind,
    pub root: &'a str,
}

static PATTERN_OF_LEN_TWO: [&str; 52] = [
    "a:", "b:", "c:", "d:", "e:", "f:", "g:", "h:", "i:", "j:", "k:", "l:", "m:", "n:", "o:", "p:",
    "q:", "r:", "s:", "t:", "u:", "v:", "w:", "x:", "y:", "z:", "A:", "B:", "C:", "D:", "E:", "F:",
    "G:", "H:", "I:", "J:", "K:", "L:", "M:", "N:", "O:", "P:", "Q:", "R:", "S:", "T:", "U:", "V:",
    "W:", "X:", "Y:", "Z:",
];
static PATTERN_OF_LEN_REST: [&str; 104] = [
    "a:\\", "b:\\", "c:\\", "d:\\", "e:\\", "f:\\", "g:\\", "h:\\", "i:\\", "j:\\", "k:\\", "l:\\",
    "m:\\", "n:\\", "o:\\", "p:\\", "q:\\", "r:\\", "s:\\", "t:\\", "u:\\", "v:\\", "w:\\", "x:\\",
    "y:\\", "z:\\", "A:\\", "B:\\", "C:\\", "D:\\", "E:\\", "F:\\", "G:\\", "H:\\", "I:\\", "J:\\",
    "K:\\", "L:\\", "M:\\", "N:\\", "O:\\", "P:\\", "Q:\\", "R:\\", "S:\\", "T:\\", "U:\\", "V:\\",
    "W:\\", "X:\\", "Y:\\", "Z:\\", "a:/", "b:/", "c:/", "d:/", "e:/", "f:/", "g:/", "h:/", "i:/",
    "j:/", "k:/", "l:/", "m:/", "n:/", "o:/", "p:/", "q:/", "r:/", "s:/", "t:/", "u:/", "v:/",
    "w:/", "x:/", "y:/", "z:/", "A:/", "B:/", "C:/", "D:/", "E:/", "F:/", "G:/", "H:/", "I:/",
    "J:/", "K:/", "L:/", "M:/", "N:/", "O:/", "P:/", "Q:/", "R:/", "S:/", "T:/", "U:/", "V:/",
    "W:/", "X:/", "Y:/", "Z:/",
];
/// `None` only if the automaton could not be built, in which case drive
/// roots with a separator are not recognized.
static PMA: Lazy<Option<DoubleArrayAhoCorasick<usize>>> = Lazy::new(|| {
    match DoubleArrayAhoCorasickBuilder::new()
        .match_kind(MatchKind::LeftmostLongest)
        .build(PATTERN_OF_LEN_REST)
    {
        Ok(pma) => Some(pma),
        Err(err) => {
            tracing::warn!("can not build drive root matcher: {err}");
            None
        }
    }
});

impl<'a> PathRoot<'a> {
    pub fn parse(path: &'a str, platform: Platform) -> Self {
        let bytes = path.as_bytes();
        if bytes.first().map_or(false, |c| platform.is_separator(*c)) {
            return Self::new(PathKind::AbsolutePosix, &path[..1]);
        }
        if platform == Platform::Posix {
            return Self::new(PathKind::Relative, "");
        }
        if let Some(pma) = PMA.as_ref() {
            if let Some(mat) = pma.leftmost_find_iter(path).next() {
                let match_pattern_len = PATTERN_OF_LEN_REST[mat.value()].len();
                if mat.start() == 0 && mat.end() == match_pattern_len {
                    return Self::new(PathKind::AbsoluteWin, &path[..match_pattern_len]);
                }
            }
        }
        match path.get(..2) {
            Some(prefix) if PATTERN_OF_LEN_TWO.contains(&prefix) => {
                Self::new(PathKind::DriveRelative, prefix)
            }
            _ => Self::new(PathKind::Relative, ""),
        }
    }

    fn new(kind: PathKind, root: &'a str) -> Self {
        Self { kind, root }
    }

    /// The part of the path after its root.
    pub fn strip(&self, path: &'a str) -> &'a str {
        &path[self.root.len()..]
    }
}

#[test]
fn posix_root_test() {
    let root = PathRoot::parse("/etc/fined", Platform::Posix);
    assert_eq!(root.kind, PathKind::AbsolutePosix);
    assert_eq!(root.root, "/");
    assert_eq!(root.strip("/etc/fined"), "etc/fined");

    assert_eq!(
        PathRoot::parse("etc/fined", Platform::Posix).kind,
        PathKind::Relative
    );
    // drive letters mean nothing to posix
    assert_eq!(
        PathRoot::parse("C:\\fined", Platform::Posix).kind,
        PathKind::Relative
    );
    assert_eq!(PathRoot::parse("", Platform::Posix).root, "");
}

#[test]
fn windows_root_test() {
    macro_rules! should_parsed {
        ($path: expr; $kind: expr, $root: expr) => {
            let root = PathRoot::parse($path, Platform::Windows);
            assert_eq!((root.kind, root.root), ($kind, $root));
        };
    }

    should_parsed!("C:\\fined\\a"; PathKind::AbsoluteWin, "C:\\");
    should_parsed!("d:/fined"; PathKind::AbsoluteWin, "d:/");
    should_parsed!("C:fined"; PathKind::DriveRelative, "C:");
    should_parsed!("C:"; PathKind::DriveRelative, "C:");
    should_parsed!("\\fined"; PathKind::AbsolutePosix, "\\");
    should_parsed!("/fined"; PathKind::AbsolutePosix, "/");
    should_parsed!("fined\\C:\\"; PathKind::Relative, "");
    should_parsed!("1:\\fined"; PathKind::Relative, "");
}

#[test]
fn drive_root_matcher_builds_test() {
    assert!(PMA.is_some());
}
