//! Path-string helpers
//!
//! Source roots declared in the manifest are compared against fragments
//! computed from folder paths, all as strings. These helpers keep that
//! comparison purely lexical: separators are unified to `/` and
//! normalization never touches the filesystem.

/// Replace backslashes with forward slashes.
pub fn unify_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Strip leading and trailing separators of either style.
pub fn trim_separators(path: &str) -> &str {
    path.trim_matches(|c| c == '/' || c == '\\')
}

/// Lexically normalize a path string.
///
/// Unifies separators, drops empty and `.` segments, resolves `..`
/// against earlier segments, and keeps leading `..`s that cannot be
/// resolved. Empty input normalizes to `.`.
pub fn normalize(path: &str) -> String {
    let unified = unify_separators(path);
    let absolute = unified.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|s| *s != "..") {
                    segments.pop();
                } else if !absolute {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    if absolute {
        format!("/{}", segments.join("/"))
    } else if segments.is_empty() {
        ".".to_string()
    } else {
        segments.join("/")
    }
}

/// Separator-insensitive path equality after normalization.
pub fn paths_equal(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
