//! Lexical path normalization.

use std::path::{Component, Path, PathBuf};

/// Normalize `path` without consulting the filesystem.
///
/// Redundant separators and `.` components are dropped, `name/..` pairs are
/// folded, `..` directly under a root is discarded and leading `..` on a
/// relative path is kept. An empty result becomes `.`. The returned path is
/// rebuilt from components, so it uses the platform separator.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
