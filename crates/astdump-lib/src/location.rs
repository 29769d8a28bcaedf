//! Machine-independent rendering of file paths.
//!
//! Paths are normalized lexically (no filesystem access), made relative to the
//! configured base and always printed with `/` separators, so the same tree
//! dumps identically on every host and from every checkout location.

use std::path::{Component, Path, PathBuf};

use crate::Config;

/// Renders file paths relative to a base directory.
#[derive(Clone, Debug, Default)]
pub struct PathRenderer {
    base: Option<PathBuf>,
    working_dir: Option<PathBuf>,
}

impl PathRenderer {
    pub fn new(base: Option<&Path>, working_dir: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
            working_dir: working_dir.map(Path::to_path_buf),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_path.as_deref(), config.working_dir.as_deref())
    }

    /// Render `file` for output.
    ///
    /// Without a base the normalized path is printed as given. A file that
    /// cannot be related to the base (different roots, unresolvable `..`)
    /// also falls back to its normalized path, with a warning: the output then
    /// depends on the host layout. Mixing a relative base with absolute files
    /// needs a working directory.
    pub fn render(&self, file: &Path) -> String {
        let Some(base) = &self.base else {
            return to_slash(&normalize(file));
        };

        let file = normalize(&self.absolutize(file));
        let base = normalize(&self.absolutize(base));
        match relative_to(&file, &base) {
            Some(rel) => to_slash(&rel),
            None => {
                tracing::warn!(
                    file = %file.display(),
                    base = %base.display(),
                    working_dir = self.working_dir.is_some(),
                    "file cannot be made relative to the base path"
                );
                to_slash(&file)
            }
        }
    }

    fn absolutize(&self, path: &Path) -> PathBuf {
        match &self.working_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}

/// Resolve `.` and `..` lexically.
///
/// A `..` that would climb above a root is dropped; above a relative start it is kept.
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
    parts.iter().map(|c| c.as_os_str()).collect()
}

/// Express `path` relative to `base`. Both must already be normalized.
///
/// Returns `None` when one is rooted and the other is not, when they live under
/// different prefixes, or when `base` has leading `..` components beyond the
/// shared part (the way back down is unknown).
pub fn relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    if path.has_root() != base.has_root() {
        return None;
    }

    let path: Vec<Component<'_>> = path.components().collect();
    let base: Vec<Component<'_>> = base.components().collect();
    if let (Some(Component::Prefix(a)), Some(Component::Prefix(b))) = (path.first(), base.first())
        && a != b
    {
        return None;
    }

    let common = path
        .iter()
        .zip(&base)
        .take_while(|(a, b)| a == b)
        .count();
    if base[common..].contains(&Component::ParentDir) {
        return None;
    }

    let mut rel = PathBuf::new();
    for _ in common..base.len() {
        rel.push("..");
    }
    for component in &path[common..] {
        rel.push(component.as_os_str());
    }
    Some(rel)
}

/// Join components with `/` regardless of the host separator. An empty path renders as `.`.
pub fn to_slash(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::RootDir => out.push('/'),
            other => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    if out.is_empty() {
        out.push('.');
    }
    out
}
