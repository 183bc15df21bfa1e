use std::path::{Component, Path, PathBuf};

/// Renders `path` as an absolute path for diagnostics, without touching the
/// filesystem. `.` components are dropped and `..` pops its predecessor.
pub fn display_absolute(path: &Path) -> String {
    let joined = match std::path::absolute(path) {
        Ok(absolute) => absolute,
        Err(_) => path.to_path_buf(),
    };

    let mut cleaned = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(
                    cleaned.components().next_back(),
                    None | Some(Component::RootDir | Component::Prefix(_))
                ) {
                    cleaned.pop();
                }
            }
            other => cleaned.push(other),
        }
    }

    cleaned.display().to_string()
}

pub trait PathDisplayExt {
    fn display_absolute(&self) -> String;
}

impl PathDisplayExt for Path {
    fn display_absolute(&self) -> String {
        display_absolute(self)
    }
}

impl PathDisplayExt for PathBuf {
    fn display_absolute(&self) -> String {
        display_absolute(self)
    }
}
