// ── logbridge Atoms: Pure Data Types ───────────────────────────────────────
// Plain struct/enum definitions with no I/O.

use std::path::{Path, PathBuf};

use super::constants::{API_ARCHIVE_STEM, CORE_ARCHIVE_STEM};

/// The two archives the dynamic client loads, in search order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSet {
    pub api: PathBuf,
    pub core: PathBuf,
}

impl ArchiveSet {
    /// Expected archive paths inside `dir`, with platform file names.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            api: dir.join(libloading::library_filename(API_ARCHIVE_STEM)),
            core: dir.join(libloading::library_filename(CORE_ARCHIVE_STEM)),
        }
    }

    pub fn paths(&self) -> [&Path; 2] {
        [&self.api, &self.core]
    }
}

/// Result of the existence checks that precede loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preflight {
    MissingDirectory(PathBuf),
    /// At least one entry; in search order.
    MissingArchives(Vec<PathBuf>),
    Ready(ArchiveSet),
}

/// How a dynamic run ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    MissingDependencies,
}

/// The three messages a client logs, one per level.
#[derive(Debug, Clone, Copy)]
pub struct LevelMessages {
    pub info: &'static str,
    pub warn: &'static str,
    pub error: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_set_uses_platform_file_names() {
        let set = ArchiveSet::in_dir(Path::new("libs"));
        let api = set.api.file_name().unwrap().to_string_lossy().into_owned();
        let core = set.core.file_name().unwrap().to_string_lossy().into_owned();
        assert!(api.contains("logbridge_api"));
        assert!(core.contains("logbridge_core"));
        assert_eq!(set.paths(), [set.api.as_path(), set.core.as_path()]);
        assert!(set.api.starts_with("libs"));
    }
}
