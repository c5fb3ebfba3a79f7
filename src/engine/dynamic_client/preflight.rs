// dynamic_client/preflight.rs: existence checks before anything is loaded
//
// Missing archives are an expected state on a fresh checkout, so they are
// reported as guidance rather than returned as errors.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::atoms::constants::{BUILD_COMMAND, BUILD_OUTPUT_DIR};
use crate::atoms::types::{ArchiveSet, Preflight};

/// Check the directory, then each archive in search order.
pub fn check(dir: &Path) -> Preflight {
    if !dir.is_dir() {
        return Preflight::MissingDirectory(dir.to_path_buf());
    }

    let archives = ArchiveSet::in_dir(dir);
    let missing: Vec<PathBuf> = archives
        .paths()
        .into_iter()
        .filter(|p| !p.exists())
        .map(Path::to_path_buf)
        .collect();

    if missing.is_empty() {
        Preflight::Ready(archives)
    } else {
        Preflight::MissingArchives(missing)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Print guidance for a failed check. `Ready` prints nothing.
pub fn report(preflight: &Preflight, out: &mut impl Write) -> io::Result<()> {
    match preflight {
        Preflight::MissingDirectory(dir) => {
            let expected = ArchiveSet::in_dir(dir);
            writeln!(
                out,
                "{}/ not found. Put {} and {} there.",
                dir.display(),
                file_name(&expected.api),
                file_name(&expected.core)
            )?;
            writeln!(out, "Build them with `{}` and copy them from {}", BUILD_COMMAND, BUILD_OUTPUT_DIR)?;
        }
        Preflight::MissingArchives(missing) => {
            let names: Vec<String> = missing.iter().map(|p| file_name(p)).collect();
            writeln!(out, "Missing expected archives: {}", names.join(", "))?;
            let dir = missing.first().and_then(|p| p.parent()).unwrap_or(Path::new("."));
            writeln!(
                out,
                "Build them with `{}` and place them in {}/",
                BUILD_COMMAND,
                dir.display()
            )?;
        }
        Preflight::Ready(_) => {}
    }
    Ok(())
}
