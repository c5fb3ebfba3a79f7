// Dynamic client: drives logbridge-core through archives loaded at runtime.
//
// Module layout:
//   preflight: directory / archive existence checks and guidance
//   loader   : SymbolProvider seam, Archive, ScopedLoader
//   resolve  : type and method resolution, DynamicLogger

pub mod loader;
pub mod preflight;
pub mod resolve;

use std::io::Write;
use std::path::Path;

use self::loader::{ScopedLoader, SymbolProvider};
use self::resolve::DynamicLogger;
use super::sequence;
use crate::atoms::constants::*;
use crate::atoms::error::BridgeResult;
use crate::atoms::types::{LevelMessages, Preflight, RunOutcome};

pub const MESSAGES: LevelMessages = LevelMessages {
    info: DYNAMIC_INFO_MESSAGE,
    warn: DYNAMIC_WARN_MESSAGE,
    error: DYNAMIC_ERROR_MESSAGE,
};

/// Check `libs_dir`, load both archives, log through them.
///
/// Missing archives are reported on `out` and yield
/// `RunOutcome::MissingDependencies`. Load and resolution failures are
/// returned as errors.
pub fn run(libs_dir: &Path, out: &mut impl Write) -> BridgeResult<RunOutcome> {
    let archives = match preflight::check(libs_dir) {
        Preflight::Ready(archives) => archives,
        missing => {
            log::debug!("[dynamic] Preflight failed: {:?}", missing);
            preflight::report(&missing, out)?;
            return Ok(RunOutcome::MissingDependencies);
        }
    };

    log::info!("[dynamic] Loading {} and {}", archives.api.display(), archives.core.display());
    let loader = ScopedLoader::open(&archives)?;
    drive(loader, out)
}

/// Run the logging sequence inside `loader`, then close it. The loader is
/// closed on the error path too; the sequence error wins over a close error.
pub fn drive<M: SymbolProvider>(loader: ScopedLoader<M>, out: &mut impl Write) -> BridgeResult<RunOutcome> {
    let outcome = invoke(&loader, out);
    let closed = loader.close();
    outcome?;
    closed?;
    Ok(RunOutcome::Completed)
}

fn invoke<M: SymbolProvider>(loader: &ScopedLoader<M>, out: &mut impl Write) -> BridgeResult<()> {
    let logger = DynamicLogger::obtain(loader, module_path!())?;
    sequence::emit(&logger, &MESSAGES);
    writeln!(out, "{}", DYNAMIC_DONE_MESSAGE)?;
    Ok(())
}
