// dynamic_client/loader.rs: scoped loader over the runtime archives
//
// The loader owns every loaded module. Anything resolved from it borrows it,
// so resolved symbols cannot outlive `close()`.

use std::ffi::c_void;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::ptr::NonNull;

use libloading::Library;

use crate::atoms::error::{BridgeError, BridgeResult};
use crate::atoms::types::ArchiveSet;

// ── Module seam ────────────────────────────────────────────────────────────

/// A loaded module that can be searched for exported symbols.
pub trait SymbolProvider {
    /// Where the module was loaded from, for diagnostics.
    fn location(&self) -> &Path;

    /// Address of an exported symbol, if this module exports it.
    fn symbol_address(&self, symbol: &str) -> Option<NonNull<c_void>>;

    /// Unload the module.
    fn close(self) -> BridgeResult<()>
    where
        Self: Sized;
}

// ── Shared library archives ────────────────────────────────────────────────

/// One archive opened with the platform dynamic loader.
pub struct Archive {
    path: PathBuf,
    library: Library,
}

impl Archive {
    pub fn open(path: &Path) -> BridgeResult<Self> {
        // Loading runs the archive's initializers; the archives are trusted
        // the same way a linked dependency would be.
        let library = unsafe { Library::new(path) }
            .map_err(|source| BridgeError::Load { path: path.to_path_buf(), source })?;
        log::debug!("[loader] Opened {}", path.display());
        Ok(Self { path: path.to_path_buf(), library })
    }
}

impl SymbolProvider for Archive {
    fn location(&self) -> &Path {
        &self.path
    }

    fn symbol_address(&self, symbol: &str) -> Option<NonNull<c_void>> {
        // Read as a data pointer: the value is the symbol's address.
        let sym = unsafe { self.library.get::<*mut c_void>(symbol.as_bytes()) }.ok()?;
        NonNull::new(*sym)
    }

    fn close(self) -> BridgeResult<()> {
        let Archive { path, library } = self;
        library.close().map_err(|source| BridgeError::Close { path, source })
    }
}

// Rejects non-pointer-sized `F` when `function::<F>` is instantiated.
struct PointerSized<F>(PhantomData<F>);

impl<F> PointerSized<F> {
    const CHECK: () = assert!(
        std::mem::size_of::<F>() == std::mem::size_of::<*mut c_void>(),
        "function type must be pointer-sized"
    );
}

// ── Scoped loader ──────────────────────────────────────────────────────────

/// An isolated search path of loaded modules.
///
/// Lookups search the modules in order and never fall back to the host's
/// own symbols. Close it with [`ScopedLoader::close`]; dropping it unclosed
/// still releases every module.
pub struct ScopedLoader<M: SymbolProvider = Archive> {
    modules: Vec<M>,
}

impl ScopedLoader<Archive> {
    /// Open the API archive, then the implementation archive.
    pub fn open(archives: &ArchiveSet) -> BridgeResult<Self> {
        let mut modules = Vec::with_capacity(2);
        for path in archives.paths() {
            // On failure the archives opened so far drop with `modules`.
            modules.push(Archive::open(path)?);
        }
        Ok(Self::from_modules(modules))
    }
}

impl<M: SymbolProvider> ScopedLoader<M> {
    pub fn from_modules(modules: Vec<M>) -> Self {
        Self { modules }
    }

    /// First module (in search order) exporting `symbol`.
    pub fn find(&self, symbol: &str) -> BridgeResult<NonNull<c_void>> {
        for module in &self.modules {
            if let Some(addr) = module.symbol_address(symbol) {
                log::trace!("[loader] {} found in {}", symbol, module.location().display());
                return Ok(addr);
            }
        }
        Err(BridgeError::SymbolNotFound { symbol: symbol.to_string() })
    }

    /// Exported data symbol as a reference bounded by the loader's lifetime.
    ///
    /// # Safety
    /// The symbol must actually be a `T`.
    pub unsafe fn data<T>(&self, symbol: &str) -> BridgeResult<&T> {
        let addr = self.find(symbol)?;
        Ok(&*addr.as_ptr().cast::<T>())
    }

    /// Exported function symbol as a typed function pointer.
    ///
    /// # Safety
    /// `F` must be an `extern "C" fn` type matching the export's signature.
    /// The pointer must not be called after the loader is closed.
    pub unsafe fn function<F: Copy>(&self, symbol: &str) -> BridgeResult<F> {
        let () = PointerSized::<F>::CHECK;
        let addr = self.find(symbol)?.as_ptr();
        Ok(std::mem::transmute_copy::<*mut c_void, F>(&addr))
    }

    /// Unload every module, in reverse load order. All modules are unloaded
    /// even if one fails; the first failure is returned.
    pub fn close(mut self) -> BridgeResult<()> {
        let modules = std::mem::take(&mut self.modules);
        let count = modules.len();
        let mut first_err = None;
        for module in modules.into_iter().rev() {
            let location = module.location().to_path_buf();
            if let Err(e) = module.close() {
                log::warn!("[loader] Failed to unload {}: {}", location.display(), e);
                first_err.get_or_insert(e);
            }
        }
        log::debug!("[loader] Closed ({} modules)", count);
        first_err.map_or(Ok(()), Err)
    }
}

impl<M: SymbolProvider> Drop for ScopedLoader<M> {
    fn drop(&mut self) {
        if !self.modules.is_empty() {
            log::warn!("[loader] Dropped without close, releasing {} modules", self.modules.len());
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
