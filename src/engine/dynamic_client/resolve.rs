// dynamic_client/resolve.rs: name-based type and method resolution
//
// A type resolves to the `TypeDecl` exported by the API archive. A method
// resolves in two steps: the declaration must list it with the requested
// signature tag, then some archive must export its implementation symbol.
// Only after both checks is the address cast to a function type.

use std::marker::PhantomData;
use std::ptr::NonNull;

use logbridge_abi::{
    method_symbol, type_symbol, GetLoggerFn, LogFn, Logger, LoggerHandle, ReleaseFn, TypeDecl,
    ABI_VERSION, ERROR, GET_LOGGER, INFO, LOGGER_TYPE, LOG_MANAGER_TYPE, RELEASE, SIG_NONE, SIG_STR,
    WARN,
};

use super::loader::{ScopedLoader, SymbolProvider};
use crate::atoms::error::{BridgeError, BridgeResult};

// ── Types ──────────────────────────────────────────────────────────────────

/// A type declaration resolved from a loader.
pub struct ResolvedType<'l, M: SymbolProvider> {
    loader: &'l ScopedLoader<M>,
    name: String,
    decl: &'l TypeDecl,
}

/// Resolve a type by fully-qualified name.
pub fn resolve_type<'l, M: SymbolProvider>(
    loader: &'l ScopedLoader<M>,
    type_name: &str,
) -> BridgeResult<ResolvedType<'l, M>> {
    let symbol = type_symbol(type_name);
    let decl = unsafe { loader.data::<TypeDecl>(&symbol) }.map_err(|_| BridgeError::TypeNotFound {
        type_name: type_name.to_string(),
        symbol: symbol.clone(),
    })?;

    // The version is checked before anything else in the declaration is read.
    if decl.abi_version != ABI_VERSION {
        return Err(BridgeError::AbiMismatch {
            type_name: type_name.to_string(),
            found: decl.abi_version,
            expected: ABI_VERSION,
        });
    }

    let declared = unsafe { decl.name() }.to_string_lossy();
    if declared != type_name {
        return Err(BridgeError::TypeMismatch {
            requested: type_name.to_string(),
            found: declared.into_owned(),
        });
    }

    log::debug!("[resolve] {} -> {}", type_name, symbol);
    Ok(ResolvedType { loader, name: type_name.to_string(), decl })
}

impl<'l, M: SymbolProvider> ResolvedType<'l, M> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve a method by name and declared parameter signature.
    ///
    /// # Safety
    /// `F` must be the function type that `params` stands for.
    pub unsafe fn method<F: Copy>(&self, method: &str, params: &str) -> BridgeResult<F> {
        if self.decl.find_method(method, params).is_none() {
            return Err(BridgeError::MethodNotFound {
                type_name: self.name.clone(),
                method: method.to_string(),
                params: params.to_string(),
            });
        }
        self.loader.function::<F>(&method_symbol(&self.name, method))
    }
}

// ── Logger instance ────────────────────────────────────────────────────────

/// A logger instance created by the loaded factory.
///
/// Borrows the loader: it is released (through the archive's own `release`)
/// before the loader can be closed.
pub struct DynamicLogger<'l> {
    handle: NonNull<LoggerHandle>,
    info: LogFn,
    warn: LogFn,
    error: LogFn,
    release: ReleaseFn,
    _loader: PhantomData<&'l ()>,
}

impl<'l> DynamicLogger<'l> {
    /// Resolve `LogManager` and `Logger`, their methods, then ask the factory
    /// for a logger bound to `owner`.
    pub fn obtain<M: SymbolProvider>(loader: &'l ScopedLoader<M>, owner: &str) -> BridgeResult<Self> {
        let factory = resolve_type(loader, LOG_MANAGER_TYPE)?;
        let logger_type = resolve_type(loader, LOGGER_TYPE)?;

        // Signature tags pin the function types below.
        let (get_logger, info, warn, error, release) = unsafe {
            (
                factory.method::<GetLoggerFn>(GET_LOGGER, SIG_STR)?,
                logger_type.method::<LogFn>(INFO, SIG_STR)?,
                logger_type.method::<LogFn>(WARN, SIG_STR)?,
                logger_type.method::<LogFn>(ERROR, SIG_STR)?,
                logger_type.method::<ReleaseFn>(RELEASE, SIG_NONE)?,
            )
        };

        let raw = unsafe { get_logger(owner.as_ptr(), owner.len()) };
        let handle = NonNull::new(raw).ok_or_else(|| {
            BridgeError::Invocation(format!("{}::{} returned no logger", factory.name(), GET_LOGGER))
        })?;
        log::debug!("[resolve] Obtained logger for '{}'", owner);

        Ok(Self { handle, info, warn, error, release, _loader: PhantomData })
    }

    fn call(&self, f: LogFn, message: &str) {
        unsafe { f(self.handle.as_ptr(), message.as_ptr(), message.len()) }
    }
}

impl Logger for DynamicLogger<'_> {
    fn info(&self, message: &str) {
        self.call(self.info, message);
    }

    fn warn(&self, message: &str) {
        self.call(self.warn, message);
    }

    fn error(&self, message: &str) {
        self.call(self.error, message);
    }
}

impl Drop for DynamicLogger<'_> {
    fn drop(&mut self) {
        unsafe { (self.release)(self.handle.as_ptr()) }
    }
}
