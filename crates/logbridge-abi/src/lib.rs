// ── logbridge ABI ──────────────────────────────────────────────────────────
// The fixed boundary between the host loader and the two archives.
//
// Layout:
//   • The API archive exports one `TypeDecl` static per type, under the
//     symbol returned by `type_symbol()`.
//   • The implementation archive exports one `extern "C"` function per
//     declared method, under the symbol returned by `method_symbol()`.
//   • Every exported item is `#[repr(C)]` and carries `ABI_VERSION`.
//
// Dependency rule: std only. Both sides of the boundary link this crate.

use std::ffi::{c_char, CStr};

// ── Versioning ─────────────────────────────────────────────────────────────

/// Bumped whenever a declaration, signature tag, or function type changes.
pub const ABI_VERSION: u32 = 1;

// ── Qualified type names ───────────────────────────────────────────────────

/// Factory type: hands out logger instances.
pub const LOG_MANAGER_TYPE: &str = "logbridge::LogManager";
/// Logger capability type: leveled logging over one message argument.
pub const LOGGER_TYPE: &str = "logbridge::Logger";

// ── Method names ───────────────────────────────────────────────────────────

pub const GET_LOGGER: &str = "get_logger";
pub const INFO: &str = "info";
pub const WARN: &str = "warn";
pub const ERROR: &str = "error";
pub const RELEASE: &str = "release";

// ── Parameter signature tags ───────────────────────────────────────────────
// A method is resolved by name *and* tag; the tag pins the function type.

/// One UTF-8 message argument, passed as `(ptr, len)`.
pub const SIG_STR: &str = "str";
/// No arguments beyond the receiver.
pub const SIG_NONE: &str = "";

// ── Function types ─────────────────────────────────────────────────────────

/// Opaque logger instance owned by the implementation archive.
#[repr(C)]
pub struct LoggerHandle {
    _private: [u8; 0],
}

/// `logbridge::LogManager::get_logger(str)`. Returns null on failure.
pub type GetLoggerFn = unsafe extern "C" fn(name: *const u8, len: usize) -> *mut LoggerHandle;
/// `logbridge::Logger::{info,warn,error}(str)`.
pub type LogFn = unsafe extern "C" fn(logger: *mut LoggerHandle, message: *const u8, len: usize);
/// `logbridge::Logger::release()`. Frees the instance; the handle is dead afterwards.
pub type ReleaseFn = unsafe extern "C" fn(logger: *mut LoggerHandle);

// ── Declarations ───────────────────────────────────────────────────────────

/// One method entry in a type's method table.
#[repr(C)]
pub struct MethodDecl {
    pub name: *const c_char,
    pub params: *const c_char,
}

/// A type declaration as exported by the API archive.
#[repr(C)]
pub struct TypeDecl {
    pub abi_version: u32,
    pub name: *const c_char,
    pub methods: *const MethodDecl,
    pub method_count: usize,
}

// Declarations only ever point at 'static, immutable C strings.
unsafe impl Sync for MethodDecl {}
unsafe impl Sync for TypeDecl {}

impl MethodDecl {
    pub const fn new(name: &'static CStr, params: &'static CStr) -> Self {
        Self { name: name.as_ptr(), params: params.as_ptr() }
    }

    /// # Safety
    /// `self` must have been built by [`MethodDecl::new`] or come from a
    /// module that is still loaded.
    pub unsafe fn name(&self) -> &CStr {
        CStr::from_ptr(self.name)
    }

    /// # Safety
    /// Same as [`MethodDecl::name`].
    pub unsafe fn params(&self) -> &CStr {
        CStr::from_ptr(self.params)
    }
}

impl TypeDecl {
    pub const fn new(name: &'static CStr, methods: &'static [MethodDecl]) -> Self {
        Self {
            abi_version: ABI_VERSION,
            name: name.as_ptr(),
            methods: methods.as_ptr(),
            method_count: methods.len(),
        }
    }

    /// # Safety
    /// `self` must have been built by [`TypeDecl::new`] or come from a
    /// module that is still loaded.
    pub unsafe fn name(&self) -> &CStr {
        CStr::from_ptr(self.name)
    }

    /// # Safety
    /// Same as [`TypeDecl::name`].
    pub unsafe fn methods(&self) -> &[MethodDecl] {
        if self.methods.is_null() || self.method_count == 0 {
            return &[];
        }
        std::slice::from_raw_parts(self.methods, self.method_count)
    }

    /// Look up a declared method by name and parameter signature tag.
    ///
    /// # Safety
    /// Same as [`TypeDecl::name`].
    pub unsafe fn find_method(&self, name: &str, params: &str) -> Option<&MethodDecl> {
        self.methods().iter().find(|m| {
            m.name().to_bytes() == name.as_bytes() && m.params().to_bytes() == params.as_bytes()
        })
    }
}

// ── Symbol mangling ────────────────────────────────────────────────────────

fn mangle(type_name: &str) -> String {
    type_name.replace("::", "__")
}

/// Exported symbol of a type declaration: `logbridge::Logger` → `logbridge__Logger__TYPE`.
pub fn type_symbol(type_name: &str) -> String {
    format!("{}__TYPE", mangle(type_name))
}

/// Exported symbol of a method: (`logbridge::Logger`, `info`) → `logbridge__Logger__info`.
pub fn method_symbol(type_name: &str, method: &str) -> String {
    format!("{}__{}", mangle(type_name), method)
}

// ── Capability ─────────────────────────────────────────────────────────────

/// Leveled logging over a single message argument.
///
/// Implemented by the statically linked `CoreLogger` and by the host's
/// dynamically resolved logger alike, so client code never cares which.
pub trait Logger {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    static METHODS: [MethodDecl; 2] = [
        MethodDecl::new(c"info", c"str"),
        MethodDecl::new(c"release", c""),
    ];
    static DECL: TypeDecl = TypeDecl::new(c"logbridge::Logger", &METHODS);

    #[test]
    fn type_symbol_mangles_path_separators() {
        assert_eq!(type_symbol(LOGGER_TYPE), "logbridge__Logger__TYPE");
        assert_eq!(type_symbol(LOG_MANAGER_TYPE), "logbridge__LogManager__TYPE");
    }

    #[test]
    fn method_symbol_appends_method_name() {
        assert_eq!(method_symbol(LOGGER_TYPE, INFO), "logbridge__Logger__info");
        assert_eq!(
            method_symbol(LOG_MANAGER_TYPE, GET_LOGGER),
            "logbridge__LogManager__get_logger"
        );
    }

    #[test]
    fn declaration_carries_current_abi_version() {
        assert_eq!(DECL.abi_version, ABI_VERSION);
        assert_eq!(unsafe { DECL.name() }.to_str().unwrap(), LOGGER_TYPE);
    }

    #[test]
    fn find_method_matches_name_and_signature() {
        unsafe {
            assert!(DECL.find_method(INFO, SIG_STR).is_some());
            assert!(DECL.find_method(RELEASE, SIG_NONE).is_some());
            // right name, wrong signature
            assert!(DECL.find_method(INFO, SIG_NONE).is_none());
            assert!(DECL.find_method(WARN, SIG_STR).is_none());
        }
    }

    #[test]
    fn empty_method_table_finds_nothing() {
        static EMPTY: TypeDecl = TypeDecl::new(c"x::Empty", &[]);
        assert!(unsafe { EMPTY.find_method(INFO, SIG_STR) }.is_none());
    }
}
