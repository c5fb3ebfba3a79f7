// In-process stand-ins for the two runtime archives.
//
// `FakeModule::api` exports type declarations and `FakeModule::core` exports
// `extern "C"` method bodies, exactly as the real archives do, so the real
// ScopedLoader / resolve code runs against them. Calls are recorded per
// thread.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::ffi::c_void;
use std::path::{Path, PathBuf};
use std::ptr::NonNull;
use std::rc::Rc;

use logbridge::engine::dynamic_client::loader::SymbolProvider;
use logbridge::BridgeResult;
use logbridge_abi::*;

// ── Call recording ─────────────────────────────────────────────────────────

thread_local! {
    static CALLS: RefCell<Vec<(&'static str, String)>> = const { RefCell::new(Vec::new()) };
    static FACTORY_FAILS: Cell<bool> = const { Cell::new(false) };
}

pub fn calls() -> Vec<(&'static str, String)> {
    CALLS.with(|c| c.borrow().clone())
}

pub fn fail_factory() {
    FACTORY_FAILS.with(|f| f.set(true));
}

unsafe fn record(op: &'static str, ptr: *const u8, len: usize) {
    let text = if ptr.is_null() {
        String::new()
    } else {
        String::from_utf8_lossy(std::slice::from_raw_parts(ptr, len)).into_owned()
    };
    CALLS.with(|c| c.borrow_mut().push((op, text)));
}

// ── Method bodies ──────────────────────────────────────────────────────────

struct FakeLogger;

unsafe extern "C" fn get_logger(name: *const u8, len: usize) -> *mut LoggerHandle {
    record(GET_LOGGER, name, len);
    if FACTORY_FAILS.with(Cell::get) {
        return std::ptr::null_mut();
    }
    Box::into_raw(Box::new(FakeLogger)).cast()
}

unsafe extern "C" fn info(_: *mut LoggerHandle, message: *const u8, len: usize) {
    record(INFO, message, len);
}

unsafe extern "C" fn warn(_: *mut LoggerHandle, message: *const u8, len: usize) {
    record(WARN, message, len);
}

unsafe extern "C" fn error(_: *mut LoggerHandle, message: *const u8, len: usize) {
    record(ERROR, message, len);
}

unsafe extern "C" fn release(logger: *mut LoggerHandle) {
    drop(Box::from_raw(logger.cast::<FakeLogger>()));
    record(RELEASE, std::ptr::null(), 0);
}

// ── Declarations ───────────────────────────────────────────────────────────

static LOG_MANAGER_METHODS: [MethodDecl; 1] = [MethodDecl::new(c"get_logger", c"str")];
static LOGGER_METHODS: [MethodDecl; 4] = [
    MethodDecl::new(c"info", c"str"),
    MethodDecl::new(c"warn", c"str"),
    MethodDecl::new(c"error", c"str"),
    MethodDecl::new(c"release", c""),
];
// `info` declared without its message argument.
static SKEWED_LOGGER_METHODS: [MethodDecl; 4] = [
    MethodDecl::new(c"info", c""),
    MethodDecl::new(c"warn", c"str"),
    MethodDecl::new(c"error", c"str"),
    MethodDecl::new(c"release", c""),
];

pub static LOG_MANAGER_DECL: TypeDecl = TypeDecl::new(c"logbridge::LogManager", &LOG_MANAGER_METHODS);
pub static LOGGER_DECL: TypeDecl = TypeDecl::new(c"logbridge::Logger", &LOGGER_METHODS);
pub static SKEWED_LOGGER_DECL: TypeDecl = TypeDecl::new(c"logbridge::Logger", &SKEWED_LOGGER_METHODS);
pub static FUTURE_LOGGER_DECL: TypeDecl = TypeDecl {
    abi_version: ABI_VERSION + 1,
    ..TypeDecl::new(c"logbridge::Logger", &LOGGER_METHODS)
};
pub static MISNAMED_LOGGER_DECL: TypeDecl = TypeDecl::new(c"logbridge::Other", &LOGGER_METHODS);

pub fn decl_addr(decl: &'static TypeDecl) -> usize {
    decl as *const TypeDecl as usize
}

// ── Modules ────────────────────────────────────────────────────────────────

pub struct FakeModule {
    location: PathBuf,
    exports: HashMap<String, usize>,
    releases: Rc<Cell<u32>>,
}

impl FakeModule {
    pub fn api(releases: &Rc<Cell<u32>>) -> Self {
        let mut exports = HashMap::new();
        exports.insert(type_symbol(LOG_MANAGER_TYPE), decl_addr(&LOG_MANAGER_DECL));
        exports.insert(type_symbol(LOGGER_TYPE), decl_addr(&LOGGER_DECL));
        Self { location: PathBuf::from("fake/api"), exports, releases: Rc::clone(releases) }
    }

    pub fn core(releases: &Rc<Cell<u32>>) -> Self {
        let mut exports = HashMap::new();
        exports.insert(method_symbol(LOG_MANAGER_TYPE, GET_LOGGER), get_logger as GetLoggerFn as usize);
        exports.insert(method_symbol(LOGGER_TYPE, INFO), info as LogFn as usize);
        exports.insert(method_symbol(LOGGER_TYPE, WARN), warn as LogFn as usize);
        exports.insert(method_symbol(LOGGER_TYPE, ERROR), error as LogFn as usize);
        exports.insert(method_symbol(LOGGER_TYPE, RELEASE), release as ReleaseFn as usize);
        Self { location: PathBuf::from("fake/core"), exports, releases: Rc::clone(releases) }
    }

    pub fn with(mut self, symbol: &str, addr: usize) -> Self {
        self.exports.insert(symbol.to_string(), addr);
        self
    }

    pub fn without(mut self, symbol: &str) -> Self {
        self.exports.remove(symbol);
        self
    }
}

impl SymbolProvider for FakeModule {
    fn location(&self) -> &Path {
        &self.location
    }

    fn symbol_address(&self, symbol: &str) -> Option<NonNull<c_void>> {
        self.exports.get(symbol).and_then(|addr| NonNull::new(*addr as *mut c_void))
    }

    fn close(self) -> BridgeResult<()> {
        Ok(())
    }
}

impl Drop for FakeModule {
    fn drop(&mut self) {
        self.releases.set(self.releases.get() + 1);
    }
}
