// ── logbridge API archive ──────────────────────────────────────────────────
// Declares the LogManager and Logger types. Nothing here is callable: the
// implementation archive exports the method bodies under matching symbols.
//
// Static names must equal `logbridge_abi::type_symbol(<qualified name>)`.

#![allow(non_upper_case_globals)]

use logbridge_abi::{MethodDecl, TypeDecl};

static LOG_MANAGER_METHODS: [MethodDecl; 1] = [MethodDecl::new(c"get_logger", c"str")];

static LOGGER_METHODS: [MethodDecl; 4] = [
    MethodDecl::new(c"info", c"str"),
    MethodDecl::new(c"warn", c"str"),
    MethodDecl::new(c"error", c"str"),
    MethodDecl::new(c"release", c""),
];

#[no_mangle]
pub static logbridge__LogManager__TYPE: TypeDecl =
    TypeDecl::new(c"logbridge::LogManager", &LOG_MANAGER_METHODS);

#[no_mangle]
pub static logbridge__Logger__TYPE: TypeDecl = TypeDecl::new(c"logbridge::Logger", &LOGGER_METHODS);

#[cfg(test)]
mod tests {
    use super::*;
    use logbridge_abi::*;

    #[test]
    fn log_manager_declares_get_logger() {
        let decl = &logbridge__LogManager__TYPE;
        unsafe {
            assert_eq!(decl.name().to_str().unwrap(), LOG_MANAGER_TYPE);
            assert!(decl.find_method(GET_LOGGER, SIG_STR).is_some());
        }
    }

    #[test]
    fn logger_declares_all_levels_and_release() {
        let decl = &logbridge__Logger__TYPE;
        unsafe {
            assert_eq!(decl.name().to_str().unwrap(), LOGGER_TYPE);
            for level in [INFO, WARN, ERROR] {
                assert!(decl.find_method(level, SIG_STR).is_some(), "missing {level}");
            }
            assert!(decl.find_method(RELEASE, SIG_NONE).is_some());
            assert_eq!(decl.methods().len(), 4);
        }
    }
}
