// Logger factory and the logger it hands out.
//
// Loggers forward to the `log` facade with the logger's name as target, so
// whichever backend owns the facade in this module image does the output.

use logbridge_abi::Logger;

/// Factory for named loggers.
pub struct LogManager;

impl LogManager {
    /// Obtain a logger bound to `name`, conventionally the caller's module path.
    pub fn get_logger(name: impl Into<String>) -> CoreLogger {
        let name = name.into();
        log::trace!("[logbridge-core] created logger '{}'", name);
        CoreLogger { name }
    }
}

/// A named logger.
#[derive(Debug, Clone)]
pub struct CoreLogger {
    name: String,
}

impl CoreLogger {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Logger for CoreLogger {
    fn info(&self, message: &str) {
        log::info!(target: &self.name, "{}", message);
    }

    fn warn(&self, message: &str) {
        log::warn!(target: &self.name, "{}", message);
    }

    fn error(&self, message: &str) {
        log::error!(target: &self.name, "{}", message);
    }
}
