// Static client: logbridge-core linked at build time, no lookup by name.

use std::io::Write;

use logbridge_core::LogManager;

use super::sequence;
use crate::atoms::constants::*;
use crate::atoms::error::BridgeResult;
use crate::atoms::types::LevelMessages;

pub const MESSAGES: LevelMessages = LevelMessages {
    info: STATIC_INFO_MESSAGE,
    warn: STATIC_WARN_MESSAGE,
    error: STATIC_ERROR_MESSAGE,
};

/// Log the three messages under this module's name, then write the
/// completion line to `out`.
pub fn run(out: &mut impl Write) -> BridgeResult<()> {
    let logger = LogManager::get_logger(module_path!());
    sequence::emit(&logger, &MESSAGES);
    writeln!(out, "{}", STATIC_DONE_MESSAGE)?;
    Ok(())
}
