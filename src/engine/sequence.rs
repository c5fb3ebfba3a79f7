// The three-message sequence. Both clients go through here so the level
// order cannot drift between them.

use logbridge_abi::Logger;

use crate::atoms::types::LevelMessages;

/// Log `messages` at info, warn and error, in that order.
pub fn emit(logger: &dyn Logger, messages: &LevelMessages) {
    logger.info(messages.info);
    logger.warn(messages.warn);
    logger.error(messages.error);
}
