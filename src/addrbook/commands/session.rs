use crate::commands::{CmdMessage, CmdResult};

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const UNKNOWN: &str = "Invalid command.";

pub fn hello() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info(GREETING))
}

pub fn exit() -> CmdResult {
    CmdResult::default()
        .with_message(CmdMessage::info(FAREWELL))
        .exiting()
}

/// Unrecognized input is answered, not treated as an error.
pub fn unknown() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::warning(UNKNOWN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn only_exit_sets_the_flag() {
        assert!(!hello().exit);
        assert!(!unknown().exit);
        assert!(exit().exit);
    }

    #[test]
    fn unknown_is_a_warning() {
        let result = unknown();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.text(), UNKNOWN);
    }
}
