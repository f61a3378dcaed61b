/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout in `jsonl` mode — one compact
/// JSON object per line. They are decoupled from any command internals.
use serde::{Deserialize, Serialize};

/// A single-message payload (used by the `hello` command).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageOutput {
    /// The message text.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_round_trip() {
        let msg = MessageOutput {
            message: "hello world".to_owned(),
        };
        let s = serde_json::to_string(&msg).unwrap();
        let back: MessageOutput = serde_json::from_str(&s).unwrap();
        assert_eq!(back, msg);
    }
}
