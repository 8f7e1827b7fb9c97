//! Inbox conversation factories.

use beacon_schema::{FocusedOnConversationMessageInput, SentConversationMessage};
use serde::Deserialize;

/// Arguments for the conversation factories.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConversationArgs {
    /// Conversation ID in the messaging backend.
    pub impulse_conversation_id: String,
}

/// A user focuses on the message input of a conversation.
#[must_use]
pub fn focused_on_conversation_message_input(
    args: ConversationArgs,
) -> FocusedOnConversationMessageInput {
    let ConversationArgs {
        impulse_conversation_id,
    } = args;
    FocusedOnConversationMessageInput {
        impulse_conversation_id,
    }
}

/// A user sends a message in a conversation.
#[must_use]
pub fn sent_conversation_message(args: ConversationArgs) -> SentConversationMessage {
    let ConversationArgs {
        impulse_conversation_id,
    } = args;
    SentConversationMessage {
        impulse_conversation_id,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_support::wire;

    #[test]
    fn focused_on_message_input() {
        let args: ConversationArgs =
            serde_json::from_value(json!({"impulseConversationId": "conv-1"})).unwrap();
        assert_eq!(
            wire(focused_on_conversation_message_input(args)),
            json!({
                "action": "focusedOnConversationMessageInput",
                "impulse_conversation_id": "conv-1",
            })
        );
    }

    #[test]
    fn sent_message() {
        let wire = wire(sent_conversation_message(ConversationArgs {
            impulse_conversation_id: "conv-2".into(),
        }));
        assert_eq!(wire["action"], "sentConversationMessage");
        assert_eq!(wire["impulse_conversation_id"], "conv-2");
    }
}
