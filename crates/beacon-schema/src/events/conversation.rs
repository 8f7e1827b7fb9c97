//! Inbox conversation events.

use serde::{Deserialize, Serialize};

/// A user focuses on the message input of a conversation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FocusedOnConversationMessageInput {
    /// Conversation ID in the messaging backend.
    pub impulse_conversation_id: String,
}

/// A user sends a message in a conversation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SentConversationMessage {
    /// Conversation ID in the messaging backend.
    pub impulse_conversation_id: String,
}
