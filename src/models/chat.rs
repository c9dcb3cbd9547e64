use serde::{Deserialize, Serialize};

pub const STUB_MESSAGE_ID: &str = "msg_123";
pub const STUB_ACTOR_TYPE: &str = "trainer";
pub const STUB_CREATED_AT: &str = "2025-08-20T12:00:00Z";
pub const STUB_MESSAGE_STATUS: &str = "sent";

/// Who a message is shown as coming from.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DisplayRole {
    Coach,
    Trainer,
    Client,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessageIn {
    pub text: String,
    pub display_role: DisplayRole,
}

#[derive(Debug, Serialize, Clone)]
pub struct ChatMessageOut {
    pub id: String,
    pub chat_id: String,
    pub text: String,
    pub display_role: DisplayRole,
    pub actor_type: String,
    pub created_at: String,
    pub status: String,
}

impl ChatMessageOut {
    /// Acknowledgment for a message that is never stored. Everything except
    /// the echoed input is fabricated.
    pub fn acknowledge(chat_id: String, msg: ChatMessageIn) -> Self {
        Self {
            id: STUB_MESSAGE_ID.to_string(),
            chat_id,
            text: msg.text,
            display_role: msg.display_role,
            actor_type: STUB_ACTOR_TYPE.to_string(),
            created_at: STUB_CREATED_AT.to_string(),
            status: STUB_MESSAGE_STATUS.to_string(),
        }
    }
}
