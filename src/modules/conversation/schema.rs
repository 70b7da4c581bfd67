use serde::{Deserialize, Serialize};

use crate::modules::message::schema::MessageEntity;

/// Summary of the messages exchanged by one unordered pair of users. Never stored on its
/// own; always derivable from the message log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationEntity {
    /// The two participant ids, sorted, joined with `-`.
    pub id: String,
    pub participants: [String; 2],
    pub last_message: MessageEntity,
    pub unread_count: u32,
}

impl ConversationEntity {
    pub fn includes(&self, user_id: &str) -> bool {
        self.participants.iter().any(|p| p == user_id)
    }
}
