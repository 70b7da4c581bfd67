use std::sync::Arc;

use crate::{
    api::error,
    modules::{
        conversation::{
            model::{self, conversation_id},
            repository::ConversationRepository,
            schema::ConversationEntity,
        },
        message::schema::MessageEntity,
    },
    utils::Snapshot,
};

#[derive(Default)]
pub struct ConversationRepositoryMemory {
    conversations: Snapshot<ConversationEntity>,
}

impl ConversationRepositoryMemory {
    pub fn new(conversations: Vec<ConversationEntity>) -> Self {
        Self { conversations: Snapshot::new(conversations) }
    }
}

#[async_trait::async_trait]
impl ConversationRepository for ConversationRepositoryMemory {
    async fn find_all(&self) -> Result<Arc<Vec<ConversationEntity>>, error::SystemError> {
        Ok(self.conversations.load())
    }

    async fn find_by_participant(
        &self,
        user_id: &str,
    ) -> Result<Vec<ConversationEntity>, error::SystemError> {
        Ok(self.conversations.load().iter().filter(|c| c.includes(user_id)).cloned().collect())
    }

    async fn apply_message(
        &self,
        message: &MessageEntity,
    ) -> Result<ConversationEntity, error::SystemError> {
        let id = conversation_id(&message.sender_id, &message.receiver_id);
        let mut applied = None;
        self.conversations.replace_with(|current| {
            let next = model::apply_message(current, message);
            applied = next.iter().find(|c| c.id == id).cloned();
            Some(next)
        });
        applied.ok_or_else(|| error::SystemError::not_found("Conversation not found"))
    }

    async fn replace(&self, conversation: ConversationEntity) -> Result<bool, error::SystemError> {
        let id = conversation.id.clone();
        let updated = self
            .conversations
            .modify_first(|c| c.id == id, Box::new(move |_: &ConversationEntity| Ok(conversation)))?;
        Ok(updated.is_some())
    }

    async fn replace_all(
        &self,
        conversations: Vec<ConversationEntity>,
    ) -> Result<(), error::SystemError> {
        self.conversations.replace_with(|_| Some(conversations));
        Ok(())
    }
}
