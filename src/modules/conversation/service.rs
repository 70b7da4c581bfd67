use log::info;
use std::sync::Arc;

use crate::{
    api::error,
    modules::{
        conversation::{
            model::derive_conversations, repository::ConversationRepository,
            schema::ConversationEntity,
        },
        message::{repository::MessageRepository, schema::MessageEntity},
    },
};

pub struct ConversationService {
    conversation_repo: Arc<dyn ConversationRepository + Send + Sync>,
    message_repo: Arc<dyn MessageRepository + Send + Sync>,
}

impl ConversationService {
    pub fn with_dependencies(
        conversation_repo: Arc<dyn ConversationRepository + Send + Sync>,
        message_repo: Arc<dyn MessageRepository + Send + Sync>,
    ) -> Self {
        info!("ConversationService initialized with dependencies");
        ConversationService { conversation_repo, message_repo }
    }

    /// Recomputes every conversation from the message log.
    pub async fn rebuild(&self) -> Result<usize, error::SystemError> {
        let messages = self.message_repo.find_all().await?;
        let conversations = derive_conversations(&messages);
        let count = conversations.len();
        self.conversation_repo.replace_all(conversations).await?;
        info!("Derived {} conversations from {} messages", count, messages.len());
        Ok(count)
    }

    pub async fn conversations(&self) -> Result<Arc<Vec<ConversationEntity>>, error::SystemError> {
        self.conversation_repo.find_all().await
    }

    pub async fn get_conversations_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<ConversationEntity>, error::SystemError> {
        self.conversation_repo.find_by_participant(user_id).await
    }

    /// Messages of exactly this unordered pair, oldest first. Equal timestamps keep log order.
    pub async fn get_messages_for_conversation(
        &self,
        participants: [&str; 2],
    ) -> Result<Vec<MessageEntity>, error::SystemError> {
        let [a, b] = participants;
        let mut messages = self.message_repo.find_between(a, b).await?;
        messages.sort_by_key(|m| m.sent_at);
        Ok(messages)
    }
}
