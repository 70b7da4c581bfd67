use std::sync::Arc;

use crate::{
    api::error,
    modules::{conversation::schema::ConversationEntity, message::schema::MessageEntity},
};

#[async_trait::async_trait]
pub trait ConversationRepository {
    async fn find_all(&self) -> Result<Arc<Vec<ConversationEntity>>, error::SystemError>;

    async fn find_by_participant(
        &self,
        user_id: &str,
    ) -> Result<Vec<ConversationEntity>, error::SystemError>;

    /// Folds a newly appended message into its pair's conversation, creating it if needed.
    async fn apply_message(
        &self,
        message: &MessageEntity,
    ) -> Result<ConversationEntity, error::SystemError>;

    /// Swaps in a recomputed conversation at its current position. `false` if absent.
    async fn replace(&self, conversation: ConversationEntity) -> Result<bool, error::SystemError>;

    async fn replace_all(
        &self,
        conversations: Vec<ConversationEntity>,
    ) -> Result<(), error::SystemError>;
}
