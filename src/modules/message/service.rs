/// Message Service
///
/// Direct messaging between two users. Every send is appended to the log and folded
/// into the pair's conversation right away, so conversation summaries never need a
/// full rebuild.
use log::info;
use std::sync::Arc;

use crate::api::error;
use crate::api::toast::{Toast, ToastSink};
use crate::modules::conversation::model::derive_conversations;
use crate::modules::conversation::repository::ConversationRepository;
use crate::modules::conversation::schema::ConversationEntity;
use crate::modules::message::repository::MessageRepository;
use crate::modules::message::schema::MessageEntity;
use crate::utils::new_id;

pub struct MessageService {
    message_repo: Arc<dyn MessageRepository + Send + Sync>,
    conversation_repo: Arc<dyn ConversationRepository + Send + Sync>,
    toasts: Arc<dyn ToastSink + Send + Sync>,
}

impl MessageService {
    pub fn with_dependencies(
        message_repo: Arc<dyn MessageRepository + Send + Sync>,
        conversation_repo: Arc<dyn ConversationRepository + Send + Sync>,
        toasts: Arc<dyn ToastSink + Send + Sync>,
    ) -> Self {
        info!("MessageService initialized with dependencies");
        MessageService { message_repo, conversation_repo, toasts }
    }

    pub async fn messages(&self) -> Result<Arc<Vec<MessageEntity>>, error::SystemError> {
        self.message_repo.find_all().await
    }

    /// Flow:
    /// 1. Append the message (fresh id, sent now, unread)
    /// 2. Fold it into the pair's conversation
    pub async fn send_message(
        &self,
        sender_id: &str,
        receiver_id: &str,
        content: &str,
    ) -> Result<MessageEntity, error::SystemError> {
        let message = MessageEntity {
            id: new_id("message"),
            sender_id: sender_id.to_string(),
            receiver_id: receiver_id.to_string(),
            content: content.to_string(),
            sent_at: chrono::Utc::now(),
            read: false,
        };

        self.message_repo.create(&message).await?;
        let conversation = self.conversation_repo.apply_message(&message).await?;

        info!("Message {} sent in conversation {}", message.id, conversation.id);
        self.toasts
            .emit(Toast::ok("Message Sent").description("Your message has been sent successfully."));
        Ok(message)
    }

    /// Marks what `other_id` sent to `viewer_id` as read and recomputes that pair's
    /// conversation. Returns the refreshed conversation when anything changed.
    pub async fn mark_conversation_as_read(
        &self,
        viewer_id: &str,
        other_id: &str,
    ) -> Result<Option<ConversationEntity>, error::SystemError> {
        let changed = self.message_repo.mark_read(viewer_id, other_id).await?;
        if changed == 0 {
            return Ok(None);
        }

        let pair = self.message_repo.find_between(viewer_id, other_id).await?;
        let Some(conversation) = derive_conversations(&pair).into_iter().next() else {
            return Ok(None);
        };
        self.conversation_repo.replace(conversation.clone()).await?;

        info!("{} read {} messages from {}", viewer_id, changed, other_id);
        Ok(Some(conversation))
    }
}
