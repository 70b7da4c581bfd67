use std::sync::Arc;

use crate::{api::error, modules::message::schema::MessageEntity};

#[async_trait::async_trait]
pub trait MessageRepository {
    /// The whole log in append order.
    async fn find_all(&self) -> Result<Arc<Vec<MessageEntity>>, error::SystemError>;

    /// Messages exchanged between `a` and `b` in either direction, in log order.
    async fn find_between(
        &self,
        a: &str,
        b: &str,
    ) -> Result<Vec<MessageEntity>, error::SystemError>;

    async fn create(&self, message: &MessageEntity) -> Result<(), error::SystemError>;

    /// Marks every unread message from `sender_id` to `receiver_id` as read and returns
    /// how many changed.
    async fn mark_read(
        &self,
        receiver_id: &str,
        sender_id: &str,
    ) -> Result<usize, error::SystemError>;
}
