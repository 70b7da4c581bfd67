use std::sync::Arc;

use crate::{api::error, modules::notification::schema::NotificationEntity};

#[async_trait::async_trait]
pub trait NotificationRepository {
    async fn find_all(&self) -> Result<Arc<Vec<NotificationEntity>>, error::SystemError>;
    /// Insertion order.
    async fn find_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<NotificationEntity>, error::SystemError>;
    /// Appends the whole batch in one swap.
    async fn insert_many(
        &self,
        notifications: Vec<NotificationEntity>,
    ) -> Result<(), error::SystemError>;
    /// `true` only when an unread notification flipped to read.
    async fn mark_as_read(&self, id: &str) -> Result<bool, error::SystemError>;
}
